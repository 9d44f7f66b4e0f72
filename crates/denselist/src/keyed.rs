use derive_more::Deref;
use serde::{Deserialize, Deserializer, Serialize};

///
/// KeyedList
///
/// Deterministic key-ordered list of `(K, V)` entries. Enforces unique
/// keys and sorts by ascending key order.
///
/// This is the associative counterpart to `DenseList`: the keyed source a
/// list can be constructed from (keys discarded), and the shape of result
/// that the blocked operations would otherwise produce.
///

#[derive(Clone, Debug, Default, Deref, Eq, PartialEq, Serialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct KeyedList<K, V>(Vec<(K, V)>);

impl<K, V> KeyedList<K, V> {
    /// Create an empty keyed list.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Return the number of entries in the list.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the list is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return an iterator over `(key, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.0.iter().map(|(k, v)| (k, v))
    }

    /// Return a mutable iterator over `(key, value)` pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&K, &mut V)> {
        self.0.iter_mut().map(|(k, v)| (&*k, v))
    }

    /// Return an iterator over the keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.0.iter().map(|(k, _)| k)
    }

    /// Return an iterator over the values in key order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.0.iter().map(|(_, v)| v)
    }

    /// Clear all entries from the list.
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl<K, V> KeyedList<K, V>
where
    K: Ord,
{
    /// Build a keyed list, keeping the last value for each key.
    #[must_use]
    pub fn from_vec(entries: Vec<(K, V)>) -> Self {
        let mut list = Self::new();
        for (key, value) in entries {
            list.insert(key, value);
        }

        list
    }

    /// Return a reference to the value for `key` if present.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.find_index(key).ok().map(|idx| &self.0[idx].1)
    }

    /// Return a mutable reference to the value for `key` if present.
    #[must_use]
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.find_index(key).ok().map(|idx| &mut self.0[idx].1)
    }

    /// Insert or replace a value for `key`, returning the old value if present.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.find_index(&key) {
            Ok(index) => Some(std::mem::replace(&mut self.0[index].1, value)),
            Err(index) => {
                self.0.insert(index, (key, value));
                None
            }
        }
    }

    /// Remove the entry for `key`, returning the value if present.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        match self.find_index(key) {
            Ok(index) => Some(self.0.remove(index).1),
            Err(_) => None,
        }
    }

    /// Returns `true` if the list contains `key`.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.find_index(key).is_ok()
    }

    // Locate a key in the sorted list.
    fn find_index(&self, key: &K) -> Result<usize, usize> {
        self.0.binary_search_by(|(candidate, _)| candidate.cmp(key))
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for KeyedList<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(entries: I) -> Self {
        Self::from_vec(entries.into_iter().collect())
    }
}

impl<K, V> IntoIterator for KeyedList<K, V> {
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a KeyedList<K, V> {
    type Item = &'a (K, V);
    type IntoIter = std::slice::Iter<'a, (K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'de, K, V> Deserialize<'de> for KeyedList<K, V>
where
    K: Deserialize<'de> + Ord,
    V: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = Vec::<(K, V)>::deserialize(deserializer)?;

        Ok(Self::from_vec(entries))
    }
}

///
/// TESTS
///
