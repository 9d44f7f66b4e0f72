use super::DenseList;
use crate::{error::UnsupportedError, keyed::KeyedList, record::Record};

///
/// Capability restriction.
///
/// Operations from the general collection vocabulary whose natural output
/// is keyed by something other than sequential position. Each one rejects
/// at the point of call, before any work is performed, and leaves the
/// receiver untouched. The `KeyedList` success type records what the
/// operation would produce and therefore why it cannot hold the list
/// invariant.
///

impl<T> DenseList<T> {
    /// Swap keys and values. Rejected: the result would be keyed by the
    /// former values.
    pub fn flip(&self) -> Result<KeyedList<T, usize>, UnsupportedError> {
        Err(UnsupportedError::new("flip"))
    }

    /// Use the list as keys for `values`. Rejected: the result is an
    /// explicitly associative mapping.
    pub fn combine<V, I>(&self, _values: I) -> Result<KeyedList<T, V>, UnsupportedError>
    where
        I: IntoIterator<Item = V>,
    {
        Err(UnsupportedError::new("combine"))
    }

    /// Count occurrences of each distinct element. Rejected: the result
    /// would be keyed by the distinct values.
    pub fn count_by(&self) -> Result<KeyedList<T, usize>, UnsupportedError> {
        Err(UnsupportedError::new("count_by"))
    }

    /// Build `(key, value)` entries from a callback. Rejected: the result
    /// is keyed by callback output.
    pub fn map_with_keys<K, V>(
        &self,
        _f: impl FnMut(&T) -> (K, V),
    ) -> Result<KeyedList<K, V>, UnsupportedError> {
        Err(UnsupportedError::new("map_with_keys"))
    }

    /// Build a dictionary of grouped entries from a callback. Rejected:
    /// the result is keyed by callback output.
    pub fn map_to_dictionary<K, V>(
        &self,
        _f: impl FnMut(&T) -> (K, V),
    ) -> Result<KeyedList<K, DenseList<V>>, UnsupportedError> {
        Err(UnsupportedError::new("map_to_dictionary"))
    }

    /// Build grouped sub-collections from a callback. Rejected: the result
    /// is keyed by callback output.
    pub fn map_to_groups<K, V>(
        &self,
        _f: impl FnMut(&T) -> (K, V),
    ) -> Result<KeyedList<K, DenseList<V>>, UnsupportedError> {
        Err(UnsupportedError::new("map_to_groups"))
    }
}

impl<T: Record> DenseList<T> {
    /// Group elements by a field value. Rejected: the result would map
    /// group keys to sub-collections.
    pub fn group_by(
        &self,
        _field: &str,
    ) -> Result<KeyedList<T::Field, Self>, UnsupportedError> {
        Err(UnsupportedError::new("group_by"))
    }

    /// Re-key elements by a field value. Rejected: the result would be
    /// keyed by that field.
    pub fn key_by(&self, _field: &str) -> Result<KeyedList<T::Field, T>, UnsupportedError> {
        Err(UnsupportedError::new("key_by"))
    }

    /// Project one field keyed by another. The single-argument `pluck`
    /// stays available; this form is rejected because it asks for an
    /// explicit associative key.
    pub fn pluck_with_keys(
        &self,
        _value_field: &str,
        _key_field: &str,
    ) -> Result<KeyedList<T::Field, T::Field>, UnsupportedError> {
        Err(UnsupportedError::new("pluck_with_keys"))
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn record(pairs: &[(&str, i64)]) -> BTreeMap<String, i64> {
        pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), *value))
            .collect()
    }

    #[test]
    fn flip_rejects_and_leaves_receiver_untouched() {
        let list = DenseList::from(vec![1, 2, 3]);

        let result = list.flip();

        assert_eq!(result, Err(UnsupportedError::new("flip")));
        assert_eq!(list, DenseList::from(vec![1, 2, 3]));
    }

    #[test]
    fn combine_rejects() {
        let list = DenseList::from(vec!["a", "b"]);

        assert_eq!(
            list.combine(vec![1, 2]),
            Err(UnsupportedError::new("combine"))
        );
    }

    #[test]
    fn count_by_rejects() {
        let list = DenseList::from(vec!["a", "b", "a"]);

        assert_eq!(list.count_by(), Err(UnsupportedError::new("count_by")));
    }

    #[test]
    fn map_with_keys_rejects_before_running_the_callback() {
        let list = DenseList::from(vec![1, 2, 3]);
        let mut calls = 0;

        let result = list.map_with_keys(|value| {
            calls += 1;
            (*value, *value)
        });

        assert_eq!(result, Err(UnsupportedError::new("map_with_keys")));
        assert_eq!(calls, 0);
    }

    #[test]
    fn map_to_dictionary_rejects() {
        let list = DenseList::from(vec![1, 2]);

        assert_eq!(
            list.map_to_dictionary(|value| (*value, *value)),
            Err(UnsupportedError::new("map_to_dictionary"))
        );
    }

    #[test]
    fn map_to_groups_rejects() {
        let list = DenseList::from(vec![1, 2]);

        assert_eq!(
            list.map_to_groups(|value| (*value, *value)),
            Err(UnsupportedError::new("map_to_groups"))
        );
    }

    #[test]
    fn field_keyed_operations_reject() {
        let list = DenseList::from(vec![
            record(&[("id", 1), ("rank", 10)]),
            record(&[("id", 2), ("rank", 20)]),
        ]);

        assert_eq!(
            list.group_by("rank").unwrap_err(),
            UnsupportedError::new("group_by")
        );
        assert_eq!(
            list.key_by("id").unwrap_err(),
            UnsupportedError::new("key_by")
        );
        assert_eq!(
            list.pluck_with_keys("rank", "id").unwrap_err(),
            UnsupportedError::new("pluck_with_keys")
        );

        // Receiver unchanged after every rejection.
        assert_eq!(list.len(), 2);
    }
}
