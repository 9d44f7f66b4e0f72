///
/// ListKey
///
/// The addressing space accepted by positional operations. A key may be
/// absent, an integer of any sign, or text. Resolution never fails: a key
/// that cannot address a position compatible with the list invariant
/// degrades to an append (writes) or a miss (removals).
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ListKey {
    /// No key supplied. Writes append.
    Null,
    /// Integer key, possibly negative or out of range.
    Int(i64),
    /// Non-integer key. Never addresses a position.
    Text(String),
}

impl ListKey {
    /// Slot a write at this key should target on a list of `len` items.
    ///
    /// `0..len` overwrites and `len` appends; every other key degrades to
    /// an append at `len`.
    #[must_use]
    pub(crate) fn write_slot(&self, len: usize) -> usize {
        match self {
            Self::Int(key) => usize::try_from(*key)
                .ok()
                .filter(|slot| *slot <= len)
                .unwrap_or(len),
            Self::Null | Self::Text(_) => len,
        }
    }

    /// Existing position this key addresses on a list of `len` items.
    #[must_use]
    pub(crate) fn position(&self, len: usize) -> Option<usize> {
        match self {
            Self::Int(key) => usize::try_from(*key).ok().filter(|index| *index < len),
            Self::Null | Self::Text(_) => None,
        }
    }
}

impl From<i64> for ListKey {
    fn from(key: i64) -> Self {
        Self::Int(key)
    }
}

impl From<i32> for ListKey {
    fn from(key: i32) -> Self {
        Self::Int(i64::from(key))
    }
}

impl From<u32> for ListKey {
    fn from(key: u32) -> Self {
        Self::Int(i64::from(key))
    }
}

impl From<usize> for ListKey {
    fn from(key: usize) -> Self {
        // Positions beyond i64 cannot exist in a real list; saturating
        // keeps them on the degrade-to-append path.
        Self::Int(i64::try_from(key).unwrap_or(i64::MAX))
    }
}

impl From<&str> for ListKey {
    fn from(key: &str) -> Self {
        Self::Text(key.to_string())
    }
}

impl From<String> for ListKey {
    fn from(key: String) -> Self {
        Self::Text(key)
    }
}

impl<K: Into<Self>> From<Option<K>> for ListKey {
    fn from(key: Option<K>) -> Self {
        key.map_or(Self::Null, Into::into)
    }
}

///
/// TESTS
///
