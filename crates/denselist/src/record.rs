use crate::keyed::KeyedList;
use std::collections::{BTreeMap, HashMap};

///
/// FieldPresence
///
/// Result of attempting to read a named field from a record. This
/// distinguishes between a missing field and a present field whose value
/// happens to compare equal to some default.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FieldPresence<F> {
    /// Field exists and has a value.
    Present(F),
    /// Field is not present on the record.
    Missing,
}

impl<F> FieldPresence<F> {
    /// Convert into an `Option`, losing the presence distinction.
    #[must_use]
    pub fn into_option(self) -> Option<F> {
        match self {
            Self::Present(value) => Some(value),
            Self::Missing => None,
        }
    }
}

///
/// Record
///
/// Abstraction over an element that exposes fields by name. Field-access
/// operations on `DenseList` (`pluck`, `where_eq`, `where_in`, field
/// sorts) are constrained to `Record` elements rather than allowing
/// arbitrary untyped access.
///

pub trait Record {
    type Field: Clone + PartialEq;

    fn field(&self, name: &str) -> FieldPresence<Self::Field>;
}

impl<F: Clone + PartialEq> Record for BTreeMap<String, F> {
    type Field = F;

    fn field(&self, name: &str) -> FieldPresence<F> {
        self.get(name)
            .map_or(FieldPresence::Missing, |value| {
                FieldPresence::Present(value.clone())
            })
    }
}

impl<F: Clone + PartialEq> Record for HashMap<String, F> {
    type Field = F;

    fn field(&self, name: &str) -> FieldPresence<F> {
        self.get(name)
            .map_or(FieldPresence::Missing, |value| {
                FieldPresence::Present(value.clone())
            })
    }
}

impl<F: Clone + PartialEq> Record for KeyedList<String, F> {
    type Field = F;

    fn field(&self, name: &str) -> FieldPresence<F> {
        self.iter()
            .find(|(key, _)| key.as_str() == name)
            .map_or(FieldPresence::Missing, |(_, value)| {
                FieldPresence::Present(value.clone())
            })
    }
}

///
/// TESTS
///
