use super::DenseList;
use crate::record::{FieldPresence, Record};

///
/// Field-access operations, constrained to record-like elements.
///

impl<T: Record> DenseList<T> {
    /// Project `field` out of each element. Elements missing the field are
    /// skipped.
    #[must_use]
    pub fn pluck(&self, field: &str) -> DenseList<T::Field> {
        DenseList(
            self.0
                .iter()
                .filter_map(|value| value.field(field).into_option())
                .collect(),
        )
    }

    /// Keep the elements whose `field` is present and equal to `expected`.
    #[must_use]
    pub fn where_eq(&self, field: &str, expected: &T::Field) -> Self
    where
        T: Clone,
    {
        self.filter(|value| match value.field(field) {
            FieldPresence::Present(actual) => actual == *expected,
            FieldPresence::Missing => false,
        })
    }

    /// Keep the elements whose `field` is present and equal to one of
    /// `allowed`.
    #[must_use]
    pub fn where_in(&self, field: &str, allowed: &[T::Field]) -> Self
    where
        T: Clone,
    {
        self.filter(|value| match value.field(field) {
            FieldPresence::Present(actual) => allowed.contains(&actual),
            FieldPresence::Missing => false,
        })
    }

    /// Sort ascending by `field`. Elements missing the field order first;
    /// the sort is stable.
    #[must_use]
    pub fn sorted_by_field(&self, field: &str) -> Self
    where
        T: Clone,
        T::Field: Ord,
    {
        let mut values = self.0.clone();
        values.sort_by(|a, b| {
            a.field(field)
                .into_option()
                .cmp(&b.field(field).into_option())
        });

        Self(values)
    }

    /// Sort descending by `field`. Elements missing the field order last;
    /// the sort is stable.
    #[must_use]
    pub fn sorted_by_field_desc(&self, field: &str) -> Self
    where
        T: Clone,
        T::Field: Ord,
    {
        let mut values = self.0.clone();
        values.sort_by(|a, b| {
            b.field(field)
                .into_option()
                .cmp(&a.field(field).into_option())
        });

        Self(values)
    }
}
