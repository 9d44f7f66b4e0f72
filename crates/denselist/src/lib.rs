//! DenseList: an ordered collection whose positional keys are always the
//! contiguous integers `0..n-1`, plus the policy layer that keeps them that
//! way across every construction and mutation path.
#![warn(unreachable_pub)]

pub mod error;
pub mod key;
pub mod keyed;
pub mod list;
pub mod record;

pub use error::UnsupportedError;
pub use key::ListKey;
pub use keyed::KeyedList;
pub use list::DenseList;
pub use record::{FieldPresence, Record};

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
///

pub mod prelude {
    pub use crate::{
        key::ListKey,
        keyed::KeyedList,
        list::DenseList,
        record::{FieldPresence, Record},
    };
}
