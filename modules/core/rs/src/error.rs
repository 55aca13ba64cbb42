use std::fmt::Debug;

use derive_more::{Display, Error};

pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by range dictionaries and their views.
///
/// All of them are raised synchronously by the offending call and leave the store untouched.
#[derive(Clone, PartialEq, Eq, Debug, Display, Error)]
pub enum Error {
    /// Invalid construction parameters (zero size, no attribute keys, ...).
    #[display("Invalid configuration: {reason}")]
    Configuration { reason: String },

    /// The attribute key is not part of the fixed key set.
    #[display("Unknown attribute key: {key}")]
    KeyNotFound { key: String },

    /// A position or a raw identifier outside of its valid bound.
    #[display("Index {index} is out of range for length {len}")]
    IndexOutOfRange { index: isize, len: usize },

    /// A selector that can't be resolved regardless of the view it is applied to.
    #[display("Invalid selector: {reason}")]
    InvalidSelector { reason: String },

    /// A view spans several distinct values where exactly one was requested.
    #[display("Key {key} has {count} distinct runs within the view")]
    MultipleValues { key: String, count: usize },

    /// A single value was requested from a view without identifiers.
    #[display("Key {key} has no value within an empty view")]
    EmptyView { key: String },

    /// Corrupted run list. Never expected in correct usage, always indicates a bug.
    #[display("Run invariant violated: {details}")]
    InvariantViolation { details: String },
}

impl Error {
    pub fn configuration(reason: impl Into<String>) -> Self {
        Self::Configuration {
            reason: reason.into(),
        }
    }

    pub fn key_not_found(key: &(impl Debug + ?Sized)) -> Self {
        Self::KeyNotFound {
            key: format!("{key:?}"),
        }
    }

    pub fn out_of_range(index: impl TryInto<isize>, len: usize) -> Self {
        Self::IndexOutOfRange {
            index: index.try_into().unwrap_or(isize::MAX),
            len,
        }
    }

    pub fn invalid_selector(reason: impl Into<String>) -> Self {
        Self::InvalidSelector {
            reason: reason.into(),
        }
    }

    pub fn invariant(details: impl Into<String>) -> Self {
        Self::InvariantViolation {
            details: details.into(),
        }
    }
}
