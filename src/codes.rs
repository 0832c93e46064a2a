//! Numeric identifiers for cataloguing error kinds.
//!
//! An identifier is a plain non-negative integer chosen by the application.
//! The crate attaches no meaning to the value beyond the non-negativity
//! invariant, and uses [`NO_ID`] to report that an error carries none.
//!
//! ```rust
//! use causerr::ErrorId;
//!
//! // Known up front: validated when the constant is evaluated.
//! const DISK_FULL: ErrorId = ErrorId::new(3);
//!
//! // From configuration or user input: validated without panicking.
//! # let configured = 12;
//! let id = ErrorId::checked_new(configured).unwrap();
//! assert_eq!(id.value(), 12);
//! ```

use serde::{Serialize, Serializer};
use std::fmt;

/// Identifier reported by lookups for errors that carry no identifier.
pub const NO_ID: i64 = -1;

/// Validated error identifier (always `>= 0`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ErrorId(i64);

impl ErrorId {
    /// Create an identifier.
    ///
    /// # Panics
    ///
    /// Panics (at compile time in const contexts) if `id` is negative.
    /// A negative identifier is a defect in the calling code.
    #[inline]
    pub const fn new(id: i64) -> Self {
        assert!(id >= 0, "id must be >=0");
        Self(id)
    }

    /// Create an identifier, rejecting negative values.
    ///
    /// # Errors
    ///
    /// Returns [`IdError::Negative`] if `id < 0`.
    #[inline]
    pub const fn checked_new(id: i64) -> Result<Self, IdError> {
        if id < 0 {
            Err(IdError::Negative { value: id })
        } else {
            Ok(Self(id))
        }
    }

    /// Raw numeric value.
    #[inline]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ErrorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for ErrorId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.0)
    }
}

impl From<ErrorId> for i64 {
    fn from(id: ErrorId) -> Self {
        id.0
    }
}

impl TryFrom<i64> for ErrorId {
    type Error = IdError;

    fn try_from(id: i64) -> Result<Self, Self::Error> {
        Self::checked_new(id)
    }
}

/// Error type for identifier validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The identifier was below zero.
    Negative {
        /// The rejected identifier.
        value: i64,
    },
}

impl fmt::Display for IdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negative { value } => write!(f, "id must be >=0, got {}", value),
        }
    }
}

impl std::error::Error for IdError {}
