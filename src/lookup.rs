//! Recover decoration from arbitrary error values.
//!
//! These functions accept any `&(dyn Error + 'static)`, including
//! `&*boxed` for a `Box<dyn Error + Send + Sync>`. A value that was not
//! produced by this crate is a normal lookup miss and yields the documented
//! sentinel; none of these functions panic or allocate.

use crate::{Cause, CauseError, CodedError, NO_ID};
use std::error::Error;

/// Identifier of a [`CodedError`], or [`NO_ID`] (`-1`) for anything else.
///
/// ```rust
/// use causerr::{CauseError, CodedError, NO_ID, id};
///
/// assert_eq!(id(&CodedError::new(3, "disk full", "cannot save file")), 3);
/// assert_eq!(id(&CauseError::new("disk full", "cannot save file")), NO_ID);
/// ```
pub fn id(err: &(dyn Error + 'static)) -> i64 {
    match err.downcast_ref::<CodedError>() {
        Some(coded) => coded.id().value(),
        None => NO_ID,
    }
}

/// Annotated cause of a decorated error, or `None` for anything else.
pub fn cause<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a Cause> {
    if let Some(e) = err.downcast_ref::<CauseError>() {
        return Some(e.cause());
    }
    err.downcast_ref::<CodedError>().map(CodedError::cause)
}

/// Message of a decorated error, or `""` for anything else.
pub fn message<'a>(err: &'a (dyn Error + 'static)) -> &'a str {
    if let Some(e) = err.downcast_ref::<CauseError>() {
        return e.message();
    }
    match err.downcast_ref::<CodedError>() {
        Some(e) => e.message(),
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BoxError;
    use std::fmt;
    use std::io;

    #[derive(Debug)]
    struct Plain;

    impl fmt::Display for Plain {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("boom")
        }
    }

    impl Error for Plain {}

    #[test]
    fn foreign_errors_miss() {
        let err = Plain;
        assert_eq!(message(&err), "");
        assert!(cause(&err).is_none());
        assert_eq!(id(&err), NO_ID);
    }

    #[test]
    fn io_error_misses() {
        let err = io::Error::new(io::ErrorKind::NotFound, "boom");
        assert_eq!(message(&err), "");
        assert_eq!(id(&err), -1);
    }

    #[test]
    fn variant_a_lookups() {
        let err = CauseError::new("disk full", "cannot save file");
        assert_eq!(message(&err), "cannot save file");
        assert_eq!(cause(&err).map(|c| c.to_string()).as_deref(), Some("disk full"));
        assert_eq!(id(&err), NO_ID);
    }

    #[test]
    fn variant_b_lookups() {
        let err = CodedError::new(3, "disk full", "cannot save file");
        assert_eq!(message(&err), "cannot save file");
        assert_eq!(cause(&err).map(|c| c.to_string()).as_deref(), Some("disk full"));
        assert_eq!(id(&err), 3);
    }

    #[test]
    fn lookups_through_boxed_trait_objects() {
        let boxed: BoxError = Box::new(CodedError::wrap(0, Plain, "wrapped"));
        assert_eq!(id(&*boxed), 0);
        assert_eq!(message(&*boxed), "wrapped");
        assert!(cause(&*boxed).and_then(|c| c.downcast_ref::<Plain>()).is_some());
    }

    #[test]
    fn cause_of_error_input_keeps_its_text() {
        let err = CauseError::wrap(CauseError::new("root", "inner"), "outer");
        let inner = cause(&err).map(|c| c.to_string());
        assert_eq!(inner.as_deref(), Some("root (inner)"));
    }
}
