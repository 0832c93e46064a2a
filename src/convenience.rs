//! Shorthands for decorating failures at the point they are reported.
//!
//! - [`ResultExt`] decorates the error side of a `Result`.
//! - [`causerr!`](crate::causerr) and [`coded!`](crate::coded) build errors
//!   with a formatted message.
//!
//! ```rust
//! use causerr::{CodedError, ResultExt, id, message};
//! use std::fs::File;
//!
//! fn open_settings() -> Result<File, CodedError> {
//!     File::open("/nonexistent/settings.toml").with_id(12, "settings could not be loaded")
//! }
//!
//! let err = open_settings().unwrap_err();
//! assert_eq!(id(&err), 12);
//! assert_eq!(message(&err), "settings could not be loaded");
//! ```

use crate::{CauseError, CodedError};
use std::borrow::Cow;
use std::error::Error;

/// Decorate the error side of a `Result`.
pub trait ResultExt<T> {
    /// Wrap the error in a [`CauseError`] carrying `message`.
    fn with_message(self, message: impl Into<Cow<'static, str>>) -> Result<T, CauseError>;

    /// Wrap the error in a [`CodedError`] carrying `id` and `message`.
    ///
    /// # Panics
    ///
    /// Panics if the result is an error and `id` is negative.
    fn with_id(self, id: i64, message: impl Into<Cow<'static, str>>) -> Result<T, CodedError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Error + Send + Sync + 'static,
{
    #[track_caller]
    fn with_message(self, message: impl Into<Cow<'static, str>>) -> Result<T, CauseError> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(CauseError::wrap(err, message)),
        }
    }

    #[track_caller]
    fn with_id(self, id: i64, message: impl Into<Cow<'static, str>>) -> Result<T, CodedError> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(CodedError::wrap(id, err, message)),
        }
    }
}

/// Build a [`CauseError`] with a formatted message.
///
/// ```rust
/// # use causerr::causerr;
/// let attempts = 3;
/// let err = causerr!("connection refused", "gave up after {} attempts", attempts);
/// assert_eq!(err.to_string(), "connection refused (gave up after 3 attempts)");
/// ```
#[macro_export]
macro_rules! causerr {
    ($cause:expr, $msg:literal $(,)?) => {
        $crate::CauseError::new($cause, $msg)
    };
    ($cause:expr, $fmt:literal, $($arg:tt)+) => {
        $crate::CauseError::new($cause, ::std::format!($fmt, $($arg)+))
    };
}

/// Build a [`CodedError`] with a formatted message.
///
/// Panics if the identifier is negative, like [`CodedError::new`].
///
/// ```rust
/// # use causerr::coded;
/// let path = "report.pdf";
/// let err = coded!(3, "disk full", "cannot save {}", path);
/// assert_eq!(err.to_string(), "disk full (3: cannot save report.pdf)");
/// ```
#[macro_export]
macro_rules! coded {
    ($id:expr, $cause:expr, $msg:literal $(,)?) => {
        $crate::CodedError::new($id, $cause, $msg)
    };
    ($id:expr, $cause:expr, $fmt:literal, $($arg:tt)+) => {
        $crate::CodedError::new($id, $cause, ::std::format!($fmt, $($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cause, id, message};
    use std::io;

    fn failing() -> Result<u8, io::Error> {
        Err(io::Error::new(io::ErrorKind::NotFound, "missing"))
    }

    #[test]
    fn with_message_wraps_error() {
        let err = failing().with_message("not available").unwrap_err();
        assert_eq!(err.to_string(), "missing (not available)");
        assert_eq!(message(&err), "not available");
    }

    #[test]
    fn with_id_wraps_error() {
        let err = failing().with_id(5, "not available").unwrap_err();
        assert_eq!(id(&err), 5);
        let kind = cause(&err)
            .and_then(|c| c.downcast_ref::<io::Error>())
            .map(io::Error::kind);
        assert_eq!(kind, Some(io::ErrorKind::NotFound));
    }

    #[test]
    fn ok_passes_through() {
        let ok: Result<u8, io::Error> = Ok(1);
        assert_eq!(ok.with_id(-1, "unused").unwrap(), 1);
    }

    #[test]
    fn location_is_call_site() {
        let line = line!() + 1;
        let err = failing().with_message("m").unwrap_err();
        assert_eq!(err.cause().trace().location().line(), line);
    }

    #[test]
    fn macros_format_messages() {
        let n = 2;
        let a = crate::causerr!("c", "plain");
        let b = crate::coded!(1, "c", "{} left", n);
        assert_eq!(a.message(), "plain");
        assert_eq!(b.message(), "2 left");
    }
}
