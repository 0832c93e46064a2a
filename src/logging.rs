//! Structured log record for decorated errors.
//!
//! The crate installs no logger. Instead every decorated error hands out an
//! [`ErrorRecord`] that borrows from it and is consumed immediately by the
//! caller's log pipeline:
//!
//! ```rust
//! use causerr::CodedError;
//!
//! let err = CodedError::new(3, "disk full", "cannot save file");
//! let line = err.with_record(|record| {
//!     let mut buffer = String::new();
//!     record.write_to(&mut buffer).unwrap();
//!     buffer
//! });
//! assert_eq!(line, "[#3] message='cannot save file' cause='disk full'");
//! ```
//!
//! Only `id` and `message` are structured fields, matching the serde
//! output. The cause appears in the text line as its plain text; the
//! stack trace is left to [`RenderMode::Detailed`](crate::RenderMode::Detailed).
//!
//! The record cannot outlive the error it came from, so log buffers never
//! retain borrowed message text past the error's lifetime.

use crate::{Cause, CauseError, CodedError, ErrorId};
use smallvec::SmallVec;
use std::borrow::Cow;
use std::fmt;

/// Byte budget for each field of a text log line.
const MAX_FIELD_LEN: usize = 1024;

/// Bytes kept free at the end of a cut field for the `…[+N bytes]` marker.
const CUT_MARKER_RESERVE: usize = 32;

/// Key/value pairs produced by [`ErrorRecord::fields`].
pub type RecordFields<'a> = SmallVec<[(&'static str, Cow<'a, str>); 2]>;

/// Structured view of a decorated error, borrowed from it.
#[derive(Debug, Clone, Copy)]
pub struct ErrorRecord<'a> {
    id: Option<ErrorId>,
    message: &'a str,
    cause: &'a Cause,
}

impl<'a> ErrorRecord<'a> {
    /// Identifier, for [`CodedError`] records.
    #[inline]
    pub const fn id(&self) -> Option<ErrorId> {
        self.id
    }

    /// The human-facing message.
    #[inline]
    pub const fn message(&self) -> &'a str {
        self.message
    }

    /// The underlying failure.
    #[inline]
    pub const fn cause(&self) -> &'a Cause {
        self.cause
    }

    /// Write a single log line.
    ///
    /// Format: `[#<id>] message='<message>' cause='<cause>'`, with the
    /// `[#<id>] ` prefix only present for coded errors. Message and cause
    /// are each bounded to 1024 bytes.
    pub fn write_to(&self, f: &mut impl fmt::Write) -> fmt::Result {
        if let Some(id) = self.id {
            write!(f, "[#{}] ", id)?;
        }
        let cause = self.cause.to_string();
        write!(
            f,
            "message='{}' cause='{}'",
            bounded(self.message),
            bounded(&cause)
        )
    }

    /// Fields for structured (key/value) loggers: `id` (coded errors only)
    /// and `message`.
    ///
    /// Values are not bounded; that is left to the serializer.
    pub fn fields(&self) -> RecordFields<'a> {
        let mut fields = RecordFields::new();
        if let Some(id) = self.id {
            fields.push(("id", Cow::Owned(id.to_string())));
        }
        fields.push(("message", Cow::Borrowed(self.message)));
        fields
    }
}

impl CauseError {
    /// Structured record borrowing from this error.
    #[inline]
    pub fn record(&self) -> ErrorRecord<'_> {
        ErrorRecord {
            id: None,
            message: self.message(),
            cause: self.cause(),
        }
    }

    /// Callback form of [`CauseError::record`].
    #[inline]
    pub fn with_record<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ErrorRecord<'_>) -> R,
    {
        f(&self.record())
    }
}

impl CodedError {
    /// Structured record borrowing from this error.
    #[inline]
    pub fn record(&self) -> ErrorRecord<'_> {
        ErrorRecord {
            id: Some(self.id()),
            message: self.message(),
            cause: self.cause(),
        }
    }

    /// Callback form of [`CodedError::record`].
    #[inline]
    pub fn with_record<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ErrorRecord<'_>) -> R,
    {
        f(&self.record())
    }
}

/// Fit `s` into [`MAX_FIELD_LEN`] bytes.
///
/// Long text is cut on a char boundary and suffixed with the number of
/// bytes dropped, e.g. `abc…[+2048 bytes]`.
fn bounded(s: &str) -> Cow<'_, str> {
    if s.len() <= MAX_FIELD_LEN {
        return Cow::Borrowed(s);
    }
    let budget = MAX_FIELD_LEN - CUT_MARKER_RESERVE;
    let keep = s
        .char_indices()
        .map(|(start, c)| start + c.len_utf8())
        .take_while(|&end| end <= budget)
        .last()
        .unwrap_or(0);
    Cow::Owned(format!("{}…[+{} bytes]", &s[..keep], s.len() - keep))
}
