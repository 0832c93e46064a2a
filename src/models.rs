//! The decorated error values.
//!
//! Two variants exist:
//!
//! - [`CauseError`]: a cause plus a human-facing message.
//! - [`CodedError`]: the same, plus an [`ErrorId`] cataloguing the error kind.
//!
//! Both are immutable once built. To code that does not know about this
//! crate they are ordinary `std::error::Error` values; the functions in
//! [`crate::lookup`] recover the decoration.
//!
//! # Rendering
//!
//! | Trait / call              | Output                                          |
//! |---------------------------|-------------------------------------------------|
//! | `Display` (`{}`)          | `disk full (cannot save file)` / `disk full (3: cannot save file)` |
//! | `Debug` (`{:?}`)          | [`RenderMode::Default`]                         |
//! | alternate `Debug` (`{:#?}`) | [`RenderMode::Detailed`]                      |
//! | [`Render::render`]        | any [`RenderMode`]                              |
//!
//! # Memory Hygiene
//!
//! Owned message text is wiped with `zeroize` when the error drops.
//! Messages are meant for end users and frequently embed user input.

use crate::render::Rendered;
use crate::{Cause, CauseInput, ErrorId, IdError, Render, RenderMode, StackTrace};
use serde::Serialize;
use std::borrow::Cow;
use std::error::Error;
use std::fmt;
use zeroize::Zeroize;

/// Human-facing message with zeroization of owned text.
#[derive(Serialize)]
#[serde(transparent)]
struct Message(Cow<'static, str>);

impl Message {
    #[inline]
    fn as_str(&self) -> &str {
        self.0.as_ref()
    }
}

impl Zeroize for Message {
    fn zeroize(&mut self) {
        if let Cow::Owned(ref mut s) = self.0 {
            s.zeroize();
        }
    }
}

impl Drop for Message {
    fn drop(&mut self) {
        self.zeroize();
    }
}

// ============================================================================
// Variant A: cause + message
// ============================================================================

/// An error decorated with a human-facing message.
///
/// # Example
///
/// ```rust
/// use causerr::{CauseError, message};
///
/// let err = CauseError::new("disk full", "cannot save file");
/// assert_eq!(err.to_string(), "disk full (cannot save file)");
/// assert_eq!(message(&err), "cannot save file");
/// ```
#[derive(Serialize)]
#[must_use = "errors should be handled or logged"]
pub struct CauseError {
    #[serde(skip)]
    cause: Cause,
    message: Message,
}

impl CauseError {
    /// Decorate `cause` with `message`, capturing the caller's stack trace.
    ///
    /// `cause` is either text (`&'static str`, `String`, `Cow<'static, str>`)
    /// or an error value (see [`CauseInput`]).
    #[track_caller]
    pub fn new(cause: impl Into<CauseInput>, message: impl Into<Cow<'static, str>>) -> Self {
        let trace = StackTrace::capture();
        Self {
            cause: Cause::with_trace(cause.into(), trace),
            message: Message(message.into()),
        }
    }

    /// Decorate an arbitrary error value with `message`.
    #[track_caller]
    pub fn wrap(
        err: impl Error + Send + Sync + 'static,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(CauseInput::error(err), message)
    }

    /// The human-facing message.
    #[inline]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// The annotated cause.
    #[inline]
    pub const fn cause(&self) -> &Cause {
        &self.cause
    }
}

impl Render for CauseError {
    fn write_headline(&self, f: &mut dyn fmt::Write) -> fmt::Result {
        f.write_str(self.message())
    }

    fn render_cause(&self) -> &Cause {
        &self.cause
    }
}

impl fmt::Display for CauseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.cause, self.message())
    }
}

impl fmt::Debug for CauseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = if f.alternate() {
            RenderMode::Detailed
        } else {
            RenderMode::Default
        };
        fmt::Display::fmt(&Rendered(self, mode), f)
    }
}

impl Error for CauseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.cause)
    }
}

// ============================================================================
// Variant B: identifier + cause + message
// ============================================================================

/// An error decorated with an identifier and a human-facing message.
///
/// # Example
///
/// ```rust
/// use causerr::{CodedError, id};
///
/// let err = CodedError::new(3, "disk full", "cannot save file");
/// assert_eq!(err.to_string(), "disk full (3: cannot save file)");
/// assert_eq!(id(&err), 3);
/// ```
#[derive(Serialize)]
#[must_use = "errors should be handled or logged"]
pub struct CodedError {
    id: ErrorId,
    #[serde(skip)]
    cause: Cause,
    message: Message,
}

impl CodedError {
    /// Decorate `cause` with `id` and `message`, capturing the caller's
    /// stack trace.
    ///
    /// # Panics
    ///
    /// Panics if `id` is negative. Use [`CodedError::try_new`] when the
    /// identifier comes from an untrusted source.
    #[track_caller]
    pub fn new(
        id: i64,
        cause: impl Into<CauseInput>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::with_id(ErrorId::new(id), cause, message)
    }

    /// Like [`CodedError::new`] but reports a negative `id` as an error.
    ///
    /// # Errors
    ///
    /// Returns [`IdError::Negative`] if `id < 0`.
    #[track_caller]
    pub fn try_new(
        id: i64,
        cause: impl Into<CauseInput>,
        message: impl Into<Cow<'static, str>>,
    ) -> Result<Self, IdError> {
        let id = ErrorId::checked_new(id)?;
        Ok(Self::with_id(id, cause, message))
    }

    /// Decorate `cause` with an already-validated identifier.
    #[track_caller]
    pub fn with_id(
        id: ErrorId,
        cause: impl Into<CauseInput>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        let trace = StackTrace::capture();
        Self {
            id,
            cause: Cause::with_trace(cause.into(), trace),
            message: Message(message.into()),
        }
    }

    /// Decorate an arbitrary error value with `id` and `message`.
    ///
    /// # Panics
    ///
    /// Panics if `id` is negative.
    #[track_caller]
    pub fn wrap(
        id: i64,
        err: impl Error + Send + Sync + 'static,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(id, CauseInput::error(err), message)
    }

    /// The identifier.
    #[inline]
    pub const fn id(&self) -> ErrorId {
        self.id
    }

    /// The human-facing message.
    #[inline]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// The annotated cause.
    #[inline]
    pub const fn cause(&self) -> &Cause {
        &self.cause
    }
}

impl Render for CodedError {
    fn write_headline(&self, f: &mut dyn fmt::Write) -> fmt::Result {
        write!(f, "#{}: {}", self.id, self.message())
    }

    fn render_cause(&self) -> &Cause {
        &self.cause
    }
}

impl fmt::Display for CodedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}: {})", self.cause, self.id, self.message())
    }
}

impl fmt::Debug for CodedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = if f.alternate() {
            RenderMode::Detailed
        } else {
            RenderMode::Default
        };
        fmt::Display::fmt(&Rendered(self, mode), f)
    }
}

impl Error for CodedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.cause)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn cause_error_as_text() {
        let err = CauseError::new("disk full", "cannot save file");
        assert_eq!(err.to_string(), "disk full (cannot save file)");
        assert_eq!(err.message(), "cannot save file");
        assert_eq!(err.cause().to_string(), "disk full");
    }

    #[test]
    fn coded_error_as_text() {
        let err = CodedError::new(3, "disk full", "cannot save file");
        assert_eq!(err.to_string(), "disk full (3: cannot save file)");
        assert_eq!(err.id().value(), 3);
    }

    #[test]
    #[should_panic(expected = "id must be >=0")]
    fn coded_error_rejects_negative_id() {
        let _ = CodedError::new(-1, "x", "y");
    }

    #[test]
    fn try_new_reports_negative_id() {
        let res = CodedError::try_new(-2, "x", "y");
        assert!(matches!(res, Err(IdError::Negative { value: -2 })));
        assert!(CodedError::try_new(0, "x", "y").is_ok());
    }

    #[test]
    fn empty_message_is_allowed() {
        let err = CauseError::new("cause", "");
        assert_eq!(err.message(), "");
        assert_eq!(err.to_string(), "cause ()");
    }

    #[test]
    fn wraps_error_values() {
        let io_err = io::Error::other("pipe closed");
        let err = CodedError::wrap(7, io_err, "upload failed");
        assert_eq!(err.to_string(), "pipe closed (7: upload failed)");
        assert!(err.cause().downcast_ref::<io::Error>().is_some());
    }

    #[test]
    fn source_exposes_cause() {
        let err = CauseError::new("inner", "outer");
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("inner"));
    }

    #[test]
    fn render_modes_variant_a() {
        let err = CauseError::new("disk full", "cannot save file");
        assert_eq!(err.render(RenderMode::Default), "cannot save file\ndisk full");
        assert_eq!(err.render(RenderMode::Display), "cannot save file\ndisk full");
        assert_eq!(
            err.render(RenderMode::Quoted),
            "cannot save file\n\"disk full\""
        );
        assert!(
            err.render(RenderMode::Detailed)
                .starts_with("cannot save file\ndisk full\n    at ")
        );
    }

    #[test]
    fn render_modes_variant_b() {
        let err = CodedError::new(3, "disk full", "cannot save file");
        assert_eq!(err.render(RenderMode::Default), "#3: cannot save file\ndisk full");
        assert_eq!(
            err.render(RenderMode::Quoted),
            "#3: cannot save file\n\"disk full\""
        );
        assert!(err.render(RenderMode::Detailed).contains(file!()));
        assert_eq!(err.render_verb('z', false), "");
    }

    #[test]
    fn detailed_render_keeps_nested_headlines() {
        let inner_line = line!() + 1;
        let inner = CodedError::new(2, "root", "inner");
        let outer_line = line!() + 1;
        let err = CodedError::wrap(1, inner, "outer");
        let out = err.render(RenderMode::Detailed);
        assert!(out.starts_with("#1: outer\n#2: inner\nroot\n    at "));
        let inner_at = out.find(&format!("{}:{}:", file!(), inner_line));
        let outer_at = out.find(&format!("{}:{}:", file!(), outer_line));
        assert!(matches!((inner_at, outer_at), (Some(i), Some(o)) if i < o));

        let plain = CauseError::wrap(CauseError::new("root", "inner"), "outer");
        assert!(
            plain
                .render(RenderMode::Detailed)
                .starts_with("outer\ninner\nroot\n    at ")
        );
        assert_eq!(plain.render(RenderMode::Default), "outer\nroot (inner)");
    }

    #[test]
    fn debug_uses_render_modes() {
        let err = CodedError::new(1, "c", "m");
        assert_eq!(format!("{:?}", err), "#1: m\nc");
        assert!(format!("{:#?}", err).starts_with("#1: m\nc\n    at "));
    }

    #[test]
    fn trace_points_at_construction_site() {
        let line = line!() + 1;
        let err = CauseError::new("c", "m");
        assert_eq!(err.cause().trace().location().line(), line);
        assert_eq!(err.cause().trace().location().file(), file!());
    }

    #[test]
    fn serializes_named_fields_only() {
        let a = CauseError::new("secret cause", "shown");
        assert_eq!(serde_json::to_string(&a).unwrap(), r#"{"message":"shown"}"#);

        let b = CodedError::new(4, "secret cause", "shown");
        assert_eq!(
            serde_json::to_string(&b).unwrap(),
            r#"{"id":4,"message":"shown"}"#
        );
    }

    #[test]
    fn message_zeroizes_owned_text() {
        let mut msg = Message(Cow::Owned(String::from("user data")));
        msg.zeroize();
        assert_eq!(msg.as_str(), "");
    }

    #[test]
    fn message_leaves_borrowed_text() {
        let mut msg = Message(Cow::Borrowed("static"));
        msg.zeroize();
        assert_eq!(msg.as_str(), "static");
    }

    #[test]
    fn errors_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync + 'static>() {}
        assert_send_sync::<CauseError>();
        assert_send_sync::<CodedError>();
    }
}
