//! Resolution of the underlying failure a decorated error wraps.
//!
//! A cause enters the crate in one of exactly two shapes, modelled by
//! [`CauseInput`]: an existing error value, or a plain text description.
//! Any other shape is rejected by the compiler:
//!
//! ```rust,compile_fail
//! # use causerr::CauseError;
//! // A byte slice is neither an error nor text.
//! let err = CauseError::new(&[0u8][..], "unsupported cause");
//! ```
//!
//! Once resolved, the failure is annotated with a [`StackTrace`] and stored
//! as a [`Cause`].

use crate::{CauseError, CodedError, Render, RenderMode, StackTrace};
use std::borrow::Cow;
use std::error::Error;
use std::fmt;
use std::io;

/// Boxed error accepted as a cause.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Tagged union of the two accepted cause shapes.
pub enum CauseInput {
    /// An already-constructed error value.
    Error(BoxError),
    /// A plain text description, turned into a [`TextError`] on resolution.
    Text(Cow<'static, str>),
}

impl CauseInput {
    /// Accept any error value as a cause.
    #[inline]
    pub fn error(err: impl Error + Send + Sync + 'static) -> Self {
        Self::Error(Box::new(err))
    }

    /// Accept a text description as a cause.
    #[inline]
    pub fn text(text: impl Into<Cow<'static, str>>) -> Self {
        Self::Text(text.into())
    }

    fn resolve(self) -> BoxError {
        match self {
            Self::Error(err) => err,
            Self::Text(text) => Box::new(TextError::new(text)),
        }
    }
}

impl fmt::Debug for CauseInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error(err) => f.debug_tuple("Error").field(err).finish(),
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
        }
    }
}

impl From<&'static str> for CauseInput {
    fn from(text: &'static str) -> Self {
        Self::Text(Cow::Borrowed(text))
    }
}

impl From<String> for CauseInput {
    fn from(text: String) -> Self {
        Self::Text(Cow::Owned(text))
    }
}

impl From<Cow<'static, str>> for CauseInput {
    fn from(text: Cow<'static, str>) -> Self {
        Self::Text(text)
    }
}

impl From<BoxError> for CauseInput {
    fn from(err: BoxError) -> Self {
        Self::Error(err)
    }
}

impl From<io::Error> for CauseInput {
    fn from(err: io::Error) -> Self {
        Self::error(err)
    }
}

impl From<fmt::Error> for CauseInput {
    fn from(err: fmt::Error) -> Self {
        Self::error(err)
    }
}

/// Minimal failure value built from a text description.
///
/// Displays exactly the text it was built from and has no source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextError(Cow<'static, str>);

impl TextError {
    /// Create a failure value from text.
    #[inline]
    pub fn new(text: impl Into<Cow<'static, str>>) -> Self {
        Self(text.into())
    }

    /// The text this failure was built from.
    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.as_ref()
    }
}

impl fmt::Display for TextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Error for TextError {}

/// A resolved failure annotated with the stack trace of the decorating call.
///
/// `Display` renders only the wrapped failure, so the cause reads exactly
/// like the value it was built from. The trace surfaces through
/// [`Cause::write_detailed`] and the detailed render mode.
pub struct Cause {
    inner: BoxError,
    trace: StackTrace,
}

impl Cause {
    /// Resolve `input` and annotate it with the caller's stack trace.
    #[track_caller]
    pub fn new(input: impl Into<CauseInput>) -> Self {
        Self {
            inner: input.into().resolve(),
            trace: StackTrace::capture(),
        }
    }

    pub(crate) fn with_trace(input: CauseInput, trace: StackTrace) -> Self {
        Self {
            inner: input.resolve(),
            trace,
        }
    }

    /// The wrapped failure, without its annotation.
    #[inline]
    pub fn get_ref(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.inner.as_ref()
    }

    /// The stack trace captured at construction.
    #[inline]
    pub(crate) const fn trace(&self) -> &StackTrace {
        &self.trace
    }

    /// Attempt to view the wrapped failure as a concrete error type.
    #[inline]
    pub fn downcast_ref<E: Error + 'static>(&self) -> Option<&E> {
        self.inner.downcast_ref::<E>()
    }

    /// Write the failure followed by the stack trace.
    ///
    /// A wrapped [`CauseError`] or [`CodedError`] is written in its own
    /// detailed form, so nested decorations keep their headlines and traces,
    /// innermost trace first.
    pub fn write_detailed(&self, f: &mut dyn fmt::Write) -> fmt::Result {
        let inner = self.get_ref();
        if let Some(e) = inner.downcast_ref::<CauseError>() {
            e.write_rendered(f, RenderMode::Detailed)?;
        } else if let Some(e) = inner.downcast_ref::<CodedError>() {
            e.write_rendered(f, RenderMode::Detailed)?;
        } else {
            write!(f, "{}", self.inner)?;
        }
        write!(f, "\n{}", self.trace)
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl fmt::Debug for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cause")
            .field("error", &self.inner)
            .field("location", &self.trace.location())
            .finish()
    }
}

impl Error for Cause {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.inner.source()
    }
}
