//! Multi-mode rendering of decorated errors.
//!
//! Every rendering is a headline (`<message>` or `#<id>: <message>`), a
//! newline, and the cause rendered according to the mode:
//!
//! | Mode       | Verb  | Cause rendering                   |
//! |------------|-------|-----------------------------------|
//! | `Detailed` | `+v`  | text, call site and backtrace     |
//! | `Default`  | `v`   | plain text                        |
//! | `Display`  | `s`   | plain text                        |
//! | `Quoted`   | `q`   | escaped, double-quoted text       |
//!
//! Verbs outside this table render nothing.

use crate::Cause;
use std::fmt;

/// Recognized rendering modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderMode {
    /// Headline plus the cause with its stack trace.
    Detailed,
    /// Headline plus the plain cause text.
    Default,
    /// Same output as `Default`.
    Display,
    /// Headline plus the cause text as a quoted string.
    Quoted,
}

impl RenderMode {
    /// Map a formatting verb to a mode.
    ///
    /// `alternate` is the `+` flag and only changes the meaning of `v`.
    /// Returns `None` for unrecognized verbs.
    #[inline]
    pub const fn from_verb(verb: char, alternate: bool) -> Option<Self> {
        match verb {
            'v' if alternate => Some(Self::Detailed),
            'v' => Some(Self::Default),
            's' => Some(Self::Display),
            'q' => Some(Self::Quoted),
            _ => None,
        }
    }
}

/// Capability shared by the decorated error types: rendering in any
/// [`RenderMode`].
pub trait Render {
    /// Write the headline line (without trailing newline).
    fn write_headline(&self, f: &mut dyn fmt::Write) -> fmt::Result;

    /// The annotated cause rendered below the headline.
    fn render_cause(&self) -> &Cause;

    /// Write the full rendering for `mode`.
    fn write_rendered(&self, f: &mut dyn fmt::Write, mode: RenderMode) -> fmt::Result {
        self.write_headline(f)?;
        f.write_char('\n')?;
        let cause = self.render_cause();
        match mode {
            RenderMode::Detailed => cause.write_detailed(f),
            RenderMode::Default | RenderMode::Display => write!(f, "{}", cause),
            RenderMode::Quoted => write!(f, "{:?}", cause.to_string()),
        }
    }

    /// Render to a new string.
    fn render(&self, mode: RenderMode) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_rendered(&mut out, mode);
        out
    }

    /// Render for a formatting verb; unrecognized verbs yield an empty string.
    fn render_verb(&self, verb: char, alternate: bool) -> String {
        match RenderMode::from_verb(verb, alternate) {
            Some(mode) => self.render(mode),
            None => String::new(),
        }
    }
}

/// Adapter so `Render` output can feed a `fmt::Formatter` directly.
pub(crate) struct Rendered<'a, R: ?Sized>(pub(crate) &'a R, pub(crate) RenderMode);

impl<R: Render + ?Sized> fmt::Display for Rendered<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.write_rendered(f, self.1)
    }
}
