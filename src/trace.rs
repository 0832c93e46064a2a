//! Stack-trace snapshot taken when an error is decorated.
//!
//! Two pieces are recorded:
//!
//! - The **call site** of the constructor, obtained through `#[track_caller]`.
//!   This is always available and costs nothing beyond a `&'static` pointer.
//! - A full **backtrace**, captured with [`std::backtrace::Backtrace::capture`].
//!   Whether frames are actually collected is controlled by the standard
//!   `RUST_BACKTRACE` / `RUST_LIB_BACKTRACE` environment variables, so
//!   release deployments pay for unwinding only when they opt in.

use std::backtrace::{Backtrace, BacktraceStatus};
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

/// Snapshot of where an error was decorated.
///
/// Cloning is cheap: a captured backtrace is shared behind an [`Arc`],
/// disabled and unsupported backtraces hold no allocation at all.
#[derive(Debug, Clone)]
pub struct StackTrace {
    location: &'static Location<'static>,
    frames: Frames,
}

#[derive(Debug, Clone)]
enum Frames {
    Captured(Arc<Backtrace>),
    Disabled,
    Unsupported,
}

impl Frames {
    fn from_backtrace(bt: Backtrace) -> Self {
        match bt.status() {
            BacktraceStatus::Disabled => Self::Disabled,
            BacktraceStatus::Unsupported => Self::Unsupported,
            _ => Self::Captured(Arc::new(bt)),
        }
    }
}

impl StackTrace {
    /// Capture the caller's location and, if enabled by the environment,
    /// its backtrace.
    #[track_caller]
    #[inline]
    pub fn capture() -> Self {
        Self {
            location: Location::caller(),
            frames: Frames::from_backtrace(Backtrace::capture()),
        }
    }

    /// Capture the caller's location and a backtrace regardless of the
    /// environment configuration.
    #[track_caller]
    pub fn force_capture() -> Self {
        Self {
            location: Location::caller(),
            frames: Frames::from_backtrace(Backtrace::force_capture()),
        }
    }

    /// Source location of the decorating call.
    #[inline]
    pub const fn location(&self) -> &'static Location<'static> {
        self.location
    }

    /// Status of the backtrace part of the snapshot.
    pub fn status(&self) -> BacktraceStatus {
        match &self.frames {
            Frames::Captured(bt) => bt.status(),
            Frames::Disabled => BacktraceStatus::Disabled,
            Frames::Unsupported => BacktraceStatus::Unsupported,
        }
    }

    /// The captured backtrace, if frames were collected.
    pub fn backtrace(&self) -> Option<&Backtrace> {
        match &self.frames {
            Frames::Captured(bt) => Some(bt.as_ref()),
            Frames::Disabled | Frames::Unsupported => None,
        }
    }
}

impl fmt::Display for StackTrace {
    /// Renders `    at <file>:<line>:<col>` followed by the backtrace,
    /// one frame per line, when one was captured.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "    at {}", self.location)?;
        if let Some(bt) = self.backtrace() {
            write!(f, "\n{bt}")?;
        }
        Ok(())
    }
}
