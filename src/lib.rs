//! # Causerr
//!
//! Errors decorated with a cause, a human-facing message, an optional
//! numeric identifier and a stack-trace snapshot.
//!
//! ## Design
//!
//! 1. **The cause is kept intact**: the underlying failure (an error value
//!    or a text description) is stored as-is and can always be recovered
//! 2. **The message is for people**: short text meant for non-developers
//! 3. **Identifiers catalogue error kinds**: non-negative, chosen by the application
//! 4. **The call site is recorded**: every decorated error knows where it was built
//! 5. **Decorated errors are ordinary errors**: generic code handles them like
//!    any other `std::error::Error`; lookups recover the decoration
//!
//! ## Variants
//!
//! - [`CauseError`]: cause + message. Displays as `<cause> (<message>)`.
//! - [`CodedError`]: identifier + cause + message. Displays as
//!   `<cause> (<id>: <message>)`.
//!
//! ## Quick Start
//!
//! ```rust
//! use causerr::{CodedError, Render, RenderMode, cause, id, message};
//! use std::error::Error;
//!
//! fn save() -> Result<(), Box<dyn Error + Send + Sync>> {
//!     Err(CodedError::new(3, "disk full", "cannot save file").into())
//! }
//!
//! let err = save().unwrap_err();
//! assert_eq!(err.to_string(), "disk full (3: cannot save file)");
//!
//! // Recover the decoration from the boxed error.
//! assert_eq!(id(&*err), 3);
//! assert_eq!(message(&*err), "cannot save file");
//! assert_eq!(cause(&*err).unwrap().to_string(), "disk full");
//! ```
//!
//! ## Errors and Panics
//!
//! Misuse is a defect in the calling code and is not routed as an error:
//!
//! - A cause that is neither an error value nor text does not compile.
//! - A negative identifier panics ([`CodedError::try_new`] is the
//!   non-panicking alternative).
//!
//! Lookups on foreign errors are expected and return sentinels:
//! [`NO_ID`], `None` or `""`.
//!
//! ## Stack Traces
//!
//! The constructor's call site is always recorded. A full backtrace is
//! captured when `RUST_BACKTRACE` or `RUST_LIB_BACKTRACE` enables it, and
//! appears in [`RenderMode::Detailed`] output and `{:#?}`.

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::result;

pub mod cause;
pub mod codes;
pub mod convenience;
pub mod logging;
pub mod lookup;
pub mod models;
pub mod render;
pub mod trace;

pub use cause::*;
pub use codes::*;
pub use convenience::*;
pub use logging::*;
pub use lookup::*;
pub use models::*;
pub use render::*;
pub use trace::*;

/// Type alias for Results using the identifier-bearing error type.
pub type Result<T, E = CodedError> = result::Result<T, E>;
