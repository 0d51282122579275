//! # errs: structured RPC errors
//!
//! An error value for request-processing frameworks that keeps a numeric
//! status code and an origin classification while composing with the
//! standard `std::error::Error` chain.
//!
//! ## Design
//!
//! [`Error`] carries:
//!
//! - **kind**: [`ErrorType::Business`], [`ErrorType::Framework`] or
//!   [`ErrorType::CalleeFramework`]
//! - **code**: an `i32` status, see [`codes`] for the reserved values
//! - **msg** / **desc**: message and framework annotation
//! - an optional boxed **cause** and an optional captured **stack**
//!
//! [`code`] and [`msg`] read any error, not just this crate's: they walk the
//! `source()` chain for the first [`Error`] and fall back to `RET_UNKNOWN` /
//! the error's own text when there is none. Absent errors (`None`) report
//! success.
//!
//! ## Quick Start
//!
//! ```rust
//! use errs::codes::{RET_CLIENT_TIMEOUT, RET_UNKNOWN};
//! use errs::{Error, ErrorType};
//!
//! // Business error
//! let err = errs::new(10000, "test error");
//! assert_eq!(err.to_string(), "type:business, code:10000, msg:test error");
//!
//! // Wrapping is absence-preserving
//! let none: Option<std::io::Error> = None;
//! assert!(errs::wrap(none, 1, "never built").is_none());
//!
//! // Framework errors wrap foreign causes
//! let io_err = std::io::Error::new(std::io::ErrorKind::TimedOut, "deadline");
//! let err = Error::wrap_framework(io_err, RET_CLIENT_TIMEOUT, "call backend");
//! assert!(err.is_timeout(ErrorType::Framework));
//!
//! // Extraction
//! assert_eq!(errs::code(Some(&err)), RET_CLIENT_TIMEOUT);
//! assert_eq!(errs::code(None::<&Error>), 0);
//! let foreign = std::fmt::Error;
//! assert_eq!(errs::code(Some(&foreign)), RET_UNKNOWN);
//! ```
//!
//! ## Stack traces
//!
//! Stack capture is off by default. Turn it on once at startup:
//!
//! ```rust
//! errs::config::set_traceable(true);
//! let err = errs::new(111, "inner fail");
//! println!("{err:#}"); // header, frames, then the cause chain
//! # errs::config::set_traceable(false);
//! ```
//!
//! ## Feature Flags
//!
//! | Flag        | Effect |
//! |-------------|--------|
//! | `backtrace` | (default) stack walking via the `backtrace` crate; without it nothing is captured |

mod env;
mod error;
mod extract;
mod kind;
#[macro_use]
mod macros;
mod convert;

pub mod codes;
pub mod config;
pub mod stack;

// ── Public API ────────────────────────────────────────────────────

pub use convert::ResultExt;
pub use error::{BoxError, Error, FRAMEWORK_DESC, SUCCESS};
pub use extract::{code, describe, find, msg, unwrap, AsDynError};
pub use kind::ErrorType;
pub use stack::{Frame, StackTrace};

/// Convenience Result alias.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Create a business error. See [`Error::new`].
#[inline]
pub fn new(code: i32, msg: impl Into<String>) -> Error {
    Error::new(code, msg)
}

/// Create a local framework error. See [`Error::framework`].
#[inline]
pub fn new_frame_error(code: i32, msg: impl Into<String>) -> Error {
    Error::framework(code, msg)
}

/// Create a callee framework error. See [`Error::callee_framework`].
#[inline]
pub fn new_callee_frame_error(code: i32, msg: impl Into<String>) -> Error {
    Error::callee_framework(code, msg)
}

/// Wrap a possibly absent error in a business error; `None` stays `None`.
pub fn wrap<E>(err: Option<E>, code: i32, msg: impl Into<String>) -> Option<Error>
where
    E: Into<BoxError>,
{
    match err {
        Some(cause) => Some(Error::wrap(cause, code, msg)),
        None => None,
    }
}

/// Wrap a possibly absent error in a framework error; `None` stays `None`.
pub fn wrap_frame_error<E>(err: Option<E>, code: i32, msg: impl Into<String>) -> Option<Error>
where
    E: Into<BoxError>,
{
    match err {
        Some(cause) => Some(Error::wrap_framework(cause, code, msg)),
        None => None,
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::{Mutex, MutexGuard};

    static CONFIG_LOCK: Mutex<()> = Mutex::new(());

    /// Serialize tests that touch or depend on the trace configuration.
    pub(crate) fn lock_config() -> MutexGuard<'static, ()> {
        CONFIG_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
