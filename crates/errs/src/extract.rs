//! Code and message extraction for arbitrary errors.
//!
//! Errors regularly cross library boundaries before they reach code that
//! wants a status code: an `errs::Error` may sit several links deep inside
//! foreign wrappers, or not be present at all. These helpers search the
//! `source()` chain and degrade to fixed fallbacks instead of failing.
//!
//! | Input                          | [`code`]          | [`msg`]                        |
//! |--------------------------------|-------------------|--------------------------------|
//! | `None`                         | `RET_OK`          | `"success"`                    |
//! | chain without `errs::Error`    | `RET_UNKNOWN`     | the input's own `Display`      |
//! | first `errs::Error` has cause  | its `code`        | its full chained `Display`     |
//! | first `errs::Error`, no cause  | its `code`        | its bare `msg`                 |

use std::error::Error as StdError;
use std::io;

use crate::codes::{RET_OK, RET_UNKNOWN};
use crate::error::{Error, SUCCESS};

/// Borrow as a `'static` error trait object.
///
/// Implemented for every sized error type and for the common `dyn Error`
/// trait objects, so the helpers accept `Option<&io::Error>`,
/// `Option<&errs::Error>` and `Option<&(dyn Error + Send + Sync)>` alike.
pub trait AsDynError {
    fn as_dyn_error(&self) -> &(dyn StdError + 'static);
}

impl<E: StdError + 'static> AsDynError for E {
    #[inline]
    fn as_dyn_error(&self) -> &(dyn StdError + 'static) {
        self
    }
}

impl AsDynError for dyn StdError + 'static {
    #[inline]
    fn as_dyn_error(&self) -> &(dyn StdError + 'static) {
        self
    }
}

impl AsDynError for dyn StdError + Send + 'static {
    #[inline]
    fn as_dyn_error(&self) -> &(dyn StdError + 'static) {
        self
    }
}

impl AsDynError for dyn StdError + Send + Sync + 'static {
    #[inline]
    fn as_dyn_error(&self) -> &(dyn StdError + 'static) {
        self
    }
}

/// First `errs::Error` in the chain starting at `err`, the input included.
///
/// A custom `io::Error` is entered through `get_ref`: its `source()` skips
/// the wrapped error itself.
pub fn find<E>(err: Option<&E>) -> Option<&Error>
where
    E: AsDynError + ?Sized,
{
    let mut next = Some(err?.as_dyn_error());
    while let Some(e) = next {
        if let Some(found) = e.downcast_ref::<Error>() {
            return Some(found);
        }
        next = match e.downcast_ref::<io::Error>().and_then(io::Error::get_ref) {
            Some(inner) => Some(inner as &(dyn StdError + 'static)),
            None => e.source(),
        };
    }
    None
}

/// Status code carried by `err`.
///
/// ```
/// use std::io;
///
/// assert_eq!(errs::code(None::<&errs::Error>), errs::codes::RET_OK);
///
/// let foreign = io::Error::new(io::ErrorKind::Other, "unknown error");
/// assert_eq!(errs::code(Some(&foreign)), errs::codes::RET_UNKNOWN);
///
/// let err = errs::Error::new(111, "inner fail");
/// assert_eq!(errs::code(Some(&err)), 111);
/// ```
pub fn code<E>(err: Option<&E>) -> i32
where
    E: AsDynError + ?Sized,
{
    let Some(err) = err else {
        return RET_OK;
    };
    find(Some(err)).map_or(RET_UNKNOWN, |e| e.code)
}

/// Human-readable message for `err`.
pub fn msg<E>(err: Option<&E>) -> String
where
    E: AsDynError + ?Sized,
{
    let Some(err) = err else {
        return SUCCESS.to_owned();
    };
    match find(Some(err)) {
        None => err.as_dyn_error().to_string(),
        Some(found) if found.has_cause() => found.to_string(),
        Some(found) => found.msg.clone(),
    }
}

/// Compact rendering of a possibly absent error; `None` is `"success"`.
pub fn describe(err: Option<&Error>) -> String {
    err.map_or_else(|| SUCCESS.to_owned(), ToString::to_string)
}

/// Cause of a possibly absent error.
pub fn unwrap(err: Option<&Error>) -> Option<&(dyn StdError + Send + Sync + 'static)> {
    err?.unwrap_cause()
}

#[cfg(test)]
mod tests {
    use std::fmt;
    use std::io;

    use super::*;
    use crate::codes::RET_CLIENT_TIMEOUT;

    /// Foreign wrapper that forwards display and exposes its inner error.
    #[derive(Debug)]
    struct Wrapper(Box<dyn StdError + Send + Sync>);

    impl fmt::Display for Wrapper {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            fmt::Display::fmt(&self.0, f)
        }
    }

    impl StdError for Wrapper {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            Some(&*self.0)
        }
    }

    #[test]
    fn absent_is_success() {
        assert_eq!(code(None::<&dyn StdError>), RET_OK);
        assert_eq!(msg(None::<&dyn StdError>), SUCCESS);

        let unset: Option<&Error> = None;
        assert_eq!(code(unset), 0);
        assert_eq!(msg(unset), "success");
        assert_eq!(describe(unset), "success");
        assert!(unwrap(unset).is_none());
    }

    #[test]
    fn plain_error() {
        let err = Error::new(111, "inner fail");
        assert_eq!(code(Some(&err)), 111);
        assert_eq!(msg(Some(&err)), "inner fail");

        let err = Error::framework(111, "inner fail");
        assert_eq!(code(Some(&err)), 111);
        assert_eq!(msg(Some(&err)), "inner fail");
        assert!(describe(Some(&err)).contains("framework"));
    }

    #[test]
    fn foreign_error() {
        let err = io::Error::new(io::ErrorKind::Other, "unknown error");
        assert_eq!(code(Some(&err)), RET_UNKNOWN);
        assert_eq!(msg(Some(&err)), "unknown error");
    }

    #[test]
    fn nested_in_foreign_wrapper() {
        let wrapped = Wrapper(Box::new(Error::new(101, "test error")));
        assert_eq!(code(Some(&wrapped)), 101);
        assert_eq!(msg(Some(&wrapped)), "test error");
        assert_eq!(find(Some(&wrapped)).map(|e| e.code), Some(101));
    }

    #[test]
    fn chained_message_covers_every_link() {
        let io_err = io::Error::new(io::ErrorKind::TimedOut, "deadline exceeded");
        let err = Error::wrap(io_err, RET_CLIENT_TIMEOUT, "just wrap");
        assert!(msg(Some(&err)).contains("deadline exceeded"));
        assert!(msg(Some(&err)).contains("just wrap"));
        assert_eq!(msg(Some(&err)), err.to_string());

        let outer = Wrapper(Box::new(err));
        assert_eq!(code(Some(&outer)), RET_CLIENT_TIMEOUT);
        assert!(outer.to_string().contains("deadline exceeded"));

        let io_source = find(Some(&outer))
            .and_then(|e| e.source())
            .and_then(|s| s.downcast_ref::<io::Error>())
            .expect("io error at the bottom of the chain");
        assert_eq!(io_source.kind(), io::ErrorKind::TimedOut);
    }

    #[test]
    fn trait_object_inputs() {
        let boxed: Box<dyn StdError + Send + Sync> = Box::new(Error::new(404, "missing"));
        assert_eq!(code(Some(&*boxed)), 404);
        assert_eq!(msg(Some(&*boxed)), "missing");

        let plain: &(dyn StdError + 'static) = &*boxed;
        assert_eq!(code(Some(plain)), 404);
    }

    #[test]
    fn unwrap_present_cause() {
        let err = Error::wrap("boom", 1, "outer");
        assert_eq!(unwrap(Some(&err)).map(|c| c.to_string()).as_deref(), Some("boom"));
        assert!(unwrap(Some(&Error::new(1, "leaf"))).is_none());
    }
}
