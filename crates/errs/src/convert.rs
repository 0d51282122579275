use std::io;

use crate::error::{BoxError, Error};

// ── Into<io::Error> ───────────────────────────────────────────────

impl From<Error> for io::Error {
    /// Wraps the error as a custom `io::Error` of kind `Other`. The original
    /// is reachable through `io::Error::get_ref` and `source()`.
    fn from(err: Error) -> Self {
        io::Error::new(io::ErrorKind::Other, err)
    }
}

// ── ResultExt ─────────────────────────────────────────────────────

/// Extension trait for wrapping the error of any `Result` into an
/// [`Error`] with a status code.
///
/// `Ok` values pass through untouched, so wrapping is safe to apply
/// unconditionally.
///
/// ```
/// use errs::ResultExt;
/// use errs::codes::RET_CLIENT_CONNECT_FAIL;
///
/// fn dial() -> Result<(), std::io::Error> {
///     Err(std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused"))
/// }
///
/// let err = dial().wrap_frame_err(RET_CLIENT_CONNECT_FAIL, "dial backend").unwrap_err();
/// assert_eq!(errs::code(Some(&err)), RET_CLIENT_CONNECT_FAIL);
/// assert!(errs::msg(Some(&err)).contains("refused"));
/// ```
pub trait ResultExt<T> {
    /// Wrap the error in a business error.
    fn wrap_err<M>(self, code: i32, msg: M) -> Result<T, Error>
    where
        M: Into<String>;

    /// Like [`wrap_err`](ResultExt::wrap_err), building the message only on error.
    fn wrap_err_with<M, F>(self, code: i32, msg: F) -> Result<T, Error>
    where
        M: Into<String>,
        F: FnOnce() -> M;

    /// Wrap the error in a framework error.
    fn wrap_frame_err<M>(self, code: i32, msg: M) -> Result<T, Error>
    where
        M: Into<String>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<BoxError>,
{
    fn wrap_err<M>(self, code: i32, msg: M) -> Result<T, Error>
    where
        M: Into<String>,
    {
        match self {
            Ok(value) => Ok(value),
            Err(e) => Err(Error::wrap(e, code, msg)),
        }
    }

    fn wrap_err_with<M, F>(self, code: i32, msg: F) -> Result<T, Error>
    where
        M: Into<String>,
        F: FnOnce() -> M,
    {
        match self {
            Ok(value) => Ok(value),
            Err(e) => Err(Error::wrap(e, code, msg())),
        }
    }

    fn wrap_frame_err<M>(self, code: i32, msg: M) -> Result<T, Error>
    where
        M: Into<String>,
    {
        match self {
            Ok(value) => Ok(value),
            Err(e) => Err(Error::wrap_framework(e, code, msg)),
        }
    }
}
