/// Create a business [`Error`](crate::Error) with a formatted message.
///
/// ```
/// let err = errs::newf!(111, "{} fail", "inner");
/// assert_eq!(err.msg, "inner fail");
/// ```
#[macro_export]
macro_rules! newf {
    ($code:expr, $($arg:tt)+) => {
        $crate::Error::new($code, ::std::format!($($arg)+))
    };
}

/// Wrap an `Option` of an error with a formatted message.
///
/// `None` stays `None` and the message is never formatted.
///
/// ```
/// let cause = Some(std::io::Error::new(std::io::ErrorKind::Other, "disk"));
/// let err = errs::wrapf!(cause, 222, "wrap {}", "err").unwrap();
/// assert_eq!(err.msg, "wrap err");
///
/// let none: Option<std::io::Error> = None;
/// assert!(errs::wrapf!(none, 222, "wrap {}", "err").is_none());
/// ```
#[macro_export]
macro_rules! wrapf {
    ($err:expr, $code:expr, $($arg:tt)+) => {
        match $err {
            ::core::option::Option::Some(cause) => ::core::option::Option::Some(
                $crate::Error::wrap(cause, $code, ::std::format!($($arg)+)),
            ),
            ::core::option::Option::None => ::core::option::Option::None,
        }
    };
}

/// Early-return with a business error if a condition is false.
///
/// The error is converted with `Into`, so the enclosing function may return
/// `Result<_, errs::Error>` or any error type `errs::Error` converts into.
///
/// ```
/// use errs::codes::RET_INVALID_ARGUMENT;
///
/// fn check(id: i64) -> Result<(), errs::Error> {
///     errs::ensure!(id > 0, RET_INVALID_ARGUMENT, "bad id {}", id);
///     Ok(())
/// }
/// assert!(check(5).is_ok());
/// assert_eq!(check(-1).unwrap_err().msg, "bad id -1");
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $code:expr, $($arg:tt)+) => {
        if !$cond {
            return ::core::result::Result::Err($crate::newf!($code, $($arg)+).into());
        }
    };
}
