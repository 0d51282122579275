use std::error::Error as StdError;
use std::fmt;

use crate::codes::TIMEOUT_CODES;
use crate::config;
use crate::extract;
use crate::kind::ErrorType;
use crate::stack::{self, StackTrace};

/// Text reported for the absence of an error.
pub const SUCCESS: &str = "success";

/// Annotation stored in [`Error::desc`] for framework errors.
pub const FRAMEWORK_DESC: &str = "rpc framework";

/// Boxed error accepted as a cause.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Structured RPC error: classification, numeric code, message, and an
/// optional cause and call stack.
///
/// The public fields may be adjusted after construction (tests do this to
/// exercise rendering); the cause and stack are fixed at construction.
///
/// # Rendering
///
/// | Format       | Output |
/// |--------------|--------|
/// | `{}`         | `type:business, code:101, msg:timeout, caused by <cause>` |
/// | `{:#}`       | header, stack frames, then `\nCause by <cause:#>` per link |
///
/// See [`Error::format_spec`] for specifier-driven rendering.
///
/// # Stacks
///
/// When tracing is enabled (see [`crate::config`]) every constructor captures
/// the call stack, except a wrap whose cause chain already holds an
/// `errs::Error`: a chain carries at most one stack.
pub struct Error {
    pub kind: ErrorType,
    pub code: i32,
    pub msg: String,
    pub desc: String,
    cause: Option<BoxError>,
    stack: Option<StackTrace>,
}

// ── Constructors ──────────────────────────────────────────────────

impl Error {
    /// Create a business error.
    ///
    /// ```
    /// let err = errs::Error::new(10000, "test error");
    /// assert_eq!(err.to_string(), "type:business, code:10000, msg:test error");
    /// ```
    pub fn new(code: i32, msg: impl Into<String>) -> Self {
        Self::build(ErrorType::Business, code, msg.into(), String::new(), None)
    }

    /// Create an error raised by the local framework.
    pub fn framework(code: i32, msg: impl Into<String>) -> Self {
        Self::build(ErrorType::Framework, code, msg.into(), FRAMEWORK_DESC.to_owned(), None)
    }

    /// Create a framework error whose code and message came from a
    /// downstream framework.
    pub fn callee_framework(code: i32, msg: impl Into<String>) -> Self {
        Self::build(
            ErrorType::CalleeFramework,
            code,
            msg.into(),
            FRAMEWORK_DESC.to_owned(),
            None,
        )
    }

    /// Wrap `cause` in a business error.
    ///
    /// ```
    /// use std::io;
    ///
    /// let io_err = io::Error::new(io::ErrorKind::TimedOut, "deadline exceeded");
    /// let err = errs::Error::wrap(io_err, errs::codes::RET_CLIENT_TIMEOUT, "just wrap");
    /// assert_eq!(
    ///     err.to_string(),
    ///     "type:business, code:101, msg:just wrap, caused by deadline exceeded"
    /// );
    /// ```
    pub fn wrap<E>(cause: E, code: i32, msg: impl Into<String>) -> Self
    where
        E: Into<BoxError>,
    {
        Self::build(ErrorType::Business, code, msg.into(), String::new(), Some(cause.into()))
    }

    /// Wrap `cause` in a framework error.
    pub fn wrap_framework<E>(cause: E, code: i32, msg: impl Into<String>) -> Self
    where
        E: Into<BoxError>,
    {
        Self::build(
            ErrorType::Framework,
            code,
            msg.into(),
            FRAMEWORK_DESC.to_owned(),
            Some(cause.into()),
        )
    }

    fn build(
        kind: ErrorType,
        code: i32,
        msg: String,
        desc: String,
        cause: Option<BoxError>,
    ) -> Self {
        let stack = match &cause {
            _ if !config::traceable() => None,
            Some(cause) if extract::find(Some(&**cause)).is_some() => None,
            _ => stack::capture(),
        };
        Self {
            kind,
            code,
            msg,
            desc,
            cause,
            stack,
        }
    }
}

// ── Accessors ─────────────────────────────────────────────────────

impl Error {
    /// The wrapped error, if any.
    #[inline]
    pub fn unwrap_cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    #[deprecated(note = "use `unwrap_cause` or `std::error::Error::source`")]
    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.unwrap_cause()
    }

    #[inline]
    pub fn has_cause(&self) -> bool {
        self.cause.is_some()
    }

    /// Stack captured at construction, if tracing was enabled.
    #[inline]
    pub fn stack(&self) -> Option<&StackTrace> {
        self.stack.as_ref()
    }

    /// True if this error is of type `ty` and carries one of the client or
    /// server timeout codes.
    pub fn is_timeout(&self, ty: ErrorType) -> bool {
        self.kind == ty && TIMEOUT_CODES.contains(&self.code)
    }

    /// Render with a single-character specifier.
    ///
    /// | Spec        | Output |
    /// |-------------|--------|
    /// | `s`, `v`    | compact, same as `{}` |
    /// | `+`         | verbose, same as `{:#}` |
    /// | `q`         | compact, quoted and escaped |
    /// | other       | `%!<spec>(errs.Error=<compact>)` |
    ///
    /// ```
    /// let err = errs::Error::new(10000, "test error");
    /// assert_eq!(err.format_spec('q'), r#""type:business, code:10000, msg:test error""#);
    /// assert_eq!(
    ///     err.format_spec('d'),
    ///     "%!d(errs.Error=type:business, code:10000, msg:test error)"
    /// );
    /// ```
    pub fn format_spec(&self, spec: char) -> String {
        match spec {
            's' | 'v' => self.to_string(),
            '+' => format!("{self:#}"),
            'q' => format!("{:?}", self.to_string()),
            other => format!("%!{other}(errs.Error={self})"),
        }
    }

    fn fmt_header(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "type:{}, code:{}, msg:{}", self.kind.desc(), self.code, self.msg)
    }
}

// ── std::error::Error ─────────────────────────────────────────────

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause.as_deref().map(|e| e as &(dyn StdError + 'static))
    }
}

// ── Display ───────────────────────────────────────────────────────

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_header(f)?;

        if f.alternate() {
            if let Some(stack) = &self.stack {
                write!(f, "{stack}")?;
            }
            if let Some(cause) = &self.cause {
                write!(f, "\nCause by {cause:#}")?;
            }
        } else if let Some(cause) = &self.cause {
            write!(f, ", caused by {cause}")?;
        }

        Ok(())
    }
}

// ── Debug ─────────────────────────────────────────────────────────

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = f.debug_struct("Error");
        d.field("kind", &self.kind);
        d.field("code", &self.code);
        d.field("msg", &self.msg);

        if !self.desc.is_empty() {
            d.field("desc", &self.desc);
        }
        if let Some(cause) = &self.cause {
            d.field("cause", cause);
        }
        if let Some(stack) = &self.stack {
            d.field("stack", stack);
        }

        d.finish()
    }
}
