use core::fmt;

/// Where an error originated.
///
/// The numeric values are shared with other implementations of the
/// protocol and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i32)]
pub enum ErrorType {
    /// Raised by the local request-processing framework.
    Framework = 1,
    /// Raised by application code.
    #[default]
    Business = 2,
    /// Code and message were reported by a downstream framework.
    CalleeFramework = 3,
}

impl ErrorType {
    /// Classification text used in rendered errors.
    #[inline]
    pub const fn desc(self) -> &'static str {
        match self {
            ErrorType::Framework => "framework",
            ErrorType::Business => "business",
            ErrorType::CalleeFramework => "callee framework",
        }
    }

    #[inline]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Decode a wire value. Anything unrecognised is treated as business.
    pub const fn from_i32(value: i32) -> Self {
        match value {
            1 => ErrorType::Framework,
            3 => ErrorType::CalleeFramework,
            _ => ErrorType::Business,
        }
    }

    /// True for both local and callee framework errors.
    #[inline]
    pub const fn is_framework(self) -> bool {
        matches!(self, ErrorType::Framework | ErrorType::CalleeFramework)
    }
}

impl From<i32> for ErrorType {
    fn from(v: i32) -> Self {
        ErrorType::from_i32(v)
    }
}

impl From<ErrorType> for i32 {
    fn from(ty: ErrorType) -> i32 {
        ty as i32
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.desc())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_values() {
        assert_eq!(ErrorType::Framework.as_i32(), 1);
        assert_eq!(ErrorType::Business.as_i32(), 2);
        assert_eq!(ErrorType::CalleeFramework.as_i32(), 3);
    }

    #[test]
    fn from_i32_round_trips_known_values() {
        for ty in [ErrorType::Framework, ErrorType::Business, ErrorType::CalleeFramework] {
            assert_eq!(ErrorType::from_i32(ty.as_i32()), ty);
        }
    }

    #[test]
    fn unknown_value_is_business() {
        assert_eq!(ErrorType::from_i32(0), ErrorType::Business);
        assert_eq!(ErrorType::from_i32(42), ErrorType::Business);
        assert_eq!(ErrorType::from(3), ErrorType::CalleeFramework);
        assert_eq!(i32::from(ErrorType::Framework), 1);
    }

    #[test]
    fn display_text() {
        assert_eq!(ErrorType::Framework.to_string(), "framework");
        assert_eq!(ErrorType::Business.to_string(), "business");
        assert_eq!(ErrorType::CalleeFramework.to_string(), "callee framework");
    }

    #[test]
    fn framework_flag() {
        assert!(ErrorType::Framework.is_framework());
        assert!(ErrorType::CalleeFramework.is_framework());
        assert!(!ErrorType::Business.is_framework());
        assert_eq!(ErrorType::default(), ErrorType::Business);
    }
}
