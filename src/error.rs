//! Error types for quicktools.

use std::fmt;

/// Result type alias for quicktools operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for quicktools operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A text range does not fit the buffer it was applied to.
    InvalidRange { start: usize, end: usize, len: usize },
    /// A setting value could not be parsed.
    InvalidSetting { key: String, value: String },
    /// Arithmetic expression failed to parse or evaluate.
    InvalidExpression { position: usize, message: String },
    /// Division or remainder by zero while evaluating an expression.
    DivisionByZero,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRange { start, end, len } => {
                write!(
                    f,
                    "range {start}..{end} out of bounds for text of {len} characters"
                )
            }
            Self::InvalidSetting { key, value } => {
                write!(f, "invalid value {value:?} for setting {key}")
            }
            Self::InvalidExpression { position, message } => {
                write!(f, "invalid expression at {position}: {message}")
            }
            Self::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidRange {
            start: 4,
            end: 9,
            len: 6,
        };
        assert!(err.to_string().contains("4..9"));
        assert!(err.to_string().contains("6 characters"));

        let err = Error::InvalidSetting {
            key: "decimal_points".to_string(),
            value: "many".to_string(),
        };
        assert!(err.to_string().contains("\"many\""));

        let err = Error::InvalidExpression {
            position: 3,
            message: "unexpected ')'".to_string(),
        };
        assert!(err.to_string().contains("at 3"));

        assert_eq!(Error::DivisionByZero.to_string(), "division by zero");
    }

    #[test]
    fn test_error_is_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&Error::DivisionByZero);
    }
}
