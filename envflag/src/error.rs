//! Error types for environment variable flags

use std::num::{ParseFloatError, ParseIntError};

/// Errors that can occur when resolving a flag from the environment.
///
/// This error type covers three failure scenarios:
/// - Missing required environment variables
/// - Values that cannot be parsed into the destination type
/// - Destination types outside the supported scalar set
#[derive(Debug, thiserror::Error)]
pub enum FlagError {
    /// Required environment variable is not set and no default was given.
    ///
    /// Only raised when the variable is absent from the environment. A variable
    /// that is present but blank falls through to the default instead.
    #[error("flag {name} is not defined: the flag is required")]
    FlagRequired {
        /// Name of the missing environment variable
        name: String,
    },

    /// Failed to parse the environment variable value into the destination type.
    #[error("fail to parse flag {name}")]
    ParseFailure {
        /// Name of the environment variable being parsed
        name: String,
        /// Underlying conversion error
        source: ParseError,
    },

    /// The destination type is not one of the supported scalars.
    ///
    /// This is a call-site defect, not a runtime condition.
    #[error("type {type_name} is not supported yet")]
    UnsupportedType {
        /// Fully qualified name of the rejected type
        type_name: String,
    },
}

impl FlagError {
    pub(crate) fn required(name: impl Into<String>) -> Self {
        Self::FlagRequired { name: name.into() }
    }

    pub(crate) fn parse(name: impl Into<String>, source: impl Into<ParseError>) -> Self {
        Self::ParseFailure {
            name: name.into(),
            source: source.into(),
        }
    }

    pub(crate) fn unsupported<T: ?Sized>() -> Self {
        Self::UnsupportedType {
            type_name: std::any::type_name::<T>().to_string(),
        }
    }

    /// Name of the environment variable this error is about, if any.
    pub fn flag_name(&self) -> Option<&str> {
        match self {
            Self::FlagRequired { name } | Self::ParseFailure { name, .. } => Some(name),
            Self::UnsupportedType { .. } => None,
        }
    }
}

/// Conversion error wrapped by [`FlagError::ParseFailure`].
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    Int(#[from] ParseIntError),

    #[error(transparent)]
    Float(#[from] ParseFloatError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_message_names_flag() {
        let err = FlagError::required("HOST");
        assert_eq!(
            err.to_string(),
            "flag HOST is not defined: the flag is required"
        );
        assert_eq!(err.flag_name(), Some("HOST"));
    }

    #[test]
    fn test_parse_failure_keeps_source() {
        let source = "abc".parse::<i32>().unwrap_err();
        let err = FlagError::parse("PORT", source);
        assert_eq!(err.to_string(), "fail to parse flag PORT");
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "invalid digit found in string");
    }

    #[test]
    fn test_unsupported_names_type() {
        let err = FlagError::unsupported::<u8>();
        assert_eq!(err.to_string(), "type u8 is not supported yet");
        assert_eq!(err.flag_name(), None);
    }
}
