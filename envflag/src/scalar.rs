//! Scalar destination types and their parsers
//!
//! The set of destination types is closed: [`Scalar`] is sealed and implemented
//! for `isize`, `i32`, `i64`, `f32`, `f64` and `String` only. Each implementation
//! carries its own parser and its own emptiness predicate.

use std::any::TypeId;
use std::fmt;

use crate::error::{FlagError, ParseError};

mod sealed {
    pub trait Sealed {}

    impl Sealed for isize {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
    impl Sealed for String {}
}

/// The kind of scalar a flag is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Int,
    Int32,
    Int64,
    Float32,
    Float64,
    Str,
}

impl ScalarKind {
    /// Resolve the parser kind for a destination type.
    ///
    /// Code that picks destination types dynamically (by `TypeId`) uses this to
    /// reject unsupported types before a flag is built.
    ///
    /// # Errors
    ///
    /// Returns [`FlagError::UnsupportedType`] for anything outside the scalar set.
    pub fn of<T: ?Sized + 'static>() -> Result<Self, FlagError> {
        let id = TypeId::of::<T>();
        let kind = if id == TypeId::of::<isize>() {
            Self::Int
        } else if id == TypeId::of::<i32>() {
            Self::Int32
        } else if id == TypeId::of::<i64>() {
            Self::Int64
        } else if id == TypeId::of::<f32>() {
            Self::Float32
        } else if id == TypeId::of::<f64>() {
            Self::Float64
        } else if id == TypeId::of::<String>() {
            Self::Str
        } else {
            return Err(FlagError::unsupported::<T>());
        };
        Ok(kind)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Int => "isize",
            Self::Int32 => "i32",
            Self::Int64 => "i64",
            Self::Float32 => "f32",
            Self::Float64 => "f64",
            Self::Str => "String",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A snapshot of a flag value, used for introspection and rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(isize),
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    Str(String),
}

impl Value {
    pub fn kind(&self) -> ScalarKind {
        match self {
            Self::Int(_) => ScalarKind::Int,
            Self::Int32(_) => ScalarKind::Int32,
            Self::Int64(_) => ScalarKind::Int64,
            Self::Float32(_) => ScalarKind::Float32,
            Self::Float64(_) => ScalarKind::Float64,
            Self::Str(_) => ScalarKind::Str,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Int32(v) => write!(f, "{v}"),
            Self::Int64(v) => write!(f, "{v}"),
            Self::Float32(v) => write!(f, "{v}"),
            Self::Float64(v) => write!(f, "{v}"),
            Self::Str(v) => f.write_str(v),
        }
    }
}

/// A type a flag can be resolved into.
///
/// This trait is sealed; the supported set is fixed.
pub trait Scalar: sealed::Sealed + Clone + Default + fmt::Debug + 'static {
    /// Parser selected for this type.
    const KIND: ScalarKind;

    /// Parse a raw environment value.
    ///
    /// An empty string parses to the zero value, so that a blank variable is
    /// treated the same as an absent one.
    fn parse(raw: &str) -> Result<Self, ParseError>;

    /// Whether this value counts as "not set".
    fn is_empty(&self) -> bool;

    fn to_value(&self) -> Value;
}

macro_rules! impl_int_scalar {
    ($ty:ty, $kind:ident) => {
        impl Scalar for $ty {
            const KIND: ScalarKind = ScalarKind::$kind;

            fn parse(raw: &str) -> Result<Self, ParseError> {
                if raw.is_empty() {
                    return Ok(0);
                }
                Ok(raw.parse::<$ty>()?)
            }

            fn is_empty(&self) -> bool {
                *self == 0
            }

            fn to_value(&self) -> Value {
                Value::$kind(*self)
            }
        }
    };
}

// -0.0 compares equal to 0.0 and counts as empty; NaN is never empty.
macro_rules! impl_float_scalar {
    ($ty:ty, $kind:ident) => {
        impl Scalar for $ty {
            const KIND: ScalarKind = ScalarKind::$kind;

            fn parse(raw: &str) -> Result<Self, ParseError> {
                if raw.is_empty() {
                    return Ok(0.0);
                }
                Ok(raw.parse::<$ty>()?)
            }

            fn is_empty(&self) -> bool {
                *self == 0.0
            }

            fn to_value(&self) -> Value {
                Value::$kind(*self)
            }
        }
    };
}

impl_int_scalar!(isize, Int);
impl_int_scalar!(i32, Int32);
impl_int_scalar!(i64, Int64);
impl_float_scalar!(f32, Float32);
impl_float_scalar!(f64, Float64);

impl Scalar for String {
    const KIND: ScalarKind = ScalarKind::Str;

    fn parse(raw: &str) -> Result<Self, ParseError> {
        Ok(raw.to_string())
    }

    fn is_empty(&self) -> bool {
        str::is_empty(self)
    }

    fn to_value(&self) -> Value {
        Value::Str(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_of_supported_types() {
        assert_eq!(ScalarKind::of::<isize>().unwrap(), ScalarKind::Int);
        assert_eq!(ScalarKind::of::<i32>().unwrap(), ScalarKind::Int32);
        assert_eq!(ScalarKind::of::<i64>().unwrap(), ScalarKind::Int64);
        assert_eq!(ScalarKind::of::<f32>().unwrap(), ScalarKind::Float32);
        assert_eq!(ScalarKind::of::<f64>().unwrap(), ScalarKind::Float64);
        assert_eq!(ScalarKind::of::<String>().unwrap(), ScalarKind::Str);
    }

    #[test]
    fn test_kind_matches_trait_constant() {
        assert_eq!(ScalarKind::of::<i64>().unwrap(), <i64 as Scalar>::KIND);
        assert_eq!(ScalarKind::of::<String>().unwrap(), <String as Scalar>::KIND);
    }

    #[test]
    fn test_kind_of_unsupported_type() {
        for result in [
            ScalarKind::of::<u8>(),
            ScalarKind::of::<bool>(),
            ScalarKind::of::<str>(),
        ] {
            assert!(matches!(result, Err(FlagError::UnsupportedType { .. })));
        }

        match ScalarKind::of::<u16>() {
            Err(FlagError::UnsupportedType { type_name }) => assert_eq!(type_name, "u16"),
            other => panic!("Expected UnsupportedType, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_integers_by_width() {
        assert_eq!(<i32 as Scalar>::parse("2147483647").unwrap(), i32::MAX);
        assert!(<i32 as Scalar>::parse("2147483648").is_err());
        assert_eq!(
            <i64 as Scalar>::parse("2147483648").unwrap(),
            2_147_483_648_i64
        );
        assert_eq!(<isize as Scalar>::parse("-42").unwrap(), -42);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(<i32 as Scalar>::parse("abc"), Err(ParseError::Int(_))));
        assert!(matches!(<f64 as Scalar>::parse("1.2.3"), Err(ParseError::Float(_))));
        assert!(<i64 as Scalar>::parse("1.5").is_err());
        assert!(<i32 as Scalar>::parse(" 1").is_err());
    }

    #[test]
    fn test_parse_blank_is_zero() {
        assert_eq!(<i32 as Scalar>::parse("").unwrap(), 0);
        assert_eq!(<f32 as Scalar>::parse("").unwrap(), 0.0);
        assert_eq!(<String as Scalar>::parse("").unwrap(), "");
    }

    #[test]
    fn test_string_is_verbatim() {
        assert_eq!(
            <String as Scalar>::parse("  spaced value ").unwrap(),
            "  spaced value "
        );
    }

    #[test]
    fn test_emptiness_per_type() {
        assert!(0_isize.is_empty());
        assert!(!1_i32.is_empty());
        assert!(0.0_f64.is_empty());
        assert!((-0.0_f32).is_empty());
        assert!(!f64::NAN.is_empty());
        assert!(String::new().is_empty());
        assert!(!Scalar::is_empty(&" ".to_string()));
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Int32(8080).to_string(), "8080");
        assert_eq!(Value::Float64(1.5).to_string(), "1.5");
        assert_eq!(Value::Str("localhost".into()).to_string(), "localhost");
        assert_eq!(Value::Int64(7).kind(), ScalarKind::Int64);
    }
}
