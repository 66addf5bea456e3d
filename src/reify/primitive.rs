//! Scalar destinations.
//!
//! A scalar leaf converts when its kind is convertible to the destination:
//! any numeric leaf to any numeric type, booleans to `bool`, strings to
//! `String` and datetimes to [`Datetime`]. Numeric conversion follows `as`
//! casting, so narrowing truncates or wraps without an error.

use toml::value::Datetime;

use super::{Options, Unpack, UnpackError};
use crate::config::Value;

macro_rules! impl_numeric {
    ($($t:ty),* $(,)?) => {$(
        impl Unpack for $t {
            #[allow(
                clippy::cast_possible_truncation,
                clippy::cast_possible_wrap,
                clippy::cast_precision_loss,
                clippy::cast_sign_loss,
                clippy::cast_lossless,
                clippy::unnecessary_cast
            )]
            fn reify(value: &Value, _opts: &Options) -> Result<Self, UnpackError> {
                match value {
                    Value::Int(i) => Ok(*i as $t),
                    Value::Float(f) => Ok(*f as $t),
                    other => Err(UnpackError::mismatch(stringify!($t), other)),
                }
            }
        }
    )*};
}

impl_numeric!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl Unpack for bool {
    fn reify(value: &Value, _opts: &Options) -> Result<Self, UnpackError> {
        match value {
            Value::Bool(b) => Ok(*b),
            other => Err(UnpackError::mismatch("bool", other)),
        }
    }
}

impl Unpack for String {
    fn reify(value: &Value, _opts: &Options) -> Result<Self, UnpackError> {
        match value {
            Value::String(s) => Ok(s.clone()),
            other => Err(UnpackError::mismatch("string", other)),
        }
    }
}

impl Unpack for Datetime {
    fn reify(value: &Value, _opts: &Options) -> Result<Self, UnpackError> {
        match value {
            Value::Datetime(dt) => Ok(*dt),
            other => Err(UnpackError::mismatch("datetime", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reify<T: Unpack>(value: impl Into<Value>) -> Result<T, UnpackError> {
        T::reify(&value.into(), &Options::default())
    }

    #[test]
    fn test_int_to_float() {
        assert_eq!(reify::<f64>(3).unwrap(), 3.0);
    }

    #[test]
    fn test_float_to_int_truncates() {
        assert_eq!(reify::<i32>(2.9).unwrap(), 2);
    }

    #[test]
    fn test_narrowing_wraps() {
        assert_eq!(reify::<u8>(300).unwrap(), 44);
        assert_eq!(reify::<u32>(-1).unwrap(), u32::MAX);
    }

    #[test]
    fn test_string_not_convertible_to_int() {
        assert_eq!(
            reify::<i64>("hello"),
            Err(UnpackError::TypeMismatch {
                expected: "i64",
                found: "string"
            })
        );
    }

    #[test]
    fn test_bool_only_from_bool() {
        assert!(reify::<bool>(true).unwrap());
        assert!(matches!(
            reify::<bool>(1),
            Err(UnpackError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_int_not_convertible_to_string() {
        assert!(matches!(
            reify::<String>(1),
            Err(UnpackError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_datetime_passthrough() {
        let dt: Datetime = "1979-05-27T07:32:00Z".parse().unwrap();
        assert_eq!(reify::<Datetime>(dt).unwrap(), dt);
    }

    #[test]
    fn test_merge_replaces_scalar() {
        let mut port = 80_u16;
        port.reify_merge(&Value::Int(8080), &Options::default())
            .unwrap();
        assert_eq!(port, 8080);
    }
}
