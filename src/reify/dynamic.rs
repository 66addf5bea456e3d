//! Dynamic destinations.
//!
//! A fresh `toml::Value` receives the [`Value::reify`] image of any source.
//! Merging keeps the kind of the payload already held: a table merges a
//! sub-config key by key, an array is rebuilt from the source, and a scalar
//! payload converts the source to its own type.

use toml::value::Datetime;

use super::map::reify_map;
use super::{as_array, Options, Unpack, UnpackError};
use crate::config::{Config, Value};

impl Unpack for toml::Value {
    fn reify(value: &Value, _opts: &Options) -> Result<Self, UnpackError> {
        Ok(value.reify())
    }

    fn reify_merge(&mut self, value: &Value, opts: &Options) -> Result<(), UnpackError> {
        match self {
            toml::Value::Table(table) => match value {
                Value::Sub(sub) => reify_map::<toml::Value, _>(table, sub, opts),
                other => Err(UnpackError::mismatch("table", other)),
            },
            toml::Value::Array(arr) => {
                *arr = as_array(value).iter().map(Value::reify).collect();
                Ok(())
            }
            toml::Value::Integer(i) => {
                *i = i64::reify(value, opts)?;
                Ok(())
            }
            toml::Value::Float(f) => {
                *f = f64::reify(value, opts)?;
                Ok(())
            }
            toml::Value::Boolean(b) => {
                *b = bool::reify(value, opts)?;
                Ok(())
            }
            toml::Value::String(s) => {
                *s = String::reify(value, opts)?;
                Ok(())
            }
            toml::Value::Datetime(dt) => {
                *dt = Datetime::reify(value, opts)?;
                Ok(())
            }
        }
    }

    fn unpack_root(&mut self, from: &Config, opts: &Options) -> Result<(), UnpackError> {
        match self {
            toml::Value::Table(table) => reify_map::<toml::Value, _>(table, from, opts),
            _ => Err(UnpackError::root_mismatch()),
        }
    }
}

impl Unpack for toml::Table {
    fn reify(value: &Value, opts: &Options) -> Result<Self, UnpackError> {
        let mut table = Self::new();
        table.reify_merge(value, opts)?;
        Ok(table)
    }

    fn reify_merge(&mut self, value: &Value, opts: &Options) -> Result<(), UnpackError> {
        match value {
            Value::Sub(sub) => reify_map::<toml::Value, _>(self, sub, opts),
            other => Err(UnpackError::mismatch("table", other)),
        }
    }

    fn unpack_root(&mut self, from: &Config, opts: &Options) -> Result<(), UnpackError> {
        reify_map::<toml::Value, _>(self, from, opts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_config(toml_str: &str) -> Config {
        Config::from_toml_str(toml_str).unwrap()
    }

    #[test]
    fn test_reify_structural_image() {
        let config = make_config("xs = [1, \"two\"]\n[inner]\nflag = true");
        let out = toml::Value::reify(&Value::Sub(config), &Options::default()).unwrap();

        assert_eq!(out["inner"]["flag"].as_bool(), Some(true));
        assert_eq!(out["xs"][1].as_str(), Some("two"));
    }

    #[test]
    fn test_merge_table_payload() {
        let mut dst =
            toml::Value::Table(toml::from_str("keep = 1\n[inner]\na = 1").unwrap());

        dst.reify_merge(
            &Value::Sub(make_config("[inner]\nb = 2")),
            &Options::default(),
        )
        .unwrap();

        assert_eq!(dst["keep"].as_integer(), Some(1));
        assert_eq!(dst["inner"]["a"].as_integer(), Some(1));
        assert_eq!(dst["inner"]["b"].as_integer(), Some(2));
    }

    #[test]
    fn test_merge_converts_to_payload_type() {
        let mut dst = toml::Value::Integer(1);
        dst.reify_merge(&Value::Float(2.5), &Options::default())
            .unwrap();
        assert_eq!(dst, toml::Value::Integer(2));

        let mut dst = toml::Value::Float(0.5);
        dst.reify_merge(&Value::Int(3), &Options::default()).unwrap();
        assert_eq!(dst, toml::Value::Float(3.0));
    }

    #[test]
    fn test_merge_inconvertible_into_payload() {
        let mut dst = toml::Value::Integer(1);
        let result = dst.reify_merge(&Value::from("one"), &Options::default());

        assert_eq!(
            result,
            Err(UnpackError::TypeMismatch {
                expected: "i64",
                found: "string"
            })
        );
        assert_eq!(dst, toml::Value::Integer(1));
    }

    #[test]
    fn test_merge_rebuilds_array_payload() {
        let mut dst = toml::Value::Array(vec![toml::Value::Integer(1); 3]);
        dst.reify_merge(&Value::from("solo"), &Options::default())
            .unwrap();
        assert_eq!(
            dst,
            toml::Value::Array(vec![toml::Value::String("solo".into())])
        );
    }

    #[test]
    fn test_merge_scalar_into_table_payload() {
        let mut dst = toml::Value::Table(toml::Table::new());
        let result = dst.reify_merge(&Value::Int(1), &Options::default());
        assert!(matches!(result, Err(UnpackError::TypeMismatch { .. })));
    }

    #[test]
    fn test_scalar_root_rejected() {
        let mut dst = toml::Value::Boolean(false);
        let result = make_config("a = 1").unpack(&mut dst);
        assert_eq!(
            result,
            Err(UnpackError::TypeMismatch {
                expected: "struct, map or config",
                found: "object"
            })
        );
    }

    #[test]
    fn test_table_root() {
        let mut dst = toml::Table::new();
        make_config("a = [1, 2]").unpack(&mut dst).unwrap();
        assert_eq!(dst["a"].as_array().map(Vec::len), Some(2));
    }
}
