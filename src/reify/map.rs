//! String-keyed mapping destinations.
//!
//! Only `String` keys are accepted, so a non-string-keyed mapping is rejected
//! at compile time rather than during an unpack.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use super::{as_sub, Options, Unpack, UnpackError};
use crate::config::{Config, Value};

/// A mutable mapping from config keys to destination values.
pub(crate) trait StringMap<V> {
    fn entry_mut(&mut self, key: &str) -> Option<&mut V>;
    fn put(&mut self, key: String, value: V);
}

impl<V, S: BuildHasher> StringMap<V> for HashMap<String, V, S> {
    fn entry_mut(&mut self, key: &str) -> Option<&mut V> {
        self.get_mut(key)
    }

    fn put(&mut self, key: String, value: V) {
        self.insert(key, value);
    }
}

impl<V> StringMap<V> for BTreeMap<String, V> {
    fn entry_mut(&mut self, key: &str) -> Option<&mut V> {
        self.get_mut(key)
    }

    fn put(&mut self, key: String, value: V) {
        self.insert(key, value);
    }
}

impl StringMap<toml::Value> for toml::Table {
    fn entry_mut(&mut self, key: &str) -> Option<&mut toml::Value> {
        self.get_mut(key)
    }

    fn put(&mut self, key: String, value: toml::Value) {
        self.insert(key, value);
    }
}

/// Writes every key of `from` into `to`.
///
/// Keys without an entry are reified fresh into the value type; existing
/// entries are merged in place.
pub(crate) fn reify_map<V: Unpack, M: StringMap<V>>(
    to: &mut M,
    from: &Config,
    opts: &Options,
) -> Result<(), UnpackError> {
    for (key, value) in from {
        match to.entry_mut(key) {
            Some(old) => old.reify_merge(value, opts)?,
            None => to.put(key.clone(), V::reify(value, opts)?),
        }
    }
    Ok(())
}

impl<V: Unpack, S: BuildHasher + Default> Unpack for HashMap<String, V, S> {
    fn reify(value: &Value, opts: &Options) -> Result<Self, UnpackError> {
        let mut map = Self::default();
        reify_map::<V, _>(&mut map, as_sub(value, "map")?, opts)?;
        Ok(map)
    }

    fn reify_merge(&mut self, value: &Value, opts: &Options) -> Result<(), UnpackError> {
        reify_map::<V, _>(self, as_sub(value, "map")?, opts)
    }

    fn unpack_root(&mut self, from: &Config, opts: &Options) -> Result<(), UnpackError> {
        reify_map::<V, _>(self, from, opts)
    }
}

impl<V: Unpack> Unpack for BTreeMap<String, V> {
    fn reify(value: &Value, opts: &Options) -> Result<Self, UnpackError> {
        let mut map = Self::new();
        reify_map::<V, _>(&mut map, as_sub(value, "map")?, opts)?;
        Ok(map)
    }

    fn reify_merge(&mut self, value: &Value, opts: &Options) -> Result<(), UnpackError> {
        reify_map::<V, _>(self, as_sub(value, "map")?, opts)
    }

    fn unpack_root(&mut self, from: &Config, opts: &Options) -> Result<(), UnpackError> {
        reify_map::<V, _>(self, from, opts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_config(toml_str: &str) -> Config {
        Config::from_toml_str(toml_str).unwrap()
    }

    #[test]
    fn test_unpack_into_map() {
        let config = make_config("a = 1\nb = 2");
        let mut dst: HashMap<String, i64> = HashMap::new();

        config.unpack(&mut dst).unwrap();

        assert_eq!(dst.len(), 2);
        assert_eq!(dst["a"], 1);
        assert_eq!(dst["b"], 2);
    }

    #[test]
    fn test_merge_keeps_unrelated_entries() {
        let config = make_config("a = 10");
        let mut dst = BTreeMap::from([("a".to_string(), 1_i64), ("z".to_string(), 26)]);

        config.unpack(&mut dst).unwrap();

        assert_eq!(dst, BTreeMap::from([("a".to_string(), 10), ("z".to_string(), 26)]));
    }

    #[test]
    fn test_merge_existing_nested_map_entry() {
        let config = make_config("[outer]\nb = 2");
        let mut dst: BTreeMap<String, BTreeMap<String, i64>> = BTreeMap::new();
        dst.insert("outer".into(), BTreeMap::from([("a".to_string(), 1)]));

        config.unpack(&mut dst).unwrap();

        assert_eq!(dst["outer"], BTreeMap::from([("a".to_string(), 1), ("b".to_string(), 2)]));
    }

    #[test]
    fn test_map_requires_sub_config() {
        let result = BTreeMap::<String, i64>::reify(&Value::Int(1), &Options::default());
        assert_eq!(
            result,
            Err(UnpackError::TypeMismatch {
                expected: "map",
                found: "int"
            })
        );
    }
}
