//! Binding config trees into typed destinations.
//!
//! Every destination type implements [`Unpack`], which answers two questions
//! for a source [`Value`]: how to build a fresh destination from it
//! ([`Unpack::reify`]) and how to fold it into a destination that already
//! holds a value ([`Unpack::reify_merge`]).
//!
//! The dispatch on the destination's base kind happens at compile time through
//! these impls:
//!
//! | Base kind        | Destination types                               |
//! |------------------|-------------------------------------------------|
//! | indirection      | `Option<T>`, `Box<T>`                            |
//! | sub-config       | [`Config`]                                       |
//! | struct           | `#[derive(Unpack)]` types ([`UnpackStruct`])     |
//! | mapping          | `HashMap<String, V>`, `BTreeMap<String, V>`      |
//! | fixed array      | `[T; N]`                                         |
//! | growable sequence| `Vec<T>`                                         |
//! | dynamic          | `toml::Value`                                    |
//! | scalar           | `bool`, integers, floats, `String`, `Datetime`  |

mod dynamic;
mod error;
mod field;
mod indirect;
mod map;
mod primitive;
mod sequence;
mod structs;
mod sub;

pub use error::UnpackError;
pub use field::{field_name, parse_tags, FieldSpec};
pub use structs::{reify_struct, reify_struct_fresh, reify_struct_merge, UnpackStruct};

use crate::config::{Config, Value};

/// Destination kinds accepted at the root of an unpack.
pub(crate) const ROOT_KINDS: &str = "struct, map or config";

/// Struct tag key consulted when no other key is configured.
pub const DEFAULT_TAG: &str = "config";

/// Options controlling a single unpack.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct Options {
    tag: String,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the tag key used for per-field name overrides.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            tag: DEFAULT_TAG.to_string(),
        }
    }
}

/// A destination a config value can be written into.
pub trait Unpack: Sized {
    /// Builds a fresh destination value from `value`.
    fn reify(value: &Value, opts: &Options) -> Result<Self, UnpackError>;

    /// Folds `value` into the existing destination.
    ///
    /// The default replaces the destination with a freshly reified value,
    /// which is the behavior of scalars and growable sequences.
    fn reify_merge(&mut self, value: &Value, opts: &Options) -> Result<(), UnpackError> {
        *self = Self::reify(value, opts)?;
        Ok(())
    }

    /// Like [`reify_merge`](Self::reify_merge), for a destination reached
    /// through at least one `Option` or `Box` layer.
    fn reify_merge_indirect(&mut self, value: &Value, opts: &Options) -> Result<(), UnpackError> {
        self.reify_merge(value, opts)
    }

    /// Writes the fields of `from` into this destination when it is the root
    /// of an unpack. Only structs, mappings and sub-configs accept this.
    fn unpack_root(&mut self, _from: &Config, _opts: &Options) -> Result<(), UnpackError> {
        Err(UnpackError::root_mismatch())
    }
}

/// Writes `config` into `to`.
///
/// `config` is `None` for an uninitialized tree, which is rejected with
/// [`UnpackError::NilConfig`]. On error, fields assigned before the failure
/// stay assigned.
pub fn unpack<T: Unpack>(
    config: Option<&Config>,
    to: &mut T,
    opts: &Options,
) -> Result<(), UnpackError> {
    let config = config.ok_or(UnpackError::NilConfig)?;
    tracing::debug!(
        keys = config.len(),
        tag = opts.tag(),
        destination = std::any::type_name::<T>(),
        "unpacking config"
    );
    to.unpack_root(config, opts)
}

impl Config {
    /// Writes this config into `to` using default [`Options`].
    pub fn unpack<T: Unpack>(&self, to: &mut T) -> Result<(), UnpackError> {
        unpack(Some(self), to, &Options::default())
    }

    pub fn unpack_with<T: Unpack>(&self, to: &mut T, opts: &Options) -> Result<(), UnpackError> {
        unpack(Some(self), to, opts)
    }
}

/// Views `value` as an array, promoting a single value to a one-element array.
pub(crate) fn as_array(value: &Value) -> std::borrow::Cow<'_, [Value]> {
    match value {
        Value::Array(arr) => std::borrow::Cow::Borrowed(arr.as_slice()),
        single => {
            tracing::trace!(kind = single.kind(), "promoting single value to array");
            std::borrow::Cow::Owned(vec![single.clone()])
        }
    }
}

/// Requires `value` to be a sub-config.
pub(crate) fn as_sub<'a>(value: &'a Value, expected: &'static str) -> Result<&'a Config, UnpackError> {
    value
        .as_sub()
        .ok_or_else(|| UnpackError::mismatch(expected, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpack_nil_config() {
        let mut dst = std::collections::HashMap::<String, i64>::new();
        let result = unpack(None, &mut dst, &Options::default());
        assert_eq!(result, Err(UnpackError::NilConfig));
    }

    #[test]
    fn test_unpack_scalar_root_rejected() {
        let config = Config::from_toml_str("a = 1").unwrap();
        let mut dst = 0_i64;
        assert_eq!(
            config.unpack(&mut dst),
            Err(UnpackError::TypeMismatch {
                expected: ROOT_KINDS,
                found: "object"
            })
        );
    }

    #[test]
    fn test_unpack_sequence_root_rejected() {
        let config = Config::from_toml_str("a = 1").unwrap();
        let mut dst: Vec<i64> = Vec::new();
        assert!(matches!(
            config.unpack(&mut dst),
            Err(UnpackError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_options_tag() {
        assert_eq!(Options::default().tag(), DEFAULT_TAG);
        assert_eq!(Options::new().with_tag("yaml").tag(), "yaml");
    }

    #[test]
    fn test_as_array_promotes_single() {
        let promoted = as_array(&Value::Int(7));
        assert_eq!(promoted.as_ref(), &[Value::Int(7)]);
    }
}
