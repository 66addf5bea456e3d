use std::collections::btree_map;
use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;

use super::{merge_config, ConfigError, Value};

/// Field storage of a sub-config.
pub type Fields = BTreeMap<String, Value>;

/// A configuration tree node: a string-keyed mapping of [`Value`]s.
///
/// `Config` is a cheap handle. Cloning it shares the underlying fields, and
/// two handles sharing fields are the *same* sub-config (see
/// [`ptr_eq`](Self::ptr_eq)). Mutation is copy-on-write: writing through a
/// handle whose fields are shared detaches that handle first, so other
/// holders never observe the change.
///
/// This also holds for [`merge_config`]: merging into a destination whose
/// fields are shared, for instance with the source tree, detaches the
/// destination instead of mutating the shared fields. Sub-configs are not
/// shared-mutable nodes, and a merge is only visible through the handle it
/// was applied to.
///
/// ## Example
///
/// ```
/// use ucfg::{Config, Unpack};
///
/// #[derive(Debug, Default, Unpack)]
/// struct Server {
///     pub host: String,
///     pub port: u16,
/// }
///
/// let config = Config::from_toml_str("host = \"localhost\"\nport = 8080")?;
/// let mut server = Server::default();
/// config.unpack(&mut server)?;
///
/// assert_eq!(server.host, "localhost");
/// assert_eq!(server.port, 8080);
/// # Ok::<(), ucfg::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Config {
    fields: Arc<Fields>,
}

impl Config {
    /// Creates an empty config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a TOML document into a config tree.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let table: toml::Table = toml::from_str(s)?;
        Ok(Self::from(table))
    }

    /// Builds a config tree from any serializable value whose image is a table.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self, ConfigError> {
        match toml::Value::try_from(value)? {
            toml::Value::Table(table) => Ok(Self::from(table)),
            other => Err(ConfigError::NotATable(other.type_str())),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Returns the sub-config stored under `key`, if the value there is one.
    pub fn child(&self, key: &str) -> Option<&Config> {
        self.get(key).and_then(Value::as_sub)
    }

    pub fn has(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Stores `value` under `key`, returning the previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields_mut().insert(key.into(), value.into())
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Deep-merges `other` into this config. See [`merge_config`].
    pub fn merge(&mut self, other: &Config) {
        merge_config(self, other);
    }

    /// Returns `true` if both handles refer to the same sub-config.
    pub fn ptr_eq(&self, other: &Config) -> bool {
        Arc::ptr_eq(&self.fields, &other.fields)
    }

    pub(crate) fn fields_mut(&mut self) -> &mut Fields {
        Arc::make_mut(&mut self.fields)
    }
}

impl PartialEq for Config {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.fields == other.fields
    }
}

impl From<Fields> for Config {
    fn from(fields: Fields) -> Self {
        Self {
            fields: Arc::new(fields),
        }
    }
}

impl From<toml::Table> for Config {
    fn from(table: toml::Table) -> Self {
        table
            .into_iter()
            .map(|(key, value)| (key, Value::from(value)))
            .collect::<Fields>()
            .into()
    }
}

impl<'a> IntoIterator for &'a Config {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
