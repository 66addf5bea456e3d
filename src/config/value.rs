use toml::value::Datetime;

use super::Config;

/// A node in a configuration tree.
///
/// Leaves are scalars or arrays; interior nodes are sub-configs. A `Value`
/// is the source side of every [`Unpack`](crate::Unpack) operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    /// Opaque primitive carried through unchanged.
    Datetime(Datetime),
    Array(Vec<Value>),
    Sub(Config),
}

impl Value {
    /// Returns a dynamically-typed image of this value and everything below it.
    ///
    /// Sub-configs become tables and arrays become arrays, so the result is a
    /// structurally faithful copy that no longer shares identity with the tree.
    pub fn reify(&self) -> toml::Value {
        match self {
            Value::Bool(b) => toml::Value::Boolean(*b),
            Value::Int(i) => toml::Value::Integer(*i),
            Value::Float(f) => toml::Value::Float(*f),
            Value::String(s) => toml::Value::String(s.clone()),
            Value::Datetime(dt) => toml::Value::Datetime(*dt),
            Value::Array(arr) => toml::Value::Array(arr.iter().map(Value::reify).collect()),
            Value::Sub(sub) => toml::Value::Table(
                sub.iter()
                    .map(|(key, value)| (key.clone(), value.reify()))
                    .collect(),
            ),
        }
    }

    /// Name of the variant, used in mismatch diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Datetime(_) => "datetime",
            Value::Array(_) => "array",
            Value::Sub(_) => "object",
        }
    }

    /// Returns the sub-config if this value is one.
    pub fn as_sub(&self) -> Option<&Config> {
        match self {
            Value::Sub(sub) => Some(sub),
            _ => None,
        }
    }

    /// Returns the elements if this value is an array.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }
}

impl From<toml::Value> for Value {
    fn from(value: toml::Value) -> Self {
        match value {
            toml::Value::Boolean(b) => Value::Bool(b),
            toml::Value::Integer(i) => Value::Int(i),
            toml::Value::Float(f) => Value::Float(f),
            toml::Value::String(s) => Value::String(s),
            toml::Value::Datetime(dt) => Value::Datetime(dt),
            toml::Value::Array(arr) => Value::Array(arr.into_iter().map(Value::from).collect()),
            toml::Value::Table(table) => Value::Sub(Config::from(table)),
        }
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {$(
        impl From<$t> for Value {
            fn from(i: $t) -> Self {
                Value::Int(i64::from(i))
            }
        }
    )*};
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::Float(f64::from(f))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Datetime> for Value {
    fn from(dt: Datetime) -> Self {
        Value::Datetime(dt)
    }
}

impl From<Config> for Value {
    fn from(sub: Config) -> Self {
        Value::Sub(sub)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(arr: Vec<T>) -> Self {
        Value::Array(arr.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reify_nested_tree() {
        let mut inner = Config::new();
        inner.set("x", 1);
        let mut root = Config::new();
        root.set("inner", inner);
        root.set("xs", vec!["a", "b"]);

        let image = Value::Sub(root).reify();

        assert_eq!(image["inner"]["x"].as_integer(), Some(1));
        let xs = image["xs"].as_array().unwrap();
        assert_eq!(xs.len(), 2);
        assert_eq!(xs[1].as_str(), Some("b"));
    }

    #[test]
    fn test_from_toml_table_becomes_sub() {
        let table: toml::Table = toml::from_str("[a]\nb = true").unwrap();
        let value = Value::from(toml::Value::Table(table));

        let sub = value.as_sub().unwrap();
        assert_eq!(sub.child("a").unwrap().get("b"), Some(&Value::Bool(true)));
        assert_eq!(value.kind(), "object");
    }
}
