//! Struct destinations.
//!
//! Structs describe their fields through [`UnpackStruct`], normally generated
//! by `#[derive(Unpack)]`:
//!
//! ```
//! use ucfg::{Config, Unpack};
//!
//! #[derive(Debug, Default, Unpack)]
//! struct Account {
//!     #[tag(config = "login")]
//!     pub name: String,
//!     pub retries: Option<u8>,
//! }
//!
//! let config = Config::from_toml_str("login = \"ada\"\nretries = 3")?;
//! let mut account = Account::default();
//! config.unpack(&mut account)?;
//! assert_eq!(account.name, "ada");
//! assert_eq!(account.retries, Some(3));
//! # Ok::<(), ucfg::Error>(())
//! ```

use super::{as_sub, FieldSpec, Options, UnpackError};
use crate::config::{Config, Value};

/// Field-level access to a struct destination.
///
/// A struct reified fresh, for example as a new map entry or behind an empty
/// `Option`, starts from [`Default::default`]. Fields missing from the config
/// keep those values. Nothing else is synthesized: a zeroed `Default` yields
/// zeroed fields, and a hand-written one supplies its own values.
pub trait UnpackStruct: Default {
    /// Fields in declaration order.
    const FIELDS: &'static [FieldSpec];

    /// Merges `value` into the field at `index` of [`FIELDS`](Self::FIELDS).
    fn unpack_field(&mut self, index: usize, value: &Value, opts: &Options)
        -> Result<(), UnpackError>;
}

/// Writes the fields of `from` into the struct `to`.
///
/// Fields are visited in declaration order. A field whose key is absent from
/// `from` is left untouched, and hidden fields are skipped.
pub fn reify_struct<S: UnpackStruct>(
    to: &mut S,
    from: &Config,
    opts: &Options,
) -> Result<(), UnpackError> {
    for (index, field) in S::FIELDS.iter().enumerate() {
        if !field.exported {
            continue;
        }
        let key = field.key(opts.tag());
        let Some(value) = from.get(&key) else {
            continue;
        };
        to.unpack_field(index, value, opts)?;
    }
    Ok(())
}

/// Builds a struct from its default value and the sub-config `value`.
pub fn reify_struct_fresh<S: UnpackStruct>(value: &Value, opts: &Options) -> Result<S, UnpackError> {
    let mut st = S::default();
    reify_struct(&mut st, as_sub(value, "struct")?, opts)?;
    Ok(st)
}

/// Merges the sub-config `value` into an existing struct.
pub fn reify_struct_merge<S: UnpackStruct>(
    to: &mut S,
    value: &Value,
    opts: &Options,
) -> Result<(), UnpackError> {
    reify_struct(to, as_sub(value, "struct")?, opts)
}
