//! Sub-config destinations.
//!
//! A bare `Config` destination can only be built fresh, which shares the
//! source sub-config. Merging needs at least one `Option` or `Box` layer in
//! front of it: the destination then keeps its identity and the source is
//! merged into it, unless both already are the same sub-config.

use super::{as_sub, Options, Unpack, UnpackError};
use crate::config::{merge_config, Config, Value};

impl Unpack for Config {
    fn reify(value: &Value, _opts: &Options) -> Result<Self, UnpackError> {
        as_sub(value, "config").cloned()
    }

    fn reify_merge(&mut self, value: &Value, _opts: &Options) -> Result<(), UnpackError> {
        Err(UnpackError::mismatch("indirect config", value))
    }

    fn reify_merge_indirect(&mut self, value: &Value, _opts: &Options) -> Result<(), UnpackError> {
        let sub = as_sub(value, "config")?;
        if self.ptr_eq(sub) {
            tracing::trace!("destination already holds this sub-config");
            return Ok(());
        }
        merge_config(self, sub);
        Ok(())
    }

    fn unpack_root(&mut self, from: &Config, _opts: &Options) -> Result<(), UnpackError> {
        merge_config(self, from);
        Ok(())
    }
}
