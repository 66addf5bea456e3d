//! Indirection layers: `Option<T>` and `Box<T>`.
//!
//! Fresh reify builds the base value and wraps it in as many layers as the
//! destination type declares. Merge walks down the existing layers; an empty
//! `Option` on the way degrades to a fresh reify of the remaining type.

use super::{Options, Unpack, UnpackError};
use crate::config::{Config, Value};

impl<T: Unpack> Unpack for Option<T> {
    fn reify(value: &Value, opts: &Options) -> Result<Self, UnpackError> {
        T::reify(value, opts).map(Some)
    }

    fn reify_merge(&mut self, value: &Value, opts: &Options) -> Result<(), UnpackError> {
        match self {
            Some(inner) => inner.reify_merge_indirect(value, opts),
            None => {
                tracing::trace!(
                    destination = std::any::type_name::<T>(),
                    "allocating empty optional"
                );
                *self = Some(T::reify(value, opts)?);
                Ok(())
            }
        }
    }

    fn unpack_root(&mut self, from: &Config, opts: &Options) -> Result<(), UnpackError> {
        match self {
            Some(inner) => inner.unpack_root(from, opts),
            None => Err(UnpackError::NilValue),
        }
    }
}

impl<T: Unpack> Unpack for Box<T> {
    fn reify(value: &Value, opts: &Options) -> Result<Self, UnpackError> {
        T::reify(value, opts).map(Box::new)
    }

    fn reify_merge(&mut self, value: &Value, opts: &Options) -> Result<(), UnpackError> {
        (**self).reify_merge_indirect(value, opts)
    }

    fn unpack_root(&mut self, from: &Config, opts: &Options) -> Result<(), UnpackError> {
        (**self).unpack_root(from, opts)
    }
}
