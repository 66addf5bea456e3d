//! Sequence destinations: growable `Vec<T>` and fixed-length `[T; N]`.
//!
//! A non-array source is promoted to a one-element array first. Elements are
//! always reified fresh; merging into a `Vec` rebuilds it from the source and
//! merging into an array replaces each slot.

use super::{as_array, Options, Unpack, UnpackError};
use crate::config::Value;

fn reify_element<T: Unpack>(value: &Value, opts: &Options) -> Result<T, UnpackError> {
    T::reify(value, opts).map_err(|err| UnpackError::ConversionFailed(Box::new(err)))
}

fn check_len(expected: usize, arr: &[Value]) -> Result<(), UnpackError> {
    if arr.len() != expected {
        return Err(UnpackError::ArraySizeMismatch {
            expected,
            actual: arr.len(),
        });
    }
    Ok(())
}

/// Builds a fresh sequence with one element per source slot.
pub(crate) fn reify_slice<T: Unpack>(arr: &[Value], opts: &Options) -> Result<Vec<T>, UnpackError> {
    arr.iter().map(|value| reify_element(value, opts)).collect()
}

impl<T: Unpack> Unpack for Vec<T> {
    fn reify(value: &Value, opts: &Options) -> Result<Self, UnpackError> {
        reify_slice(&as_array(value), opts)
    }
}

impl<T: Unpack, const N: usize> Unpack for [T; N] {
    fn reify(value: &Value, opts: &Options) -> Result<Self, UnpackError> {
        let arr = as_array(value);
        check_len(N, &arr)?;
        let elems = reify_slice(&arr, opts)?;
        elems
            .try_into()
            .map_err(|elems: Vec<T>| UnpackError::ArraySizeMismatch {
                expected: N,
                actual: elems.len(),
            })
    }

    fn reify_merge(&mut self, value: &Value, opts: &Options) -> Result<(), UnpackError> {
        let arr = as_array(value);
        check_len(N, &arr)?;
        for (slot, value) in self.iter_mut().zip(arr.iter()) {
            *slot = reify_element(value, opts)?;
        }
        Ok(())
    }
}
