use thiserror::Error;

/// Errors raised while writing a config tree into a destination.
///
/// The first failure aborts the whole unpack. Fields assigned before the
/// failure keep their new values, so a destination should be discarded when
/// an error is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum UnpackError {
    #[error("cannot unpack an uninitialized config")]
    NilConfig,

    #[error("destination is empty")]
    NilValue,

    /// Not produced through `&mut T` destinations, which are always
    /// addressable.
    #[error("destination must be an addressable reference or a mapping")]
    PointerRequired,

    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("array size mismatch: expected {expected} elements, found {actual}")]
    ArraySizeMismatch { expected: usize, actual: usize },

    #[error("failed to convert value: {0}")]
    ConversionFailed(Box<UnpackError>),
}

impl UnpackError {
    /// The config root is always an object; this rejects the destination kind.
    pub(crate) fn root_mismatch() -> Self {
        Self::TypeMismatch {
            expected: super::ROOT_KINDS,
            found: "object",
        }
    }

    pub(crate) fn mismatch(expected: &'static str, found: &crate::Value) -> Self {
        Self::TypeMismatch {
            expected,
            found: found.kind(),
        }
    }
}
