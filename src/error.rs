use crate::config::ConfigError;
use crate::reify::UnpackError;
use thiserror::Error;

/// Top-level error type for the ucfg library.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("unpack error: {0}")]
    Unpack(#[from] UnpackError),
}
