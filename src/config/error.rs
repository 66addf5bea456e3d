use thiserror::Error;

/// Errors raised while building a [`Config`](super::Config) from external data.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("failed to serialize value into a config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("config root must be a table, found {0}")]
    NotATable(&'static str),
}
