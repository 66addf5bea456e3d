//! Configuration trees: values, sub-configs and the config merge primitive.

mod error;
mod merge;
mod tree;
mod value;

pub use error::ConfigError;
pub use merge::merge_config;
pub use tree::{Config, Fields};
pub use value::Value;
