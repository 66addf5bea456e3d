//! Hierarchical configuration trees bound into typed Rust destinations.
//!
//! A [`Config`] is a tree of string-keyed sub-configs with scalar and array
//! leaves. [`Config::unpack`] writes such a tree into any destination that
//! implements [`Unpack`]: structs deriving it, string-keyed maps, `Vec`s and
//! arrays, scalars, `Option`/`Box` layers, nested [`Config`]s and dynamic
//! `toml::Value`s. Unpacking merges into what the destination already holds;
//! keys missing from the config leave their fields untouched.

extern crate self as ucfg;

pub mod config;
mod error;
pub mod reify;

pub use config::{merge_config, Config, ConfigError, Value};
pub use error::Error;
pub use reify::{unpack, Options, Unpack, UnpackError, UnpackStruct};
pub use ucfg_derive::Unpack;
