//! Configuration model for gitrig.
//!
//! This module defines the Config struct that sessions and the CLI read.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! sensible defaults for every field, and validation of config values.

mod model;
mod operations;


pub use model::{
    Config, DEFAULT_CREDENTIAL_HOST, DEFAULT_GIT_BINARY, DEFAULT_NEWLINE_PLACEHOLDER,
};
