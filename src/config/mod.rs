//! Configuration model for tgrep.
//!
//! This module defines the Config struct that represents the optional YAML
//! config file (`--config` or `TGREP_CONFIG`). It supports forward-compatible
//! YAML parsing (unknown fields are ignored), defaults for every field, and
//! validation of user templates.

mod model;
mod operations;


// Re-export public API
pub use model::Config;
