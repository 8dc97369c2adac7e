//! Config struct definition.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Configuration for tgrep.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Templates
    // =========================================================================
    /// Extra named templates, merged with the built-in ones.
    /// Built-in names cannot be redefined.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub templates: BTreeMap<String, String>,

    // =========================================================================
    // Search defaults
    // =========================================================================
    /// Default for `-i`.
    pub ignore_case: bool,

    /// Default for `-w`.
    pub word_boundary: bool,

    /// Default for `-E`.
    pub no_template: bool,
}
