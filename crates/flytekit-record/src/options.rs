//! Codec options, loaded from the `[codec]` table of a TOML file.
//!
//! ```toml
//! [codec]
//! correlation = "positional"
//! reject_unknown_fields = false
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// How constructor parameters are matched with accessors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Correlation {
    /// Each parameter takes the accessor of the same name
    #[default]
    ByName,
    /// Each parameter takes the accessor at the same position; names must agree
    Positional,
}

/// Options for interface derivation and marshalling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecOptions {
    /// Parameter/accessor correlation strategy
    #[serde(default)]
    pub correlation: Correlation,

    /// Fail decoding when an input names no field (default: true)
    #[serde(default = "default_reject_unknown_fields")]
    pub reject_unknown_fields: bool,
}

fn default_reject_unknown_fields() -> bool {
    true
}

impl Default for CodecOptions {
    fn default() -> Self {
        CodecOptions {
            correlation: Correlation::default(),
            reject_unknown_fields: default_reject_unknown_fields(),
        }
    }
}

#[derive(Deserialize)]
struct OptionsFile {
    #[serde(default)]
    codec: Option<CodecOptions>,
}

impl CodecOptions {
    /// Parse options from TOML. A missing `[codec]` table yields the defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: OptionsFile = toml::from_str(content)?;
        Ok(file.codec.unwrap_or_default())
    }

    /// Load options from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
