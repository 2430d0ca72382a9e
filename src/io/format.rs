//! Snapshot formats and save options

use serde::{Deserialize, Serialize};

/// On-disk encoding for a model snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelFormat {
    /// Plain-text JSON, easy to diff and inspect
    Json,

    /// YAML, matching the pipeline's configuration files
    Yaml,

    /// SafeTensors binary layout, interoperable with HuggingFace tooling
    SafeTensors,
}

impl ModelFormat {
    /// Canonical file extension for this encoding
    pub fn extension(&self) -> &str {
        match self {
            ModelFormat::Json => "json",
            ModelFormat::Yaml => "yaml",
            ModelFormat::SafeTensors => "safetensors",
        }
    }

    /// Map a file extension back to an encoding, case-insensitively.
    ///
    /// Returns `None` for extensions this crate does not write.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "json" => Some(ModelFormat::Json),
            "yaml" | "yml" => Some(ModelFormat::Yaml),
            "safetensors" => Some(ModelFormat::SafeTensors),
            _ => None,
        }
    }
}

/// Options controlling how a snapshot is written
#[derive(Debug, Clone)]
pub struct SaveConfig {
    /// Target encoding
    pub format: ModelFormat,

    /// Pretty-print text encodings; ignored for binary formats
    pub pretty: bool,
}

impl SaveConfig {
    /// Save options for the given encoding, pretty-printed by default
    pub fn new(format: ModelFormat) -> Self {
        Self {
            format,
            pretty: true,
        }
    }

    /// Enable/disable pretty printing
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for SaveConfig {
    fn default() -> Self {
        Self::new(ModelFormat::Json)
    }
}
