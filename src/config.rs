//! Default ignore configuration.
//!
//! The extension categories ignored by default, the settings-file preset, and
//! the default output file name all come from a JSON configuration. A copy is
//! bundled into the binary ([`DefaultIgnoreConfig::bundled`]); an alternate
//! file can be loaded with [`DefaultIgnoreConfig::load`]. The parsed value is
//! immutable and handed explicitly to rule construction.

use crate::error::RepocatError;
use serde::Deserialize;
use std::path::Path;
use std::sync::OnceLock;

const BUNDLED: &str = include_str!("defaults.json");

#[derive(Debug, Clone, Deserialize)]
pub struct DefaultIgnoreConfig {
    pub image_extensions: Vec<String>,
    pub video_extensions: Vec<String>,
    pub audio_extensions: Vec<String>,
    pub document_extensions: Vec<String>,
    pub executable_extensions: Vec<String>,
    pub settings_extensions: Vec<String>,
    pub settings_files: Vec<String>,
    pub additional_ignore_types: Vec<String>,
    pub default_output_file: String,
}

impl DefaultIgnoreConfig {
    /// The configuration compiled into the binary.
    pub fn bundled() -> &'static Self {
        static CONFIG: OnceLock<DefaultIgnoreConfig> = OnceLock::new();
        CONFIG.get_or_init(|| {
            serde_json::from_str(BUNDLED).expect("bundled defaults.json is valid")
        })
    }

    /// Loads an alternate configuration file.
    pub fn load(path: &Path) -> Result<Self, RepocatError> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            RepocatError::config(format!("cannot read {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&text).map_err(|e| {
            RepocatError::config(format!("cannot parse {}: {}", path.display(), e))
        })
    }

    /// Every extension category ignored when `--ignore-types` is not given.
    pub fn default_ignore_types(&self) -> Vec<String> {
        let mut types = Vec::new();
        for list in [
            &self.image_extensions,
            &self.video_extensions,
            &self.audio_extensions,
            &self.document_extensions,
            &self.executable_extensions,
            &self.additional_ignore_types,
        ] {
            types.extend(list.iter().cloned());
        }
        types
    }
}
