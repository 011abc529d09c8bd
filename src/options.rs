use crate::config::DefaultIgnoreConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Built-in names and extensions of common settings and lock files, applied
/// only when [`IgnoreRules::ignore_settings`] is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsPreset {
    pub file_names: BTreeSet<String>,
    pub extensions: BTreeSet<String>,
}

impl SettingsPreset {
    pub fn from_config(config: &DefaultIgnoreConfig) -> Self {
        Self {
            file_names: config.settings_files.iter().cloned().collect(),
            extensions: config
                .settings_extensions
                .iter()
                .map(|e| normalize_extension(e))
                .collect(),
        }
    }
}

impl Default for SettingsPreset {
    fn default() -> Self {
        Self::from_config(DefaultIgnoreConfig::bundled())
    }
}

/// What to leave out of the generated document. Immutable for the duration of
/// a run; extensions are stored lowercase with the leading dot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IgnoreRules {
    pub file_names: BTreeSet<String>,
    pub extensions: BTreeSet<String>,
    pub dir_names: BTreeSet<String>,
    pub ignore_settings: bool,
    pub settings: SettingsPreset,
    pub include_dir: Option<PathBuf>,
}

impl Default for IgnoreRules {
    fn default() -> Self {
        let config = DefaultIgnoreConfig::bundled();
        Self {
            file_names: BTreeSet::new(),
            extensions: config
                .default_ignore_types()
                .iter()
                .map(|e| normalize_extension(e))
                .collect(),
            dir_names: BTreeSet::new(),
            ignore_settings: false,
            settings: SettingsPreset::default(),
            include_dir: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepocatOptions {
    pub root: PathBuf,
    pub rules: IgnoreRules,
    pub use_gitignore: bool,
    pub max_file_size: Option<u64>,
    pub output_file: Option<PathBuf>,
}

impl Default for RepocatOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            rules: IgnoreRules::default(),
            use_gitignore: false,
            max_file_size: None,
            output_file: None,
        }
    }
}

#[derive(Debug, Default)]
pub struct RepocatBuilder {
    options: RepocatOptions,
}

impl RepocatBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: RepocatOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }

    pub fn ignore_files(mut self, names: Vec<String>) -> Self {
        self.options.rules.file_names = names.into_iter().collect();
        self
    }

    /// Replaces the ignored-extension list. Entries are normalized to
    /// lowercase with a leading dot, so `LOG` and `.log` are equivalent.
    pub fn ignore_types(mut self, types: Vec<String>) -> Self {
        self.options.rules.extensions =
            types.iter().map(|e| normalize_extension(e)).collect();
        self
    }

    pub fn exclude_dirs(mut self, names: Vec<String>) -> Self {
        self.options.rules.dir_names = names.into_iter().collect();
        self
    }

    pub fn ignore_settings(mut self, yes: bool) -> Self {
        self.options.rules.ignore_settings = yes;
        self
    }

    pub fn settings_preset(mut self, preset: SettingsPreset) -> Self {
        self.options.rules.settings = preset;
        self
    }

    pub fn include_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.options.rules.include_dir = Some(dir.into());
        self
    }

    pub fn use_gitignore(mut self, yes: bool) -> Self {
        self.options.use_gitignore = yes;
        self
    }

    pub fn max_file_size(mut self, limit: Option<u64>) -> Self {
        self.options.max_file_size = limit;
        self
    }

    pub fn output_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.output_file = Some(path.into());
        self
    }

    pub fn build(self) -> RepocatOptions {
        self.options
    }
}

/// Resolves one rule list against its default: absent means the default
/// applies, the single value `none` clears the list, anything else replaces
/// the default outright.
pub fn resolve_rule_list(user: Option<Vec<String>>, defaults: &[String]) -> Vec<String> {
    match user {
        None => defaults.to_vec(),
        Some(values) if values.len() == 1 && values[0] == "none" => Vec::new(),
        Some(values) => values,
    }
}

pub(crate) fn normalize_extension(raw: &str) -> String {
    let trimmed = raw.trim();
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with('.') {
        lower
    } else {
        format!(".{lower}")
    }
}
