//! Ignore policy: a compiled, pure predicate over root-relative paths.
//!
//! All rule categories are resolved and compiled once per run; after
//! construction [`IgnorePolicy::should_ignore`] does no I/O and cannot fail.

use crate::error::RepocatError;
use crate::options::RepocatOptions;
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct IgnorePolicy {
    file_names: BTreeSet<String>,
    dir_names: BTreeSet<String>,
    ignore_settings: bool,
    settings_file_names: BTreeSet<String>,
    extension_set: GlobSet,
    settings_extension_set: GlobSet,
    include_rel: Option<PathBuf>,
    output_rel: Option<PathBuf>,
}

impl IgnorePolicy {
    /// Compiles the policy for a run rooted at `root` (already canonicalized).
    ///
    /// Fails when the include-only directory does not exist under the root or
    /// when an extension entry cannot be compiled into a glob.
    pub fn new(options: &RepocatOptions, root: &Path) -> Result<Self, RepocatError> {
        let rules = &options.rules;
        let include_rel = match &rules.include_dir {
            Some(dir) => Some(resolve_include_dir(dir, root)?),
            None => None,
        };
        let output_rel = options
            .output_file
            .as_deref()
            .and_then(|out| resolve_output_rel(out, root));
        Ok(Self {
            file_names: rules.file_names.clone(),
            dir_names: rules.dir_names.clone(),
            ignore_settings: rules.ignore_settings,
            settings_file_names: rules.settings.file_names.clone(),
            extension_set: compile_extension_set(&rules.extensions)?,
            settings_extension_set: compile_extension_set(&rules.settings.extensions)?,
            include_rel,
            output_rel,
        })
    }

    /// True when the entry at `rel_path` (relative to the root) is excluded
    /// from both the tree and the contents section.
    pub fn should_ignore(&self, rel_path: &Path, is_dir: bool) -> bool {
        let Some(name) = rel_path.file_name() else {
            return false;
        };
        if is_hidden(name) {
            return true;
        }
        if !is_dir && self.output_rel.as_deref() == Some(rel_path) {
            return true;
        }
        if let Some(include) = &self.include_rel {
            // Ancestors stay traversable so a nested include directory can be
            // reached; everything outside its subtree is dropped.
            if !(rel_path.starts_with(include) || include.starts_with(rel_path)) {
                return true;
            }
        }
        if self.matches_dir_rules(rel_path, is_dir, name) {
            return true;
        }
        if !is_dir {
            if let Some(name_str) = name.to_str() {
                if self.file_names.contains(name_str) {
                    return true;
                }
            }
            if self.extension_set.is_match(name) {
                return true;
            }
        }
        if self.ignore_settings {
            if let Some(name_str) = name.to_str() {
                if self.settings_file_names.contains(name_str) {
                    return true;
                }
            }
            if self.settings_extension_set.is_match(name) {
                return true;
            }
        }
        false
    }

    fn matches_dir_rules(&self, rel_path: &Path, is_dir: bool, name: &OsStr) -> bool {
        if self.dir_names.is_empty() {
            return false;
        }
        if is_dir {
            if let Some(name_str) = name.to_str() {
                if self.dir_names.contains(name_str) {
                    return true;
                }
            }
        }
        if let Some(parent) = rel_path.parent() {
            for component in parent.iter() {
                if let Some(s) = component.to_str() {
                    if self.dir_names.contains(s) {
                        return true;
                    }
                }
            }
        }
        false
    }
}

fn is_hidden(name: &OsStr) -> bool {
    name.as_encoded_bytes().first() == Some(&b'.')
}

fn resolve_include_dir(dir: &Path, root: &Path) -> Result<PathBuf, RepocatError> {
    let joined = if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        root.join(dir)
    };
    let resolved = std::fs::canonicalize(&joined).map_err(|_| {
        RepocatError::config(format!(
            "include directory does not exist: {}",
            joined.display()
        ))
    })?;
    if !resolved.is_dir() {
        return Err(RepocatError::config(format!(
            "include path is not a directory: {}",
            resolved.display()
        )));
    }
    resolved
        .strip_prefix(root)
        .map(Path::to_path_buf)
        .map_err(|_| {
            RepocatError::config(format!(
                "include directory is not inside the repository: {}",
                resolved.display()
            ))
        })
}

// Best effort: canonicalize the parent so the comparison survives symlinked
// working directories; the file itself may not exist yet.
fn resolve_output_rel(output: &Path, root: &Path) -> Option<PathBuf> {
    let parent = match output.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let absolute = match std::fs::canonicalize(parent) {
        Ok(dir) => match output.file_name() {
            Some(name) => dir.join(name),
            None => dir,
        },
        Err(_) => std::path::absolute(output).ok()?,
    };
    absolute.strip_prefix(root).ok().map(Path::to_path_buf)
}

fn compile_extension_set(extensions: &BTreeSet<String>) -> Result<GlobSet, RepocatError> {
    let mut builder = GlobSetBuilder::new();
    for ext in extensions {
        let pattern = format!("*{}", globset::escape(ext));
        let glob = GlobBuilder::new(&pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| {
                RepocatError::config(format!("invalid extension pattern {ext:?}: {e}"))
            })?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|e| RepocatError::config(format!("cannot compile extension set: {e}")))
}
