use crate::error::RepocatError;
use crate::policy::IgnorePolicy;
use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;

#[derive(Debug)]
pub(crate) struct TreeNode {
    pub name: String,
    pub path: PathBuf,
    pub rel_path: PathBuf,
    pub is_dir: bool,
    pub children: Vec<TreeNode>,
}

/// Walks the repository depth-first and materializes the filtered tree.
///
/// `root` must already be canonicalized. Directories resolving to an already
/// visited canonical path (symlink cycles, duplicate links) are skipped, so
/// the walk always terminates. Nested directories that cannot be read stay in
/// the tree as childless nodes; only a failure to read the root is fatal.
pub(crate) fn scan_tree(
    root: &Path,
    policy: &IgnorePolicy,
    use_gitignore: bool,
) -> Result<TreeNode, RepocatError> {
    let name = match root.file_name() {
        Some(n) => n.to_string_lossy().into_owned(),
        None => root.display().to_string(),
    };
    let mut node = TreeNode {
        name,
        path: root.to_path_buf(),
        rel_path: PathBuf::new(),
        is_dir: true,
        children: Vec::new(),
    };
    let mut visited = HashSet::new();
    visited.insert(root.to_path_buf());
    let mut gitignores = GitignoreStack::new(use_gitignore);
    gitignores.enter(root);
    scan_dir(&mut node, policy, &mut gitignores, &mut visited, true)?;
    Ok(node)
}

fn scan_dir(
    dir_node: &mut TreeNode,
    policy: &IgnorePolicy,
    gitignores: &mut GitignoreStack,
    visited: &mut HashSet<PathBuf>,
    is_root: bool,
) -> Result<(), RepocatError> {
    let reader = match fs::read_dir(&dir_node.path) {
        Ok(reader) => reader,
        Err(e) if is_root => return Err(RepocatError::io(&dir_node.path, e)),
        Err(_e) => {
            #[cfg(feature = "logging")]
            tracing::warn!(
                "cannot read directory {}: {}",
                dir_node.path.display(),
                _e
            );
            return Ok(());
        }
    };
    let mut entries: Vec<_> = reader
        .filter_map(|entry| entry.ok())
        .map(|entry| (entry.file_name(), entry.path()))
        .collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    for (name, path) in entries {
        // Metadata follows symlinks; an unresolvable entry (broken link) is
        // kept as a file so the contents section can report it.
        let is_dir = fs::metadata(&path).map(|m| m.is_dir()).unwrap_or(false);
        let rel_path = dir_node.rel_path.join(&name);
        if policy.should_ignore(&rel_path, is_dir) {
            continue;
        }
        if gitignores.is_ignored(&path, is_dir) {
            continue;
        }
        let mut child = TreeNode {
            name: name.to_string_lossy().into_owned(),
            path,
            rel_path,
            is_dir,
            children: Vec::new(),
        };
        if is_dir {
            match fs::canonicalize(&child.path) {
                Ok(resolved) => {
                    if !visited.insert(resolved) {
                        continue;
                    }
                    gitignores.enter(&child.path);
                    scan_dir(&mut child, policy, gitignores, visited, false)?;
                    gitignores.exit();
                }
                Err(_e) => {
                    #[cfg(feature = "logging")]
                    tracing::warn!(
                        "cannot resolve directory {}: {}",
                        child.path.display(),
                        _e
                    );
                }
            }
        }
        dir_node.children.push(child);
    }
    Ok(())
}

/// One gitignore matcher per directory level, nearest level consulted first.
struct GitignoreStack {
    enabled: bool,
    stack: Vec<Option<Gitignore>>,
}

impl GitignoreStack {
    fn new(enabled: bool) -> Self {
        Self {
            enabled,
            stack: Vec::new(),
        }
    }

    fn enter(&mut self, dir: &Path) {
        if !self.enabled {
            return;
        }
        let candidate = dir.join(".gitignore");
        let matcher = if candidate.is_file() {
            let mut builder = GitignoreBuilder::new(dir);
            let _ = builder.add(&candidate);
            builder.build().ok()
        } else {
            None
        };
        self.stack.push(matcher);
    }

    fn exit(&mut self) {
        if self.enabled {
            self.stack.pop();
        }
    }

    fn is_ignored(&self, path: &Path, is_dir: bool) -> bool {
        for matcher in self.stack.iter().rev().flatten() {
            let matched = matcher.matched(path, is_dir);
            if matched.is_ignore() {
                return true;
            }
            if matched.is_whitelist() {
                return false;
            }
        }
        false
    }
}
