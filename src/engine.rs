use crate::contents::collect_contents;
use crate::error::RepocatError;
use crate::options::RepocatOptions;
use crate::policy::IgnorePolicy;
use crate::scan::scan_tree;
use crate::tree::render_tree;
use crate::types::RepocatResult;
use std::fs;
#[cfg(feature = "logging")]
use tracing;

/// Runs one full pass over the repository: validate the root, compile the
/// ignore policy, scan, render the tree, and collect file contents.
pub fn repocat(options: RepocatOptions) -> Result<RepocatResult, RepocatError> {
    #[cfg(feature = "logging")]
    tracing::debug!("starting repocat with root: {}", options.root.display());
    let root = fs::canonicalize(&options.root)
        .map_err(|_| RepocatError::InvalidRoot(options.root.clone()))?;
    if !root.is_dir() {
        return Err(RepocatError::InvalidRoot(options.root.clone()));
    }
    let policy = IgnorePolicy::new(&options, &root)?;
    let node = scan_tree(&root, &policy, options.use_gitignore)?;
    let tree = render_tree(&node);
    let files = collect_contents(&node, options.max_file_size);
    Ok(RepocatResult {
        repo_name: node.name,
        tree,
        files,
    })
}
