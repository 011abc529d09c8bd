//! Internal module for reading file contents in tree order.

use crate::scan::TreeNode;
use crate::types::{FileContent, FileSection};
use std::fs;
use std::path::Path;
#[cfg(feature = "logging")]
use tracing;

/// Produces one section per file node, in the scanner's sorted order.
///
/// Never fails: binary, oversized, and unreadable files turn into placeholder
/// variants so a single bad file cannot abort the run.
pub(crate) fn collect_contents(root: &TreeNode, max_file_size: Option<u64>) -> Vec<FileSection> {
    let mut sections = Vec::new();
    collect_dir(root, max_file_size, &mut sections);
    sections
}

fn collect_dir(node: &TreeNode, max_file_size: Option<u64>, sections: &mut Vec<FileSection>) {
    for child in &node.children {
        if child.is_dir {
            collect_dir(child, max_file_size, sections);
        } else {
            sections.push(FileSection {
                rel_path: child.rel_path.clone(),
                content: read_file_content(&child.path, max_file_size),
            });
        }
    }
}

fn read_file_content(path: &Path, max_file_size: Option<u64>) -> FileContent {
    if let Some(limit) = max_file_size {
        match fs::metadata(path) {
            Ok(metadata) if metadata.len() > limit => {
                #[cfg(feature = "logging")]
                tracing::debug!(
                    "file too large ({} > {}): {}",
                    metadata.len(),
                    limit,
                    path.display()
                );
                return FileContent::Oversize;
            }
            Ok(_) => {}
            Err(e) => return FileContent::Unreadable(e.to_string()),
        }
    }
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => return FileContent::Unreadable(e.to_string()),
    };
    let head = &bytes[..bytes.len().min(4096)];
    if content_inspector::inspect(head).is_binary() {
        #[cfg(feature = "logging")]
        tracing::debug!("binary file detected: {}", path.display());
        return FileContent::Binary;
    }
    FileContent::Text(String::from_utf8_lossy(&bytes).into_owned())
}
