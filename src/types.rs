use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// The extracted content of one file, or the placeholder standing in for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileContent {
    /// Decoded text content.
    Text(String),
    /// Binary data was detected; the content is omitted.
    Binary,
    /// The file exceeded the configured size cap.
    Oversize,
    /// The file could not be read.
    Unreadable(String),
}

impl FileContent {
    pub fn is_text(&self) -> bool {
        matches!(self, FileContent::Text(_))
    }
}

impl fmt::Display for FileContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileContent::Text(text) => f.write_str(text),
            FileContent::Binary => f.write_str("[Binary file, content omitted]"),
            FileContent::Oversize => f.write_str("[File too large, content omitted]"),
            FileContent::Unreadable(err) => write!(f, "[Error reading file: {err}]"),
        }
    }
}

/// One file section of the generated document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSection {
    /// Path relative to the repository root.
    pub rel_path: PathBuf,
    pub content: FileContent,
}

/// The complete result of a repocat run.
#[derive(Debug, Serialize, Deserialize)]
pub struct RepocatResult {
    /// Name of the repository root directory.
    pub repo_name: String,
    /// The rendered directory/file tree.
    ///
    /// This is a string similar to the output of the `tree` command.
    pub tree: String,
    /// File sections, in tree order.
    pub files: Vec<FileSection>,
}
