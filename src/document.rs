//! Document assembly for repocat results.
//!
//! A run's output is an ordered sequence of [`Segment`]s. How each segment is
//! encoded (plain text, Markdown) is decided by the sinks in [`crate::output`].

use crate::types::{FileContent, RepocatResult};
use std::path::Path;

/// One block of the generated document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Heading { level: u8, text: String },
    Paragraph(String),
    /// Preformatted text, with a fence language hint for Markdown-like sinks.
    Verbatim { text: String, lang: &'static str },
}

/// The generated document, produced once per run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedDocument {
    pub segments: Vec<Segment>,
}

impl RenderedDocument {
    fn heading(&mut self, level: u8, text: impl Into<String>) {
        self.segments.push(Segment::Heading {
            level,
            text: text.into(),
        });
    }

    fn paragraph(&mut self, text: impl Into<String>) {
        self.segments.push(Segment::Paragraph(text.into()));
    }

    fn verbatim(&mut self, text: impl Into<String>, lang: &'static str) {
        self.segments.push(Segment::Verbatim {
            text: text.into(),
            lang,
        });
    }
}

const PREAMBLE: &str = "\
This document provides a comprehensive overview of the repository's structure and contents.\n\
The first section, titled 'Directory/File Tree', displays the repository's hierarchy in a tree format.\n\
In this section, directories and files are listed using tree branches to indicate their structure and relationships.\n\
Following the tree representation, the 'File Content' section details the contents of each file in the repository.\n\
Each file's content is introduced with a '[File Begins]' marker followed by the file's relative path,\n\
and the content is displayed verbatim. The end of each file's content is marked with a '[File Ends]' marker.\n\
This format ensures a clear and orderly presentation of both the structure and the detailed contents of the repository.";

/// Assembles the ordered document for a run result.
///
/// Layout: title with the repository name, explanatory preamble, the tree
/// between `Directory/File Tree` markers, then one `[File Begins]`/`[File
/// Ends]` block per file between `File Content` markers. Placeholder contents
/// become paragraphs instead of verbatim blocks.
pub fn build_document(result: &RepocatResult) -> RenderedDocument {
    let mut doc = RenderedDocument::default();
    doc.heading(1, format!("Repository Documentation: {}", result.repo_name));
    doc.paragraph(PREAMBLE);
    doc.heading(2, "Directory/File Tree Begins -->");
    doc.verbatim(result.tree.clone(), "");
    doc.heading(2, "<-- Directory/File Tree Ends");
    doc.heading(2, "File Content Begins -->");
    for file in &result.files {
        let label = file.rel_path.display();
        doc.heading(3, format!("[File Begins] {label}"));
        match &file.content {
            FileContent::Text(text) => {
                doc.verbatim(text.clone(), language_for_path(&file.rel_path));
            }
            placeholder => doc.paragraph(placeholder.to_string()),
        }
        doc.heading(3, format!("[File Ends] {label}"));
    }
    doc.heading(2, "<-- File Content Ends");
    doc
}

fn language_for_path(path: &Path) -> &'static str {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    match ext {
        "rs" => "rust", "toml" => "toml", "json" => "json", "md" | "markdown" => "markdown",
        "txt" => "text", "html" | "htm" => "html", "css" => "css", "js" => "javascript",
        "py" => "python", "sh" | "bash" => "bash", "yml" | "yaml" => "yaml", "xml" => "xml",
        "c" => "c", "cpp" | "cc" | "cxx" => "cpp", "h" => "c", "hpp" => "cpp",
        "go" => "go", "rb" => "ruby", "php" => "php", "swift" => "swift",
        "kt" | "kts" => "kotlin", "scala" => "scala", "dart" => "dart",
        _ => "",
    }
}
