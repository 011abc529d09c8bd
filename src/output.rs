//! Output formatting for repocat documents.
//!
//! A [`RenderedDocument`] is encoded by a [`DocumentSink`] strategy. Two sinks
//! are built in (plain text and Markdown); a binary document encoder would be
//! one more implementation of the same trait.

use crate::RepocatError;
use crate::document::{RenderedDocument, Segment};
use std::fs;
use std::path::Path;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Markdown,
}

impl OutputFormat {
    /// Picks the format from the destination file's extension.
    ///
    /// `md` and `markdown` (any case) select Markdown; everything else,
    /// including no extension at all, selects plain text.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext)
                if ext.eq_ignore_ascii_case("md") || ext.eq_ignore_ascii_case("markdown") =>
            {
                OutputFormat::Markdown
            }
            _ => OutputFormat::Text,
        }
    }

    /// Returns the conventional file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Markdown => "md",
        }
    }

    /// Returns the sink that encodes this format.
    pub fn sink(&self) -> &'static dyn DocumentSink {
        match self {
            OutputFormat::Text => &TextSink,
            OutputFormat::Markdown => &MarkdownSink,
        }
    }
}

/// Rendering strategy for a [`RenderedDocument`].
pub trait DocumentSink {
    /// Encodes the document segments into the final artifact text.
    fn render(&self, document: &RenderedDocument) -> String;
}

/// Plain-text encoding: every segment becomes its bare text, one blank line
/// between segments.
pub struct TextSink;

impl DocumentSink for TextSink {
    fn render(&self, document: &RenderedDocument) -> String {
        let mut out = String::with_capacity(1024);
        for segment in &document.segments {
            let text = match segment {
                Segment::Heading { text, .. } => text.as_str(),
                Segment::Paragraph(text) => text.as_str(),
                Segment::Verbatim { text, .. } => text.as_str(),
            };
            out.push_str(text);
            if !text.ends_with('\n') { out.push('\n'); }
            out.push('\n');
        }
        out
    }
}

/// Markdown encoding: `#`-prefixed headings and fenced verbatim blocks.
pub struct MarkdownSink;

impl DocumentSink for MarkdownSink {
    fn render(&self, document: &RenderedDocument) -> String {
        let mut out = String::with_capacity(1024);
        for segment in &document.segments {
            match segment {
                Segment::Heading { level, text } => {
                    let hashes = "#".repeat(usize::from(*level));
                    out.push_str(&format!("{hashes} {text}\n\n"));
                }
                Segment::Paragraph(text) => {
                    out.push_str(text);
                    if !text.ends_with('\n') { out.push('\n'); }
                    out.push('\n');
                }
                Segment::Verbatim { text, lang } => {
                    out.push_str(&format!("```{lang}\n"));
                    out.push_str(text);
                    if !text.ends_with('\n') { out.push('\n'); }
                    out.push_str("```\n\n");
                }
            }
        }
        out
    }
}

/// Formats the document with the sink for `format`.
pub fn format_document(document: &RenderedDocument, format: OutputFormat) -> String {
    format.sink().render(document)
}

/// Writes the formatted document to a file.
pub fn write_document(
    document: &RenderedDocument,
    format: OutputFormat,
    path: impl AsRef<Path>,
) -> Result<(), RepocatError> {
    let content = format_document(document, format);
    fs::write(&path, content).map_err(|e| RepocatError::io(path.as_ref(), e))?;
    Ok(())
}
