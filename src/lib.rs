//! # Repocat
//!
//! `repocat` walks a repository tree and produces a single document combining a
//! rendered directory/file tree with the contents of every included file, subject
//! to ignore rules (file names, extensions, directory names, a common settings-file
//! preset, and an optional include-only directory).
//!
//! The generated document targets flat-text consumption: feeding a repository
//! snapshot to an LLM, a code review handoff, or archived documentation. Plain-text
//! and Markdown encodings are built in; see [`output`] for the sink abstraction.
//!
//! # Features
//!
//! - `logging`: Enables debug/warn logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use repocat::output::{self, OutputFormat};
//! use repocat::{RepocatBuilder, build_document, repocat};
//!
//! let options = RepocatBuilder::new(".")
//!     .ignore_types(vec![".log".into(), ".tmp".into()])
//!     .ignore_settings(true)
//!     .output_file("output.txt")
//!     .build();
//!
//! let result = repocat(options).expect("Failed to scan repository");
//!
//! println!("Directory tree:\n{}", result.tree);
//!
//! let document = build_document(&result);
//! output::write_document(&document, OutputFormat::Text, "output.txt")
//!     .expect("Failed to write document");
//! ```

mod contents;
mod engine;
mod error;
mod options;
mod policy;
mod scan;
mod tree;
mod types;

pub mod config;
pub mod document;
pub mod output;

pub use config::DefaultIgnoreConfig;
pub use document::{RenderedDocument, Segment, build_document};
pub use engine::repocat;
pub use error::RepocatError;
pub use options::{
    IgnoreRules, RepocatBuilder, RepocatOptions, SettingsPreset, resolve_rule_list,
};
pub use policy::IgnorePolicy;
pub use types::{FileContent, FileSection, RepocatResult};
