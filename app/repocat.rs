//! Command-line interface for repocat.
//!
//! This binary walks a repository, applies the ignore rules, and writes the
//! combined tree/contents document to the output file.

use clap::Parser;
use repocat::output::{self, OutputFormat};
use repocat::{
    DefaultIgnoreConfig, RepocatBuilder, RepocatError, SettingsPreset, build_document, repocat,
    resolve_rule_list,
};
use std::path::PathBuf;
use std::process::exit;

/// repocat - document a repository's tree and file contents
#[derive(Parser)]
#[command(name = "repocat", version, about, long_about = None)]
struct Cli {
    /// Repository root (default current dir)
    #[arg(value_name = "REPO_PATH", default_value = ".")]
    repo_path: PathBuf,

    /// Output file; the extension picks the format (.md for Markdown)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// File names to ignore ('none' to disable)
    #[arg(long, value_name = "NAME", num_args = 1..)]
    ignore_files: Option<Vec<String>>,

    /// File extensions to ignore, replacing the defaults ('none' to disable)
    #[arg(long, value_name = "EXT", num_args = 1..)]
    ignore_types: Option<Vec<String>>,

    /// Directory names to exclude ('none' to disable)
    #[arg(long, value_name = "NAME", num_args = 1..)]
    exclude_dir: Option<Vec<String>>,

    /// Also ignore common settings and lock files
    #[arg(long)]
    ignore_settings: bool,

    /// Restrict the run to one directory of the repository
    #[arg(long, value_name = "DIR")]
    include_dir: Option<PathBuf>,

    /// Respect .gitignore files during traversal
    #[arg(long)]
    use_gitignore: bool,

    /// Max file size in bytes (larger files have content omitted)
    #[arg(long, value_name = "BYTES")]
    max_file_size: Option<u64>,

    /// Alternate ignore-configuration JSON file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        exit(1);
    }
}

fn run(cli: Cli) -> Result<(), RepocatError> {
    let loaded;
    let config = match &cli.config {
        Some(path) => {
            loaded = DefaultIgnoreConfig::load(path)?;
            &loaded
        }
        None => DefaultIgnoreConfig::bundled(),
    };

    let output_file = cli
        .output
        .unwrap_or_else(|| PathBuf::from(&config.default_output_file));
    let format = OutputFormat::from_path(&output_file);

    let mut builder = RepocatBuilder::new(cli.repo_path)
        .ignore_files(resolve_rule_list(cli.ignore_files, &[]))
        .ignore_types(resolve_rule_list(
            cli.ignore_types,
            &config.default_ignore_types(),
        ))
        .exclude_dirs(resolve_rule_list(cli.exclude_dir, &[]))
        .ignore_settings(cli.ignore_settings)
        .settings_preset(SettingsPreset::from_config(config))
        .use_gitignore(cli.use_gitignore)
        .max_file_size(cli.max_file_size)
        .output_file(output_file.clone());
    if let Some(dir) = cli.include_dir {
        builder = builder.include_dir(dir);
    }

    let result = repocat(builder.build())?;
    let document = build_document(&result);
    output::write_document(&document, format, &output_file)?;
    Ok(())
}
