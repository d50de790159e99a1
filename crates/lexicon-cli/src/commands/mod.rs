//! CLI command implementations.

mod check;
mod coverage;
mod render;

use std::fs::read_to_string;
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use lexicon::{CatalogStore, LoadError, DEFAULT_LANGUAGE};
use lexicon_files::{FileFormat, LanguageFileLoader};
use miette::{miette, Report};
use tracing::debug;

use crate::output::LexiconDiagnostic;

pub use check::{run_check, CheckArgs};
pub use coverage::{run_coverage, CoverageArgs};
pub use render::{run_render, RenderArgs};

/// Arguments shared by every command that reads a language directory.
#[derive(Debug, Args)]
pub struct DirectoryArgs {
    /// Directory containing one file per language (e.g., en.json, fr.yml)
    #[arg(env = "LEXICON_DIR")]
    pub dir: PathBuf,

    /// Language file format. Both JSON and YAML files are read when omitted.
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Language used for fallback and as the reference for checks.
    #[arg(long, env = "LEXICON_DEFAULT_LANGUAGE", default_value = DEFAULT_LANGUAGE)]
    pub default_language: String,
}

/// Language file formats selectable on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Json,
    Yaml,
}

impl DirectoryArgs {
    /// One loader per selected format. YAML loads last and wins on conflicts.
    pub fn loaders(&self) -> Vec<LanguageFileLoader> {
        let formats = match self.format {
            Some(FormatArg::Json) => vec![FileFormat::Json],
            Some(FormatArg::Yaml) => vec![FileFormat::Yaml],
            None => vec![FileFormat::Json, FileFormat::Yaml],
        };
        formats
            .into_iter()
            .map(|format| LanguageFileLoader::new(&self.dir, format))
            .collect()
    }
}

/// Load every language file in the directory into a catalog store.
pub fn load_store(args: &DirectoryArgs) -> miette::Result<CatalogStore<String>> {
    let mut store = CatalogStore::new(args.default_language.clone());
    for mut loader in args.loaders() {
        store
            .load_languages(&mut loader)
            .map_err(load_error_report)?;
    }
    debug!(
        dir = %args.dir.display(),
        languages = store.languages().len(),
        "loaded language directory"
    );
    Ok(store)
}

/// Convert a loader error into a report, with source context for parse errors.
pub fn load_error_report(error: LoadError) -> Report {
    match error {
        LoadError::Parse {
            path,
            line,
            column,
            message,
        } => match read_to_string(&path) {
            Ok(content) => {
                LexiconDiagnostic::from_parse_error(&path, &content, line, column, message).into()
            }
            Err(_) => miette!("{}:{line}:{column}: {message}", path.display()),
        },
        other => miette!("{other}"),
    }
}
