//! Implementation of the `lexicon check` command.

use lexicon::{validate_catalogs, LoadWarning, PlaceholderSyntax};
use miette::{miette, IntoDiagnostic};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use super::{load_store, DirectoryArgs};
use crate::output::table::format_language_table;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub directory: DirectoryArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit with non-zero code if any warning is found
    #[arg(long)]
    pub strict: bool,
}

/// JSON output for check results.
#[derive(Serialize)]
struct CheckJson<'a> {
    default_language: &'a str,
    languages: Vec<LanguageJson>,
    warnings: &'a [LoadWarning],
}

#[derive(Serialize)]
struct LanguageJson {
    language: String,
    messages: usize,
}

/// Run the check command.
///
/// Parse errors abort with a diagnostic. Every other language is then
/// compared against the default language.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let store = load_store(&args.directory)?;
    let default_language = args.directory.default_language.as_str();

    if store.catalog(default_language).is_none() {
        return Err(miette!(
            "no file for default language '{default_language}' in {}",
            args.directory.dir.display()
        ));
    }

    let syntax = PlaceholderSyntax::default();
    let languages: Vec<(String, usize)> = store
        .language_ids()
        .into_iter()
        .filter_map(|id| store.catalog(id).map(|catalog| (id.to_string(), catalog.len())))
        .collect();
    let warnings: Vec<LoadWarning> = store
        .language_ids()
        .into_iter()
        .filter(|language| *language != default_language)
        .flat_map(|language| validate_catalogs(&store, default_language, language, &syntax))
        .collect();

    if args.json {
        let output = CheckJson {
            default_language,
            languages: languages
                .into_iter()
                .map(|(language, messages)| LanguageJson { language, messages })
                .collect(),
            warnings: &warnings,
        };
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else {
        println!("{}", format_language_table(&languages));
        for warning in &warnings {
            println!(
                "{} {warning}",
                "warning:".if_supports_color(Stream::Stdout, |text| text.yellow())
            );
        }
        if warnings.is_empty() {
            println!(
                "{} no problems found",
                "ok:".if_supports_color(Stream::Stdout, |text| text.green())
            );
        }
    }

    if args.strict && !warnings.is_empty() {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
