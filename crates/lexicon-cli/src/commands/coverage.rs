//! Coverage command implementation.

use clap::Args;
use lexicon::coverage;
use miette::{miette, IntoDiagnostic, Result};

use super::{load_store, DirectoryArgs};
use crate::output::table::{format_coverage_table, LanguageCoverage};

/// Arguments for the coverage command.
#[derive(Debug, Args)]
pub struct CoverageArgs {
    #[command(flatten)]
    pub directory: DirectoryArgs,

    /// Languages to check coverage for (comma-separated). Defaults to every
    /// language found besides the default language.
    #[arg(long, value_delimiter = ',')]
    pub lang: Vec<String>,

    /// Exit with non-zero code if any translation is incomplete.
    #[arg(long)]
    pub strict: bool,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Run the coverage command.
pub fn run_coverage(args: CoverageArgs) -> Result<i32> {
    let store = load_store(&args.directory)?;
    let default_language = args.directory.default_language.as_str();

    let Some(source) = store.catalog(default_language) else {
        return Err(miette!(
            "no file for default language '{default_language}' in {}",
            args.directory.dir.display()
        ));
    };
    let total = source.len();

    let languages: Vec<String> = if args.lang.is_empty() {
        store
            .language_ids()
            .into_iter()
            .filter(|language| *language != default_language)
            .map(str::to_string)
            .collect()
    } else {
        args.lang.clone()
    };

    // Languages without a file are missing every key
    let coverage_data: Vec<LanguageCoverage> = languages
        .into_iter()
        .map(|language| {
            let missing = coverage(&store, default_language, &language);
            LanguageCoverage {
                translated: total - missing.len(),
                total,
                missing,
                language,
            }
        })
        .collect();

    let any_incomplete = coverage_data.iter().any(|c| !c.missing.is_empty());

    if args.json {
        let json_output = serde_json::to_string_pretty(&coverage_data).into_diagnostic()?;
        println!("{json_output}");
    } else {
        println!("{}", format_coverage_table(&coverage_data));

        for lang_coverage in &coverage_data {
            if !lang_coverage.missing.is_empty() {
                println!("\nMissing in {}:", lang_coverage.language);
                for key in &lang_coverage.missing {
                    println!("  - {key}");
                }
            }
        }
    }

    if args.strict && any_incomplete {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
