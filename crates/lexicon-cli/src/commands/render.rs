//! Implementation of the `lexicon render` command.

use lexicon::{
    compute_suggestions, Delivery, Localization, MemorySink, Settings, Target, TracingConsole,
};
use miette::{miette, IntoDiagnostic};
use serde::Serialize;
use tracing::debug;

use super::{load_error_report, DirectoryArgs};

/// Receiver the rendered message is addressed to.
const CLI_RECEIVER: &str = "cli";

/// Arguments for the render command.
#[derive(Debug, clap::Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub directory: DirectoryArgs,

    /// Message key to render
    #[arg(short, long)]
    pub key: String,

    /// Language to render in (defaults to the default language)
    #[arg(long)]
    pub lang: Option<String>,

    /// Argument for ${N}, ${N+} and ${*} placeholders (repeatable)
    #[arg(short = 'a', long = "arg")]
    pub args: Vec<String>,

    /// Clear placeholders when no arguments are given instead of printing them
    #[arg(long)]
    pub clear: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for render results.
#[derive(Serialize)]
struct RenderJson<'a> {
    language: &'a str,
    key: &'a str,
    message: &'a str,
}

/// JSON output for a key that resolved to nothing.
#[derive(Serialize)]
struct MissingJson<'a> {
    error: String,
    suggestions: &'a [String],
}

/// Run the render command.
pub fn run_render(args: RenderArgs) -> miette::Result<i32> {
    let settings = Settings::builder()
        .default_language(args.directory.default_language.clone())
        .build();
    let sink = MemorySink::new();
    let mut localization =
        Localization::<String, String>::with_console(settings, sink.clone(), TracingConsole);
    for mut loader in args.directory.loaders() {
        localization
            .load_languages(&mut loader)
            .map_err(load_error_report)?;
    }

    let receiver = CLI_RECEIVER.to_string();
    if let Some(language) = &args.lang {
        localization.set_language(receiver.clone(), language.clone());
    }
    let language = localization
        .language_of(Target::Receiver(&receiver))
        .to_string();

    if let Some((error, loaded)) = unloaded_language(&localization, &language) {
        return report_missing(args.json, error, &loaded, "loaded languages");
    }

    let arguments = if args.args.is_empty() && !args.clear {
        None
    } else {
        Some(args.args.as_slice())
    };
    debug!(%language, key = %args.key, "rendering message");
    let delivery = localization
        .send_message_with(&receiver, &args.key, arguments, |message| message)
        .map_err(|e| miette!("{e}"))?;

    if delivery == Delivery::Missing {
        let available = available_keys(&localization, &language);
        let suggestions = compute_suggestions(&args.key, &available);
        let error = format!("no message '{}' in '{language}'", args.key);
        return report_missing(args.json, error, &suggestions, "did you mean");
    }

    let Some((_, message)) = sink.take().into_iter().next() else {
        return Err(miette!("message for '{}' was not delivered", args.key));
    };
    if args.json {
        let output = RenderJson {
            language: &language,
            key: &args.key,
            message: &message,
        };
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else {
        println!("{message}");
    }
    Ok(exitcode::OK)
}

/// An error and the loaded language ids when `language` has no catalog.
///
/// Such a language resolves nothing, not even through fallback.
fn unloaded_language(
    localization: &Localization<String, String>,
    language: &str,
) -> Option<(String, Vec<String>)> {
    let store = localization.store();
    if store.catalog(language).is_some() {
        return None;
    }
    let loaded = store.language_ids().into_iter().map(str::to_string).collect();
    Some((format!("language '{language}' is not loaded"), loaded))
}

/// Print a resolution failure with alternatives and return the exit code.
fn report_missing(
    json: bool,
    error: String,
    suggestions: &[String],
    hint: &str,
) -> miette::Result<i32> {
    if json {
        let output = MissingJson { error, suggestions };
        eprintln!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else {
        eprintln!("{error}");
        if !suggestions.is_empty() {
            eprintln!("{hint}: {}", suggestions.join(", "));
        }
    }
    Ok(exitcode::DATAERR)
}

/// Keys visible from `language`, including those reached through fallback.
fn available_keys(localization: &Localization<String, String>, language: &str) -> Vec<String> {
    let store = localization.store();
    let mut keys: Vec<String> = [language, store.default_language()]
        .into_iter()
        .filter_map(|id| store.catalog(id))
        .flat_map(|catalog| catalog.keys())
        .map(str::to_string)
        .collect();
    keys.sort();
    keys.dedup();
    keys
}
