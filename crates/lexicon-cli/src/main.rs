//! lexicon CLI entry point.
//!
//! Provides command-line tools for working with language directories:
//! - `lexicon check` - Validate language files against the default language
//! - `lexicon coverage` - Report missing translations
//! - `lexicon render` - Resolve and render a single message

mod commands;
mod output;

use std::io::stderr;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{run_check, run_coverage, run_render, CheckArgs, CoverageArgs, RenderArgs};
use tracing_subscriber::EnvFilter;

/// lexicon language file tools.
#[derive(Debug, Parser)]
#[command(name = "lexicon")]
#[command(about = "lexicon language file tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check language files for syntax errors and inconsistent keys
    Check(CheckArgs),
    /// Report translation coverage across languages
    Coverage(CoverageArgs),
    /// Resolve a message key and render it with arguments
    Render(RenderArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Send library diagnostics to stderr. `RUST_LOG` wins over `--verbose`.
fn setup_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "debug" } else { "warn" })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(stderr)
        .with_target(verbose)
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_tracing(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Check(args) => run_check(args),
        Commands::Coverage(args) => run_coverage(args),
        Commands::Render(args) => run_render(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{e:?}");
            exit(exitcode::SOFTWARE);
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_render_arguments_parse() {
        let cli = Cli::try_parse_from([
            "lexicon", "render", "lang", "--key", "welcome", "--lang", "fr", "-a", "Ada", "-a",
            "Bob",
        ])
        .unwrap();
        match cli.command {
            Commands::Render(args) => {
                assert_eq!(args.key, "welcome");
                assert_eq!(args.lang.as_deref(), Some("fr"));
                assert_eq!(args.args, vec!["Ada", "Bob"]);
            }
            other => panic!("expected render, got {other:?}"),
        }
    }

    #[test]
    fn test_coverage_languages_are_comma_separated() {
        let cli =
            Cli::try_parse_from(["lexicon", "coverage", "lang", "--lang", "de,fr"]).unwrap();
        match cli.command {
            Commands::Coverage(args) => assert_eq!(args.lang, vec!["de", "fr"]),
            other => panic!("expected coverage, got {other:?}"),
        }
    }
}
