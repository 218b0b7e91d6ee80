//! Suggest command implementation.
//!
//! Ranks candidate expressions for a source/target pair and prints them,
//! best first, to stdout.

use std::path::Path;

use clap::Args;

use crate::config::{Config, OutputFormat};
use crate::dialect::Dialect;
use crate::error::{Result, TintError};
use crate::generator::GENERATORS;
use crate::output::{display_path, plural, Printer};
use crate::rank::Candidate;
use crate::suggest::suggest_in;

/// Suggest expressions turning one colour into another
#[derive(Args, Debug)]
pub struct SuggestArgs {
    /// Colour to start from (hex with or without `#`, or a CSS name)
    pub from: String,

    /// Colour to reach
    pub to: String,

    /// Preprocessor dialect: less or sass
    #[arg(long, short)]
    pub dialect: Option<String>,

    /// Maximum number of candidates to print
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Print candidates as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: SuggestArgs, config_path: Option<&Path>, printer: &Printer) -> Result<()> {
    let (config, loaded_from) = Config::discover(config_path, &std::env::current_dir()?)?;
    if let Some(path) = &loaded_from {
        printer.status("Config", &display_path(path));
    }

    let dialect = Dialect::resolve(args.dialect.as_deref())?.unwrap_or(config.dialect);
    let limit = args.limit.or(config.limit);
    let format = if args.json {
        OutputFormat::Json
    } else {
        config.format
    };

    printer.status(
        "Suggesting",
        &format!("{} -> {} {}", args.from, args.to, printer.dim(&format!("({})", dialect))),
    );

    let mut candidates = suggest_in(&args.from, &args.to, dialect)?;
    let found = candidates.len();
    if let Some(limit) = limit {
        candidates.truncate(limit);
    }

    if found == 0 {
        printer.warning("Unmatched", "no expression reaches the target");
    } else {
        printer.status(
            "Ranked",
            &format!(
                "{} {}",
                plural(found, "candidate", "candidates"),
                printer.dim(&format!("from {} generators", GENERATORS.len()))
            ),
        );
    }

    match format {
        OutputFormat::Json => println!("{}", to_json(&candidates)?),
        OutputFormat::Text => {
            for candidate in &candidates {
                println!("{}", format_line(candidate));
            }
        }
    }

    Ok(())
}

/// One text output line: the expression followed by its scores.
pub fn format_line(candidate: &Candidate) -> String {
    format!(
        "{}  // {} dE {:.4} complexity {}",
        candidate.expression, candidate.colour, candidate.difference, candidate.complexity
    )
}

fn to_json(candidates: &[Candidate]) -> Result<String> {
    serde_json::to_string_pretty(candidates).map_err(|e| TintError::Parse {
        message: format!("Failed to serialize candidates: {}", e),
        help: None,
    })
}
