//! Eval command implementation.

use std::path::Path;

use clap::Args;

use crate::config::Config;
use crate::dialect::Dialect;
use crate::error::{Result, TintError};
use crate::output::Printer;
use crate::types::{evaluate, Colour};

/// Apply an expression to an input colour
#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Expression to evaluate, e.g. "lighten(@input, 20%)"
    pub expression: String,

    /// Colour bound to the input variable
    #[arg(long, short)]
    pub input: String,

    /// Preprocessor dialect: less or sass
    #[arg(long, short)]
    pub dialect: Option<String>,
}

pub fn run(args: EvalArgs, config_path: Option<&Path>, printer: &Printer) -> Result<()> {
    let (config, _) = Config::discover(config_path, &std::env::current_dir()?)?;
    let dialect = Dialect::resolve(args.dialect.as_deref())?.unwrap_or(config.dialect);

    let input = Colour::parse(&args.input).ok_or_else(|| TintError::InvalidInput {
        message: format!("input is not an RGB colour: {}", args.input),
    })?;

    printer.status(
        "Evaluating",
        &format!("{} {}", args.expression, printer.dim(&format!("({} = {})", dialect.spell("input"), input))),
    );

    println!("{}", evaluate(&args.expression, input, dialect)?);
    Ok(())
}
