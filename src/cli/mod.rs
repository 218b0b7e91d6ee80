pub mod completions;
pub mod eval;
pub mod init;
pub mod suggest;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// tint - LESS/Sass colour function suggestions
#[derive(Parser, Debug)]
#[command(name = "tint")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: ./tint.yaml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Only print results and warnings
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Suggest expressions turning one colour into another
    Suggest(suggest::SuggestArgs),

    /// Apply an expression to an input colour
    Eval(eval::EvalArgs),

    /// Write a default tint.yaml
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
