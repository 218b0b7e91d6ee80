use clap::Parser;
use miette::Result;
use tint::cli::{Cli, Commands};
use tint::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new(cli.quiet);
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Suggest(args) => tint::cli::suggest::run(args, config, &printer)?,
        Commands::Eval(args) => tint::cli::eval::run(args, config, &printer)?,
        Commands::Init(args) => tint::cli::init::run(args, &printer)?,
        Commands::Completions(args) => tint::cli::completions::run(args)?,
    }

    Ok(())
}
