use clap::Parser;
use dmgbg::cli::{Cli, Commands};
use dmgbg::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        None => dmgbg::cli::build::run(cli.build)?,
        Some(Commands::Build(args)) => dmgbg::cli::build::run(args)?,
        Some(Commands::Init(args)) => dmgbg::cli::init::run(args, &printer)?,
        Some(Commands::Fonts(args)) => dmgbg::cli::fonts::run(args, &printer)?,
        Some(Commands::Completions(args)) => dmgbg::cli::completions::run(args)?,
    }

    Ok(())
}
