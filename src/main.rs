use clap::Parser;
use miette::Result;
use xpak::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build(args) => xpak::cli::build::run(args)?,
        Commands::Clean(args) => xpak::cli::clean::run(args)?,
        Commands::Validate(args) => xpak::cli::validate::run(args)?,
    }

    Ok(())
}
