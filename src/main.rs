use crate::commands::{Cli, Commands};
use crate::cue::{build_cue_file, dump_cue_file};
use anyhow::Result;
use clap::Parser;

mod commands;
mod cue;

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build(cmd) => build_cue_file(&cmd)?,
        Commands::Dump(cmd) => dump_cue_file(&cmd)?,
    }

    Ok(())
}
