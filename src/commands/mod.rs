use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI for compiling YAML show descriptions to binary .cue files and
/// dumping them back to text.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Build(BuildCommand),
    Dump(DumpCommand),
}

/// Compile a YAML show description to a binary .cue file
#[derive(Parser, Debug, Clone)]
pub struct BuildCommand {
    /// Input YAML file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output .cue file path, defaults to the input path with a .cue extension
    #[arg(value_name = "OUTPUT", long, short = 'o')]
    pub output: Option<PathBuf>,
}

/// Dump a binary .cue file to human-readable text
#[derive(Parser, Debug, Clone)]
pub struct DumpCommand {
    /// Input .cue file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
}
