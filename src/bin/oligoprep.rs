use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::IoParameters;
use commands::{detect, process};

#[derive(Parser, Debug)]
#[command(
    name = "oligoprep",
    about = "Normalizes solvated oligomer structure files: auto-detects composition, renumbers residues, and extracts the first unit for parameterization.",
    version,
    author,
    arg_required_else_help = true
)]
struct Cli {
    /// Structure input file path. When omitted, stdin is used.
    #[arg(short, long, value_name = "FILE", global = true)]
    input: Option<PathBuf>,
    /// mol2 template describing one repeated unit.
    #[arg(short, long, value_name = "FILE", global = true)]
    template: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rewrite the structure with canonical names and sequential numbering.
    Process(process::ProcessArgs),
    /// Report the detected composition without writing any output.
    Detect(detect::DetectArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let io_params = IoParameters {
        input: cli.input,
        template: cli.template,
    };

    match cli.command {
        Command::Process(args) => process::run(&io_params, &args),
        Command::Detect(args) => detect::run(&io_params, &args),
    }
}
