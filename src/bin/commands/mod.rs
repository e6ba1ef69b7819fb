use std::fs::File;
use std::io::{self as stdio, BufReader};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};
use indicatif::{ProgressBar, ProgressStyle};
use is_terminal::IsTerminal;

use oligoprep::io::{read_mol2_template, read_pdb_document};
use oligoprep::{Document, UnitTemplate};

pub mod detect;
pub mod process;

/// IO parameters shared by every subcommand.
#[derive(Debug, Clone, Default)]
pub struct IoParameters {
    pub input: Option<PathBuf>,
    pub template: Option<PathBuf>,
}

/// Loads the mol2 unit template from the configured path.
pub fn load_template(params: &IoParameters) -> Result<UnitTemplate> {
    let path = params.template.as_ref().ok_or_else(|| {
        anyhow!("No -t/--template provided. A mol2 template describing one repeated unit is required.")
    })?;
    let file = File::open(path)
        .with_context(|| format!("Failed to open template file {}", path.display()))?;
    read_mol2_template(BufReader::new(file))
        .with_context(|| format!("Failed to parse MOL2 template from {}", path.display()))
}

/// Loads the structure document from the configured input source.
pub fn load_document(params: &IoParameters) -> Result<Document> {
    if let Some(path) = &params.input {
        let file = File::open(path)
            .with_context(|| format!("Failed to open input file {}", path.display()))?;
        read_pdb_document(BufReader::new(file))
            .with_context(|| format!("Failed to read structure from {}", path.display()))
    } else {
        let stdin = stdio::stdin();
        if stdin.is_terminal() {
            bail!(
                "No --input provided and stdin is a TTY. Provide -i/--input or pipe a structure into oligoprep."
            );
        }
        read_pdb_document(BufReader::new(stdin.lock()))
            .context("Failed to read structure from stdin")
    }
}

/// Wraps long-running operations with a spinner rendered to stderr.
pub fn run_with_spinner<T, F>(message: &str, work: F) -> Result<T>
where
    F: FnOnce() -> Result<T>,
{
    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(style);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message(message.to_string());

    let result = work();

    match &result {
        Ok(_) => spinner.finish_with_message(format!("{message} ✓")),
        Err(_) => spinner.abandon_with_message(format!("{message} ✗")),
    }

    result
}
