use std::fs::File;
use std::io::{self as stdio, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;

use oligoprep::ops::{Detection, RebuildSummary, detect, rebuild};

use crate::commands::{IoParameters, load_document, load_template, run_with_spinner};

/// Arguments controlling normalization and the extraction artifact.
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Output file path. When omitted, stdout is used.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
    /// Destination for the first-unit extraction artifact.
    #[arg(long, value_name = "FILE", default_value = "extracted_unit.pdb")]
    pub extract: PathBuf,
    /// Manual unit count, used only when auto-detection finds nothing.
    #[arg(long, value_name = "N")]
    pub units: Option<usize>,
    /// Manual ion count, used only when auto-detection finds nothing.
    #[arg(long, value_name = "N")]
    pub ions: Option<usize>,
    /// Manual water count, used only when auto-detection finds nothing.
    #[arg(long, value_name = "N")]
    pub waters: Option<usize>,
}

pub fn run(params: &IoParameters, args: &ProcessArgs) -> Result<()> {
    let template = load_template(params)?;
    let document = load_document(params)?;

    let detected = run_with_spinner("Detecting composition", || {
        Ok(detect(&document.atoms, template.atom_count()))
    })?;

    let counts = if detected.is_empty() {
        resolve_fallback(args)?
    } else {
        detected
    };

    eprintln!(
        "Composition: {} units x {} atoms, {} ions, {} waters",
        counts.units,
        template.atom_count(),
        counts.ions,
        counts.waters
    );

    let extract_file = File::create(&args.extract)
        .with_context(|| format!("Failed to create extraction file {}", args.extract.display()))?;
    let mut extract_writer = BufWriter::new(extract_file);

    let summary = match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            let summary = rebuild(
                &document,
                &template,
                counts,
                &mut writer,
                &mut extract_writer,
            )?;
            writer.flush().context("Failed to flush output writer")?;
            summary
        }
        None => {
            let stdout = stdio::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            let summary = rebuild(
                &document,
                &template,
                counts,
                &mut writer,
                &mut extract_writer,
            )?;
            writer.flush().context("Failed to flush stdout")?;
            summary
        }
    };
    extract_writer
        .flush()
        .context("Failed to flush extraction writer")?;

    report(&summary, args);
    Ok(())
}

fn resolve_fallback(args: &ProcessArgs) -> Result<Detection> {
    if args.units.is_none() && args.ions.is_none() && args.waters.is_none() {
        bail!(
            "Auto-detection found no units, ions, or waters. Supply manual counts via --units/--ions/--waters."
        );
    }
    eprintln!("warning: auto-detection found nothing; using manual counts");
    Ok(Detection::new(
        args.units.unwrap_or(0),
        args.ions.unwrap_or(0),
        args.waters.unwrap_or(0),
    ))
}

fn report(summary: &RebuildSummary, args: &ProcessArgs) {
    if summary.leftover > 0 {
        eprintln!(
            "warning: {} input records left unconsumed beyond the reconstructed composition",
            summary.leftover
        );
    }
    if summary.discarded > 0 {
        eprintln!(
            "warning: discarded an incomplete trailing residue ({} buffered records)",
            summary.discarded
        );
    }
    eprintln!(
        "Wrote {} residues ({} atoms); first unit extracted to {}",
        summary.residues,
        summary.atoms,
        args.extract.display()
    );
}
