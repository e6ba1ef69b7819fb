use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Args;
use prettytable::{Table, format, row};

use oligoprep::ops::detect;

use crate::commands::{IoParameters, load_document, load_template, run_with_spinner};

/// Report-only command that prints the detected composition.
#[derive(Debug, Default, Args)]
pub struct DetectArgs {}

pub fn run(params: &IoParameters, _args: &DetectArgs) -> Result<()> {
    let template = load_template(params)?;
    let document = load_document(params)?;

    let counts = run_with_spinner("Detecting composition", || {
        Ok(detect(&document.atoms, template.atom_count()))
    })?;

    let mut stderr = io::stderr().lock();

    print_boxed_label(&mut stderr, "Detected Composition")?;
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table.set_titles(row!["Segment", "Molecules", "Atoms"]);
    table.add_row(row![
        "Repeated unit",
        counts.units,
        counts.units * template.atom_count()
    ]);
    table.add_row(row!["Ion", counts.ions, counts.ions]);
    table.add_row(row!["Water", counts.waters, counts.waters * 3]);
    table
        .print(&mut stderr)
        .context("Failed to render composition table")?;
    writeln!(&mut stderr)?;

    let expected = counts.expected_atoms(template.atom_count());
    let residual = document.atom_count().saturating_sub(expected);
    writeln!(
        &mut stderr,
        "Template atoms per unit: {}",
        template.atom_count()
    )?;
    writeln!(
        &mut stderr,
        "Structural records: {} ({} unclassified)",
        document.atom_count(),
        residual
    )?;
    if counts.is_empty() {
        writeln!(
            &mut stderr,
            "warning: nothing recognized; processing would need manual --units/--ions/--waters counts"
        )?;
    }

    Ok(())
}

fn print_boxed_label<W: Write>(writer: &mut W, title: &str) -> io::Result<()> {
    let inner = format!(" {title} ");
    let width = inner.chars().count();
    writeln!(writer, "╭{}╮", "─".repeat(width))?;
    writeln!(writer, "│{}│", inner)?;
    writeln!(writer, "╰{}╯", "─".repeat(width))?;
    Ok(())
}
