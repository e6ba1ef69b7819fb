//! Three-phase reconstruction of a structure document.
//!
//! The rebuilder walks the structural records in order and rewrites them
//! with canonical names, gapless serials, and sequential residue numbers.
//! Content classes appear in a fixed order (repeated units, then ions, then
//! waters) and the machine only ever advances through them; the first record
//! that disagrees with the expected element pattern aborts the whole run.

use std::io::Write;

use smol_str::SmolStr;

use crate::io::{write_atom, write_end, write_extract_atom, write_header, write_ter};
use crate::model::element::Element;
use crate::model::record::{Document, Point, RawAtom};
use crate::model::template::UnitTemplate;
use crate::ops::detect::Detection;
use crate::ops::error::Error;

const UNIT_RES_NAME: &str = "MOL";
const ION_RES_NAME: &str = "Cl-";
const ION_ATOM_NAME: &str = "Cl-";
const ION_ELEMENT: &str = "Cl";
const WATER_RES_NAME: &str = "WAT";
const WATER_ATOM_NAMES: [&str; 3] = ["O", "H1", "H2"];
const WATER_ELEMENTS: [&str; 3] = ["O", "H", "H"];

/// Reconstruction phases in stream order. The machine never moves backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Unit,
    Ion,
    Solvent,
    Done,
}

impl Phase {
    fn initial(counts: &Detection) -> Self {
        if counts.units > 0 {
            Phase::Unit
        } else {
            Phase::after_units(counts)
        }
    }

    fn after_units(counts: &Detection) -> Self {
        if counts.ions > 0 {
            Phase::Ion
        } else {
            Phase::after_ions(counts)
        }
    }

    fn after_ions(counts: &Detection) -> Self {
        if counts.waters > 0 {
            Phase::Solvent
        } else {
            Phase::Done
        }
    }
}

/// Outcome counters from one reconstruction pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RebuildSummary {
    /// Residues closed and written to the main output.
    pub residues: usize,
    /// Atom records written to the main output.
    pub atoms: usize,
    /// Input records left unconsumed after the machine reached [`Phase::Done`].
    pub leftover: usize,
    /// Records of an incomplete trailing residue that were discarded.
    pub discarded: usize,
}

struct PendingAtom {
    serial: usize,
    name: SmolStr,
    pos: Point,
}

/// The reconstruction cursor: current phase, position within the current
/// group, global counters, and the buffer of the residue being assembled.
///
/// Residues are written only when they close, so a failure or a truncated
/// stream never leaves a half residue in the output. A fresh `Rebuilder` is
/// built per run; it holds no state beyond the pass.
pub struct Rebuilder<'a> {
    template: &'a UnitTemplate,
    counts: Detection,
    phase: Phase,
    mol_index: usize,
    atom_in_mol: usize,
    serial: usize,
    residue: usize,
    written: usize,
    pending: Vec<PendingAtom>,
}

impl<'a> Rebuilder<'a> {
    pub fn new(template: &'a UnitTemplate, counts: Detection) -> Self {
        Self {
            template,
            counts,
            phase: Phase::initial(&counts),
            mol_index: 0,
            atom_in_mol: 0,
            serial: 0,
            residue: 0,
            written: 0,
            pending: Vec::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Feeds one record through the machine, writing any residue it closes
    /// to `out` and mirroring first-unit records into `extract`.
    ///
    /// Returns `false` without consuming the record once the machine is done.
    ///
    /// # Errors
    ///
    /// Fails on unparsable coordinates and on any element disagreement with
    /// the expected pattern of the current phase; both abort the run.
    pub fn step<W: Write, X: Write>(
        &mut self,
        atom: &RawAtom,
        out: &mut W,
        extract: &mut X,
    ) -> Result<bool, Error> {
        if self.phase == Phase::Done {
            return Ok(false);
        }

        let pos = atom.coords()?;
        let element = atom.element();

        match self.phase {
            Phase::Unit => self.step_unit(atom, element, pos, out, extract)?,
            Phase::Ion => self.step_ion(atom, element, pos, out)?,
            Phase::Solvent => self.step_solvent(atom, element, pos, out)?,
            Phase::Done => unreachable!("done phase returns before classification"),
        }
        Ok(true)
    }

    fn step_unit<W: Write, X: Write>(
        &mut self,
        atom: &RawAtom,
        element: Element,
        pos: Point,
        out: &mut W,
        extract: &mut X,
    ) -> Result<(), Error> {
        let expected = self
            .template
            .get(self.atom_in_mol)
            .expect("unit cursor stays within the template");

        if element.symbol() != expected.element.symbol() {
            return Err(Error::unit_mismatch(
                atom.line_number(),
                expected.name.as_str(),
                expected.element.symbol(),
                element.symbol(),
            ));
        }

        self.serial += 1;
        if self.mol_index == 0 {
            // The first unit doubles as the extraction artifact, with local
            // 1-based numbering.
            write_extract_atom(extract, self.atom_in_mol + 1, expected.name.as_str(), &pos)?;
        }

        self.pending.push(PendingAtom {
            serial: self.serial,
            name: expected.name.clone(),
            pos,
        });
        self.atom_in_mol += 1;

        if self.atom_in_mol == self.template.atom_count() {
            self.close_residue(UNIT_RES_NAME, out)?;
            self.atom_in_mol = 0;
            self.mol_index += 1;
            if self.mol_index == self.counts.units {
                self.phase = Phase::after_units(&self.counts);
                self.mol_index = 0;
            }
        }
        Ok(())
    }

    fn step_ion<W: Write>(
        &mut self,
        atom: &RawAtom,
        element: Element,
        pos: Point,
        out: &mut W,
    ) -> Result<(), Error> {
        if element.symbol() != ION_ELEMENT {
            return Err(Error::ion_mismatch(atom.line_number(), element.symbol()));
        }

        self.serial += 1;
        self.residue += 1;
        write_atom(out, self.serial, ION_ATOM_NAME, ION_RES_NAME, self.residue, &pos)?;
        write_ter(out)?;
        self.written += 1;

        self.mol_index += 1;
        if self.mol_index == self.counts.ions {
            self.phase = Phase::after_ions(&self.counts);
            self.mol_index = 0;
            self.atom_in_mol = 0;
        }
        Ok(())
    }

    fn step_solvent<W: Write>(
        &mut self,
        atom: &RawAtom,
        element: Element,
        pos: Point,
        out: &mut W,
    ) -> Result<(), Error> {
        let expected = WATER_ELEMENTS[self.atom_in_mol];
        if element.symbol() != expected {
            return Err(Error::solvent_mismatch(
                atom.line_number(),
                expected,
                element.symbol(),
            ));
        }

        self.serial += 1;
        self.pending.push(PendingAtom {
            serial: self.serial,
            name: SmolStr::new(WATER_ATOM_NAMES[self.atom_in_mol]),
            pos,
        });
        self.atom_in_mol += 1;

        if self.atom_in_mol == WATER_ELEMENTS.len() {
            self.close_residue(WATER_RES_NAME, out)?;
            self.atom_in_mol = 0;
            self.mol_index += 1;
            if self.mol_index == self.counts.waters {
                self.phase = Phase::Done;
            }
        }
        Ok(())
    }

    fn close_residue<W: Write>(&mut self, res_name: &str, out: &mut W) -> Result<(), Error> {
        self.residue += 1;
        for atom in self.pending.drain(..) {
            write_atom(out, atom.serial, &atom.name, res_name, self.residue, &atom.pos)?;
            self.written += 1;
        }
        write_ter(out)?;
        Ok(())
    }

    fn finish(self, leftover: usize) -> RebuildSummary {
        RebuildSummary {
            residues: self.residue,
            atoms: self.written,
            leftover,
            discarded: self.pending.len(),
        }
    }
}

/// Runs the full reconstruction pass over a document.
///
/// Header lines are copied verbatim first, then one normalized record per
/// consumed input record with a `TER` after every closed residue, and a
/// final `END` marker. The first repeated unit is simultaneously written to
/// `extract` with local 1-based numbering; nothing further touches that
/// writer once the unit completes.
///
/// Records beyond the detected composition are left unconsumed and counted
/// in the summary; an incomplete trailing residue is discarded rather than
/// written. Both conditions are warnings for the caller, not errors.
pub fn rebuild<W: Write, X: Write>(
    doc: &Document,
    template: &UnitTemplate,
    counts: Detection,
    out: &mut W,
    extract: &mut X,
) -> Result<RebuildSummary, Error> {
    for line in &doc.headers {
        write_header(out, line)?;
    }

    let mut machine = Rebuilder::new(template, counts);
    let mut consumed = 0;
    for atom in &doc.atoms {
        if !machine.step(atom, out, extract)? {
            break;
        }
        consumed += 1;
    }

    write_end(out)?;
    Ok(machine.finish(doc.atoms.len() - consumed))
}
