use super::element::Element;
use crate::io::Error;
use nalgebra::Point3;

pub type Point = Point3<f64>;

/// One structural record from the input file, kept verbatim.
///
/// Records are never mutated; every field of interest is read on demand
/// through fixed-column accessors. `line_number` is the 1-based ordinal of
/// the record among the structural records of its document (not the file
/// line number), which is the coordinate the error taxonomy reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAtom {
    line: String,
    line_number: usize,
}

impl RawAtom {
    pub fn new(line: impl Into<String>, line_number: usize) -> Self {
        Self {
            line: line.into(),
            line_number,
        }
    }

    /// 1-based position of this record among the structural records.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// The record text exactly as read.
    pub fn raw(&self) -> &str {
        &self.line
    }

    /// Atom name field, columns 12..16.
    pub fn name(&self) -> &str {
        columns(&self.line, 12, 16).trim()
    }

    /// Residue name field, columns 17..20.
    pub fn res_name(&self) -> &str {
        columns(&self.line, 17, 20).trim()
    }

    /// Classifies the record's element: the explicit element columns 76..78
    /// when present, the atom-name heuristics otherwise.
    pub fn element(&self) -> Element {
        let explicit = columns(&self.line, 76, 78).trim();
        if explicit.is_empty() {
            Element::from_atom_name(self.name())
        } else {
            Element::from_symbol(explicit)
        }
    }

    /// Parses the three coordinate fields (columns 30..38, 38..46, 46..54).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] carrying this record's line number when any
    /// field is not a valid number.
    pub fn coords(&self) -> Result<Point, Error> {
        let x = self.coord_field(30, 38, "X")?;
        let y = self.coord_field(38, 46, "Y")?;
        let z = self.coord_field(46, 54, "Z")?;
        Ok(Point::new(x, y, z))
    }

    fn coord_field(&self, start: usize, end: usize, axis: &str) -> Result<f64, Error> {
        columns(&self.line, start, end)
            .trim()
            .parse::<f64>()
            .map_err(|_| {
                Error::parse(
                    "PDB",
                    None,
                    self.line_number,
                    format!("Invalid {axis} coordinate"),
                )
            })
    }
}

/// A structure file split into verbatim header lines and structural records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// Metadata lines, in original order, copied verbatim to output.
    pub headers: Vec<String>,
    /// Structural records in stream order.
    pub atoms: Vec<RawAtom>,
}

impl Document {
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }
}

/// Column access that tolerates short lines: out-of-range columns read as
/// empty instead of panicking.
fn columns(line: &str, start: usize, end: usize) -> &str {
    let end = end.min(line.len());
    if start >= end {
        return "";
    }
    line.get(start..end).unwrap_or("")
}
