use crate::io::error::Error;
use crate::model::record::{Document, RawAtom};
use std::io::BufRead;

/// Record-type keywords that mark a structural line.
const ATOM_PREFIXES: [&str; 2] = ["ATOM", "HETATM"];

/// Metadata keywords whose lines are preserved verbatim ahead of the atoms.
const HEADER_PREFIXES: [&str; 6] = ["CRYST1", "REMARK", "COMPND", "HEADER", "TITLE", "AUTHOR"];

/// Splits a structure file into header lines and structural records.
///
/// Lines are classified purely by prefix; everything that is neither a
/// structural record nor a known metadata line (`TER`, `CONECT`, `END`, ...)
/// is dropped. Structural records keep their text verbatim and receive
/// 1-based ordinals in stream order, which is the line coordinate all
/// downstream errors report.
pub fn read<R: BufRead>(reader: R) -> Result<Document, Error> {
    let mut document = Document::default();

    for line_res in reader.lines() {
        let line = line_res.map_err(|e| Error::from_io(e, None))?;

        if ATOM_PREFIXES.iter().any(|p| line.starts_with(p)) {
            let ordinal = document.atoms.len() + 1;
            document.atoms.push(RawAtom::new(line, ordinal));
        } else if HEADER_PREFIXES.iter().any(|p| line.starts_with(p)) {
            document.headers.push(line);
        }
    }

    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = "\
HEADER    SOLVATED BOX
REMARK    generated for testing
CRYST1   40.000   40.000   40.000  90.00  90.00  90.00 P 1           1
ATOM      1  C1  MOL     1       1.000   2.000   3.000  1.00  0.00
TER
HETATM    2 Cl-  Cl-     2       4.000   5.000   6.000  1.00  0.00
CONECT    1    2
END
";

    #[test]
    fn classifies_structural_and_header_lines() {
        let doc = read(INPUT.as_bytes()).expect("document parses");

        assert_eq!(doc.headers.len(), 3);
        assert!(doc.headers[0].starts_with("HEADER"));
        assert!(doc.headers[1].starts_with("REMARK"));
        assert!(doc.headers[2].starts_with("CRYST1"));

        assert_eq!(doc.atom_count(), 2);
        assert_eq!(doc.atoms[0].name(), "C1");
        assert_eq!(doc.atoms[1].name(), "Cl-");
    }

    #[test]
    fn ordinals_count_structural_records_only() {
        let doc = read(INPUT.as_bytes()).expect("document parses");
        assert_eq!(doc.atoms[0].line_number(), 1);
        assert_eq!(doc.atoms[1].line_number(), 2);
    }

    #[test]
    fn headers_are_kept_verbatim_in_order() {
        let doc = read(INPUT.as_bytes()).expect("document parses");
        assert_eq!(doc.headers[1], "REMARK    generated for testing");
    }

    #[test]
    fn unknown_lines_are_dropped() {
        let doc = read("TER\nEND\nMASTER        0\nfoo\n".as_bytes()).expect("document parses");
        assert!(doc.headers.is_empty());
        assert_eq!(doc.atom_count(), 0);
    }

    #[test]
    fn empty_input_yields_empty_document() {
        let doc = read("".as_bytes()).expect("document parses");
        assert_eq!(doc, Document::default());
    }
}
