use crate::io::error::Error;
use crate::model::element::Element;
use crate::model::template::{TemplateAtom, UnitTemplate};
use std::io::BufRead;

const FORMAT: &str = "MOL2";

/// Reads the atom block of a mol2 template into a [`UnitTemplate`].
///
/// Only the section between `@<TRIPOS>ATOM` and `@<TRIPOS>BOND` is consumed.
/// Each atom line with at least six whitespace-separated fields contributes
/// one template atom: field 2 is the canonical name and field 6 is the GAFF
/// atom type the element is derived from. Shorter lines inside the block are
/// skipped.
pub fn read<R: BufRead>(reader: R) -> Result<UnitTemplate, Error> {
    let mut atoms: Vec<TemplateAtom> = Vec::new();
    let mut reading_atoms = false;

    for line_res in reader.lines() {
        let line = line_res.map_err(|e| Error::from_io(e, None))?;

        if line.starts_with("@<TRIPOS>ATOM") {
            reading_atoms = true;
            continue;
        }
        if line.starts_with("@<TRIPOS>BOND") {
            break;
        }
        if !reading_atoms {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 6 {
            continue;
        }

        let name = fields[1];
        let element = Element::from_gaff_type(fields[5]);
        atoms.push(TemplateAtom::new(name, element));
    }

    if atoms.is_empty() {
        return Err(Error::parse(
            FORMAT,
            None,
            0,
            "Missing or empty @<TRIPOS>ATOM section",
        ));
    }

    Ok(UnitTemplate::new(atoms))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
@<TRIPOS>MOLECULE
center
6 5 1 0 0
SMALL
bcc

@<TRIPOS>ATOM
      1 C1          -0.3812    1.0241    0.1023 c3         1 MOL     -0.093400
      2 C2           1.0921    0.8733   -0.2214 cc         1 MOL     -0.051200
      3 O1           1.7433   -0.2011    0.3312 os         1 MOL     -0.330700
      4 CL1          2.5521    1.9832   -0.9943 cl         1 MOL     -0.101800
      5 H1          -0.8933    0.1021    0.4121 hc         1 MOL      0.052100
      6 NA1          3.0123   -1.2044    0.0021 na         1 MOL      0.210000
@<TRIPOS>BOND
     1    1    2 1
     2    2    3 1
";

    #[test]
    fn reads_atom_block_in_order() {
        let template = read(SAMPLE.as_bytes()).expect("template parses");
        assert_eq!(template.atom_count(), 6);

        let names: Vec<&str> = template.atoms().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["C1", "C2", "O1", "CL1", "H1", "NA1"]);

        let elements: Vec<&str> = template
            .atoms()
            .iter()
            .map(|a| a.element.symbol())
            .collect();
        assert_eq!(elements, ["C", "C", "O", "Cl", "H", "Na"]);
    }

    #[test]
    fn bond_section_terminates_the_scan() {
        let with_trailing_atoms = format!(
            "{SAMPLE}@<TRIPOS>ATOM\n      7 X1 0.0 0.0 0.0 c3 1 MOL 0.0\n"
        );
        let template = read(with_trailing_atoms.as_bytes()).expect("template parses");
        assert_eq!(template.atom_count(), 6);
    }

    #[test]
    fn short_lines_inside_the_block_are_skipped() {
        let input = "\
@<TRIPOS>ATOM
      1 C1          -0.3812    1.0241    0.1023 c3         1 MOL     -0.093400
incomplete line
      2 O1           1.7433   -0.2011    0.3312 os         1 MOL     -0.330700
";
        let template = read(input.as_bytes()).expect("template parses");
        assert_eq!(template.atom_count(), 2);
    }

    #[test]
    fn lines_outside_the_block_are_ignored() {
        let input = "\
@<TRIPOS>MOLECULE
center
      9 ZZ 0.0 0.0 0.0 zz 1 MOL 0.0
@<TRIPOS>ATOM
      1 C1          -0.3812    1.0241    0.1023 c3         1 MOL     -0.093400
";
        let template = read(input.as_bytes()).expect("template parses");
        assert_eq!(template.atom_count(), 1);
        assert_eq!(template.get(0).unwrap().name, "C1");
    }

    #[test]
    fn empty_atom_block_is_a_parse_error() {
        let err = read("@<TRIPOS>MOLECULE\ncenter\n".as_bytes()).expect_err("no atoms");
        match err {
            Error::Parse {
                format, details, ..
            } => {
                assert_eq!(format, "MOL2");
                assert!(details.contains("@<TRIPOS>ATOM"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
