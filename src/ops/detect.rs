use crate::model::record::RawAtom;

/// Residue or atom names that mark a monatomic counter-ion record.
const ION_NAMES: [&str; 8] = ["CL-", "CL", "NA", "NA+", "K", "K+", "MG", "MG2+"];

/// Residue names used by common water models; seeing one ends the ion scan.
const WATER_RES_NAMES: [&str; 5] = ["WAT", "HOH", "SOL", "TIP3", "TP3"];

/// Oxygen atom names that betray a water record under a foreign residue name.
const WATER_ATOM_NAMES: [&str; 3] = ["O", "OW", "OH2"];

/// Element sequence of one rigid three-site water.
const WATER_ELEMENTS: [&str; 3] = ["O", "H", "H"];

/// Composition inferred from the record stream: how many repeated units,
/// single-atom ions, and three-site waters the reconstruction should expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Detection {
    pub units: usize,
    pub ions: usize,
    pub waters: usize,
}

impl Detection {
    pub fn new(units: usize, ions: usize, waters: usize) -> Self {
        Self {
            units,
            ions,
            waters,
        }
    }

    /// True when nothing was recognized. Not an error by itself: callers
    /// substitute manually configured counts or refuse to proceed.
    pub fn is_empty(&self) -> bool {
        self.units == 0 && self.ions == 0 && self.waters == 0
    }

    /// Number of records a full reconstruction of this composition consumes.
    pub fn expected_atoms(&self, atoms_per_unit: usize) -> usize {
        self.units * atoms_per_unit + self.ions + WATER_ELEMENTS.len() * self.waters
    }
}

/// Infers the composition of a record stream in one pass of three scans over
/// disjoint suffixes: repeated units first, then ions, then waters.
///
/// The unit scan takes the atom-name sequence of the first `atoms_per_unit`
/// records as the reference pattern and counts consecutive exact repetitions
/// of it (the reference group included). The ion scan counts records whose
/// residue or atom name is in the ion set; it ends silently at the first
/// water-signature record or at the first record matching neither set. The
/// water scan counts 3-record groups whose classified elements are exactly
/// O, H, H.
///
/// Streams shorter than one unit (or an `atoms_per_unit` of zero) detect as
/// all-zero.
pub fn detect(atoms: &[RawAtom], atoms_per_unit: usize) -> Detection {
    if atoms_per_unit == 0 || atoms.len() < atoms_per_unit {
        return Detection::default();
    }

    let pattern: Vec<&str> = atoms[..atoms_per_unit].iter().map(|a| a.name()).collect();

    let mut cursor = 0;
    let mut units = 0;
    while cursor + atoms_per_unit <= atoms.len() {
        let group = &atoms[cursor..cursor + atoms_per_unit];
        let matches = group
            .iter()
            .zip(&pattern)
            .all(|(atom, name)| atom.name() == *name);
        if !matches {
            break;
        }
        units += 1;
        cursor += atoms_per_unit;
    }

    let mut ions = 0;
    while cursor < atoms.len() {
        let atom = &atoms[cursor];
        let res = atom.res_name().to_ascii_uppercase();
        let name = atom.name().to_ascii_uppercase();

        if ION_NAMES.contains(&res.as_str()) || ION_NAMES.contains(&name.as_str()) {
            ions += 1;
            cursor += 1;
        } else if WATER_RES_NAMES.contains(&res.as_str())
            || WATER_ATOM_NAMES.contains(&name.as_str())
        {
            // Start of the solvent block.
            break;
        } else {
            // Unknown content; stop the scan without error.
            break;
        }
    }

    let mut waters = 0;
    while cursor + WATER_ELEMENTS.len() <= atoms.len() {
        let group = &atoms[cursor..cursor + WATER_ELEMENTS.len()];
        let matches = group
            .iter()
            .zip(WATER_ELEMENTS)
            .all(|(atom, expected)| atom.element().symbol() == expected);
        if !matches {
            break;
        }
        waters += 1;
        cursor += WATER_ELEMENTS.len();
    }

    Detection::new(units, ions, waters)
}
