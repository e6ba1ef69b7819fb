use super::element::Element;
use smol_str::SmolStr;
use std::fmt;

/// One atom of the reference unit: canonical name plus expected element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateAtom {
    pub name: SmolStr,
    pub element: Element,
}

impl TemplateAtom {
    pub fn new(name: &str, element: Element) -> Self {
        Self {
            name: SmolStr::new(name),
            element,
        }
    }
}

/// Ordered atom composition of one repeated unit.
///
/// Loaded once from the mol2 template and immutable afterwards. Detection
/// uses its length as the unit stride; reconstruction assigns its canonical
/// names and validates its elements position by position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitTemplate {
    atoms: Vec<TemplateAtom>,
}

impl UnitTemplate {
    pub fn new(atoms: Vec<TemplateAtom>) -> Self {
        Self { atoms }
    }

    /// Number of atoms in one repeated unit.
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn get(&self, index: usize) -> Option<&TemplateAtom> {
        self.atoms.get(index)
    }

    pub fn atoms(&self) -> &[TemplateAtom] {
        &self.atoms
    }
}

impl fmt::Display for UnitTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UnitTemplate {{ atoms: {} }}", self.atom_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> UnitTemplate {
        UnitTemplate::new(vec![
            TemplateAtom::new("C1", Element::from_gaff_type("c3")),
            TemplateAtom::new("O1", Element::from_gaff_type("os")),
            TemplateAtom::new("H1", Element::from_gaff_type("hc")),
        ])
    }

    #[test]
    fn atom_count_matches_input_order() {
        let template = sample();
        assert_eq!(template.atom_count(), 3);
        assert_eq!(template.get(0).unwrap().name, "C1");
        assert_eq!(template.get(1).unwrap().element.symbol(), "O");
        assert_eq!(template.get(2).unwrap().element.symbol(), "H");
        assert!(template.get(3).is_none());
    }

    #[test]
    fn atoms_exposes_full_slice() {
        let template = sample();
        let names: Vec<&str> = template.atoms().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["C1", "O1", "H1"]);
    }

    #[test]
    fn display_reports_size() {
        assert_eq!(format!("{}", sample()), "UnitTemplate { atoms: 3 }");
    }
}
