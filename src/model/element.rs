//! Element symbols and the heuristics that recover them from structure files.
//!
//! Elements are string-valued rather than a closed enum: the reconstruction
//! check is exact symbol equality between a template-derived guess and a
//! record-derived guess, and both fallback paths can produce symbols outside
//! any fixed table. Keeping the symbol as written (capitalized) preserves
//! that comparison without loss.

use smol_str::SmolStr;
use std::fmt;

/// GAFF atom-type prefixes that map to two-letter element symbols. Checked
/// before the single-letter fallback so types like `cl` and `br` do not
/// collapse to carbon and boron.
const GAFF_ELEMENT_PREFIXES: [(&str, &str); 5] = [
    ("cl", "Cl"),
    ("br", "Br"),
    ("na", "Na"),
    ("mg", "Mg"),
    ("fe", "Fe"),
];

/// Ordered name heuristics for records without an explicit element field.
/// Each entry pairs a predicate over the alphabetic-only atom name with the
/// symbol it yields; the first match wins, and the plain capitalized name is
/// the fallback after the list is exhausted.
const NAME_RULES: [(fn(&str) -> bool, &str); 3] = [
    (is_chlorine_name, "Cl"),
    (is_bromine_name, "Br"),
    (is_hydrogen_name, "H"),
];

fn is_chlorine_name(name: &str) -> bool {
    name.len() >= 2 && name[..2].eq_ignore_ascii_case("cl")
}

fn is_bromine_name(name: &str) -> bool {
    name.len() >= 2 && name[..2].eq_ignore_ascii_case("br")
}

fn is_hydrogen_name(name: &str) -> bool {
    name.starts_with('H')
}

/// A chemical element symbol in canonical capitalization (`Cl`, `O`, `Fe`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Element(SmolStr);

impl Element {
    /// Builds an element from an explicit symbol field, such as the element
    /// columns of a structural record. The input is trimmed and capitalized.
    pub fn from_symbol(raw: &str) -> Self {
        Element(capitalize(raw.trim()))
    }

    /// Derives an element from a GAFF atom type such as `c3`, `ss`, or `cl`.
    ///
    /// Two-letter prefixes from [`GAFF_ELEMENT_PREFIXES`] take priority;
    /// otherwise the first character of the type, capitalized, is the guess.
    pub fn from_gaff_type(raw: &str) -> Self {
        let lowered = raw.trim().to_ascii_lowercase();
        for (prefix, symbol) in GAFF_ELEMENT_PREFIXES {
            if lowered.starts_with(prefix) {
                return Element(SmolStr::new(symbol));
            }
        }

        match lowered.chars().next() {
            Some(first) => Element(SmolStr::new(first.to_ascii_uppercase().to_string())),
            None => Element(SmolStr::default()),
        }
    }

    /// Derives an element from an atom-name field when no element columns are
    /// present. Non-alphabetic characters are stripped before the
    /// [`NAME_RULES`] run; hydrogens and multi-letter halogens need the
    /// special cases because plain capitalization misreads them.
    pub fn from_atom_name(name: &str) -> Self {
        let stripped: String = name.chars().filter(|c| c.is_ascii_alphabetic()).collect();
        for (matches, symbol) in NAME_RULES {
            if matches(&stripped) {
                return Element(SmolStr::new(symbol));
            }
        }
        Element(capitalize(&stripped))
    }

    /// The capitalized symbol string.
    pub fn symbol(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// First character upper-cased, remainder lower-cased.
fn capitalize(s: &str) -> SmolStr {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(s.len());
            out.extend(first.to_uppercase());
            for c in chars {
                out.extend(c.to_lowercase());
            }
            SmolStr::new(out)
        }
        None => SmolStr::default(),
    }
}
