use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "element mismatch in repeated unit at atom line {line_number}: expected {expected_name} ({expected_element}), found {found}"
    )]
    UnitMismatch {
        line_number: usize,
        expected_name: String,
        expected_element: String,
        found: String,
    },

    #[error("ion mismatch at atom line {line_number}: expected Cl, found {found}")]
    IonMismatch { line_number: usize, found: String },

    #[error(
        "water mismatch at atom line {line_number}: expected {expected}, found {found} (possible missing atom in the previous water)"
    )]
    SolventMismatch {
        line_number: usize,
        expected: String,
        found: String,
    },

    #[error(transparent)]
    Io(#[from] crate::io::Error),
}

impl Error {
    pub fn unit_mismatch(
        line_number: usize,
        expected_name: impl Into<String>,
        expected_element: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::UnitMismatch {
            line_number,
            expected_name: expected_name.into(),
            expected_element: expected_element.into(),
            found: found.into(),
        }
    }

    pub fn ion_mismatch(line_number: usize, found: impl Into<String>) -> Self {
        Self::IonMismatch {
            line_number,
            found: found.into(),
        }
    }

    pub fn solvent_mismatch(
        line_number: usize,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::SolventMismatch {
            line_number,
            expected: expected.into(),
            found: found.into(),
        }
    }
}
