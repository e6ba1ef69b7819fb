//! # oligoprep
//!
//! **oligoprep** is a pure-Rust preparation tool for solvated oligomer boxes: it ingests a structure file whose atom records carry no residue segmentation, infers how many repeated units, counter-ions, and waters the box contains, rewrites the file with canonical atom names, gapless numbering, and per-residue terminators, and extracts the first unit as a standalone template for downstream parameterization. Reconstruction is deterministic and fail-fast, so a structure that diverges from the expected pattern can never slip silently into a simulation pipeline.
//!
//! ## Features
//!
//! - **Composition auto-detection** – A single pass over the record stream infers unit, ion, and water counts from atom-name repetition, ion name sets, and O/H/H element signatures, with manual counts as an explicit fallback.
//! - **Template-driven naming** – A mol2 reference defines the canonical name and element of every unit atom; output names always come from the template, never from the input.
//! - **Strict three-phase reconstruction** – An explicit state machine walks units, ions, and waters in order, validates every element against the expected pattern, and aborts with the exact record location on the first disagreement.
//! - **Faithful fixed-column output** – Header lines pass through verbatim; records are re-rendered into the fixed-column layout with `TER`/`END` markers, plus a first-unit extraction artifact with local numbering.

mod model;

pub mod io;
pub mod ops;

pub use model::element::Element;
pub use model::record::{Document, Point, RawAtom};
pub use model::template::{TemplateAtom, UnitTemplate};
