//! Core data types for raw structure records, unit templates, and element
//! classification.
//!
//! This module defines the foundational types of `oligoprep`. Raw records are
//! kept verbatim and interrogated through fixed-column accessors; the unit
//! template is the immutable reference composition every repeated unit must
//! reproduce. These types are produced by the I/O readers and consumed by the
//! detection and reconstruction operations.

pub mod element;
pub mod record;
pub mod template;
