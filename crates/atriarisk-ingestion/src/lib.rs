//! atriarisk-ingestion — CSV loading and table normalisation.
//!
//! Two stages:
//! - `reader`: byte-level concerns — encoding detection and delimiter
//!   trials — producing a `RawTable` of string cells.
//! - `normalise`: reconciles a `RawTable` against a model's required
//!   feature list in either patient orientation, yielding zero-filled
//!   per-patient feature vectors.

pub mod normalise;
pub mod reader;

pub use normalise::{normalise, Orientation, PatientVector};
pub use reader::{read_table, RawTable};
