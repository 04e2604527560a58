//! Required feature-name catalogs, one per scoring model.
//!
//! Names must match CSV column/row labels exactly (case-sensitive). The
//! composite catalog is partitioned into contiguous groups, one group per
//! sub-score formula.

use std::ops::Range;

/// Composite (E-strain) model: ECG, clinical chemistry and metabolite
/// variables, in the order the scorer consumes them.
pub const COMPOSITE: [&str; 9] = [
    "M0_LVESV_3D",
    "M0_LVED_3D",
    "M0_LA_tot_EmF",
    "M0_LA_strain_conduit",
    "GLYC",
    "Urea",
    "Arginine",
    "Met_MetSufoxide",
    "Kynurenine",
];

/// Sub-score groups inside [`COMPOSITE`].
pub const ECG_GROUP: Range<usize> = 0..4;
pub const CLINICAL_GROUP: Range<usize> = 4..6;
pub const METABOLITES_GROUP: Range<usize> = 6..9;

/// AF progression model.
pub const AF_PROGRESSION: [&str; 4] = ["Age", "LVEF", "Sex", "LAdiameter"];

/// Atrial cardiomyopathy (CMR) model.
pub const ATRIAL_CARDIOMYOPATHY: [&str; 3] = ["GEAT volume index", "LA PLS", "GEAT T1"];

/// Sludge / thrombus (LAA echo) model.
pub const SLUDGE_THROMBUS: [&str; 4] = [
    "LAA emptying flow velocity",
    "ES LAA area",
    "ES LAAV",
    "LAA morphology",
];
