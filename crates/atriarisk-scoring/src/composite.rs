//! Combined (E-strain) score over a zero-filled nine-feature vector.
//!
//! The vector layout is `features::COMPOSITE`: four ECG values, two
//! clinical values, three metabolite values. A sub-score group is computed
//! only when every value in it is non-zero; a zero anywhere in the group
//! excludes the whole group from the sum and from the kind code — zero is
//! the missing/invalid sentinel, not a measurement.

use serde::Serialize;

use atriarisk_common::features::{CLINICAL_GROUP, COMPOSITE, ECG_GROUP, METABOLITES_GROUP};
use atriarisk_common::{Contributions, ScoreKind};

use crate::formulas;

/// A combined score and the record of which groups produced it.
#[derive(Debug, Clone, Serialize)]
pub struct CombinedScore {
    pub score: f64,
    pub kind: ScoreKind,
}

fn qualifies(group: &[f64]) -> bool {
    group.iter().all(|v| *v != 0.0)
}

/// Compute the combined score for one patient vector, or `None` when no
/// sub-score group has a complete set of non-zero inputs (the patient
/// yields no plot).
pub fn combined(values: &[f64]) -> Option<CombinedScore> {
    debug_assert_eq!(values.len(), COMPOSITE.len());

    let mut total = 0.0;
    let mut contributed = Contributions::NONE;

    let ecg = &values[ECG_GROUP];
    if qualifies(ecg) {
        total += formulas::ecg(ecg[0], ecg[1], ecg[2], ecg[3]);
        contributed.ecg = true;
    }

    let clinical = &values[CLINICAL_GROUP];
    if qualifies(clinical) {
        total += formulas::clinical(clinical[0], clinical[1]);
        contributed.clinical = true;
    }

    let metabolites = &values[METABOLITES_GROUP];
    if qualifies(metabolites) {
        total += formulas::metabolites(metabolites[0], metabolites[1], metabolites[2]);
        contributed.metabolites = true;
    }

    if !contributed.any() {
        return None;
    }

    Some(CombinedScore {
        score: total,
        kind: ScoreKind::Composite(contributed),
    })
}
