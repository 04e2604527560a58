//! Score kinds — which model (or combination of sub-scores) produced a value.
//!
//! The kind drives plot decoration only: annotation sentence, threshold
//! geometry and pole labels. Kinds serialise to the wire codes 1..=10 used in
//! gauge file metadata and the results pages.

use serde::{Deserialize, Serialize};

/// Which composite sub-scores contributed to a combined score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributions {
    pub ecg: bool,
    pub clinical: bool,
    pub metabolites: bool,
}

impl Contributions {
    pub const NONE: Contributions = Contributions {
        ecg: false,
        clinical: false,
        metabolites: false,
    };

    pub fn any(&self) -> bool {
        self.ecg || self.clinical || self.metabolites
    }

    /// Wire code of this combination: ECG·4 + Clinical·2 + Metabolites·1.
    pub fn code(&self) -> u8 {
        (self.ecg as u8) * 4 + (self.clinical as u8) * 2 + (self.metabolites as u8)
    }
}

/// Band geometry of a gauge, keyed by score kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BandLayout {
    /// Grey neutral zone between `lower` and `upper`, positive band above,
    /// negative band below, dashed reference lines at both edges.
    Neutral { lower: f64, upper: f64 },
    /// Single dashed threshold, positive band above, negative band below.
    Split { threshold: f64 },
}

/// Identifies the model (or sub-score combination) behind a score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScoreKind {
    /// Combined E-strain score; at least one contribution is expected.
    Composite(Contributions),
    AfProgression,
    AtrialCardiomyopathy,
    SludgeThrombus,
}

impl ScoreKind {
    /// Wire code 1..=10 (0 only for an empty composite, which the scorer
    /// never emits).
    pub fn code(&self) -> u8 {
        match self {
            ScoreKind::Composite(c) => c.code(),
            ScoreKind::AfProgression => 8,
            ScoreKind::AtrialCardiomyopathy => 9,
            ScoreKind::SludgeThrombus => 10,
        }
    }

    /// Annotation sentence drawn under the gauge. The ten sentences are a
    /// fixed external contract and must not be reworded.
    pub fn annotation(&self) -> &'static str {
        match self {
            ScoreKind::Composite(c) => match (c.ecg, c.clinical, c.metabolites) {
                (false, false, false) => "",
                (false, false, true) => "Score obtained with Metabolites data",
                (false, true, false) => "Score obtained with Clinical data",
                (false, true, true) => "Score obtained with Clinical and Metabolites data",
                (true, false, false) => "Score obtained with ECG data",
                (true, false, true) => "Score obtained with ECG and Metabolites data",
                (true, true, false) => "Score obtained with ECG and Clinical",
                (true, true, true) => "Score obtained with ECG, Clinical and Metabolites data",
            },
            ScoreKind::AfProgression => "Score for AF Progression",
            ScoreKind::AtrialCardiomyopathy => {
                "Score for the prediction of Atrial Cardiomyopathy"
            }
            ScoreKind::SludgeThrombus => {
                "Score for the prediction of Sludge / Thrombus in AF"
            }
        }
    }

    /// Clinical decision thresholds for the colour bands.
    pub fn bands(&self) -> BandLayout {
        match self {
            ScoreKind::Composite(_) => BandLayout::Neutral {
                lower: -1.0,
                upper: 1.0,
            },
            ScoreKind::AfProgression => BandLayout::Split { threshold: -1.131 },
            ScoreKind::AtrialCardiomyopathy => BandLayout::Split { threshold: -1.0 },
            ScoreKind::SludgeThrombus => BandLayout::Split { threshold: -1.55 },
        }
    }

    /// Labels for the upper and lower halves of the gauge.
    pub fn pole_labels(&self) -> (&'static str, &'static str) {
        match self {
            ScoreKind::Composite(_) => ("Positive", "Negative"),
            ScoreKind::AfProgression => ("AF Progression", "No progression"),
            ScoreKind::AtrialCardiomyopathy => ("Atrial Cardiomyopathy", "Healthy"),
            ScoreKind::SludgeThrombus => ("Sludge/Thrombus in AF", "Healthy"),
        }
    }
}
