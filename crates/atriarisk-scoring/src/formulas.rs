//! Published risk score formulas.
//!
//! All six are affine functions over clinical/imaging variables with fixed
//! coefficients. They assume pre-validated inputs: callers gate on non-zero
//! values before calling, no missing-value handling happens here.

/// Echocardiographic strain sub-score of the combined model.
pub fn ecg(lvesv_3d: f64, lved_3d: f64, la_tot_emf: f64, la_strain_conduit: f64) -> f64 {
    2.628 + 0.035 * lvesv_3d - 0.034 * lved_3d - 0.053 * la_tot_emf - 0.261 * la_strain_conduit
}

/// Clinical chemistry sub-score (glycemia, urea).
pub fn clinical(glyc: f64, urea: f64) -> f64 {
    -68.028 + 3.126 * glyc + 6.953 * urea
}

/// Plasma metabolite sub-score.
pub fn metabolites(arginine: f64, met_sulfoxide: f64, kynurenine: f64) -> f64 {
    36.33 - 3.79 * arginine - 27.73 * met_sulfoxide + 3.60 * kynurenine
}

/// AF progression score. LA diameter enters with unit weight next to its
/// 0.133 offset, as published.
pub fn af_progression(age: f64, lvef: f64, sex: f64, la_diameter: f64) -> f64 {
    -11.896 + 0.092 * age - 0.040 * lvef + 1.029 * sex + 0.133 + la_diameter
}

/// Atrial cardiomyopathy (CMR) score.
pub fn atrial_cardiomyopathy(geat_volume_index: f64, la_pls: f64, geat_t1: f64) -> f64 {
    11.886 - 1.207 * geat_volume_index - 0.112 * la_pls - 0.056 * geat_t1
}

/// Sludge / thrombus (LAA echo) score.
pub fn sludge_thrombus(
    laa_emptying_flow_velocity: f64,
    es_laa_area: f64,
    es_laav: f64,
    laa_morphology: f64,
) -> f64 {
    -3.984 - 0.114 * laa_emptying_flow_velocity
        + 0.144 * es_laa_area
        + 0.101 * es_laav
        + 0.424 * laa_morphology
}
