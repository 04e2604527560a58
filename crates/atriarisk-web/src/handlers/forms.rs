//! Single-patient scoring forms.
//!
//! Field values come straight from HTML inputs; anything that does not
//! parse as a number collapses to zero and excludes its group, exactly as
//! it would in a CSV upload.

use axum::Form;
use axum::extract::State;
use axum::response::Html;
use minijinja::context;
use serde::Deserialize;

use atriarisk_common::features::{CLINICAL_GROUP, ECG_GROUP, METABOLITES_GROUP};
use atriarisk_common::{AtriaError, Contributions, ScoreKind};
use atriarisk_plot::render_gauge;
use atriarisk_scoring::{combined, formulas};

use crate::error::WebError;
use crate::scope::RequestScope;
use crate::state::SharedState;

fn num(s: &str) -> f64 {
    s.trim().parse().unwrap_or(0.0)
}

// ── Combined score form ───────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CompositeForm {
    #[serde(default)]
    pub lvesv: String,
    #[serde(default)]
    pub lved: String,
    #[serde(default)]
    pub emf: String,
    #[serde(default)]
    pub conduit: String,
    #[serde(default)]
    pub glyc: String,
    #[serde(default)]
    pub urea: String,
    #[serde(default)]
    pub arginine: String,
    #[serde(default)]
    pub met_sulfoxide: String,
    #[serde(default)]
    pub kynurenine: String,
}

/// One gauge per fully non-zero group, plus the combined gauge whose kind
/// records exactly which groups contributed.
pub async fn submit_composite(
    State(state): State<SharedState>,
    Form(form): Form<CompositeForm>,
) -> Result<Html<String>, WebError> {
    let values = [
        num(&form.lvesv),
        num(&form.lved),
        num(&form.emf),
        num(&form.conduit),
        num(&form.glyc),
        num(&form.urea),
        num(&form.arginine),
        num(&form.met_sulfoxide),
        num(&form.kynurenine),
    ];

    let scope = RequestScope::open(&state, &state.form_plot_root)?;
    let mut plots = Vec::new();

    let ecg = &values[ECG_GROUP];
    if ecg.iter().all(|v| *v != 0.0) {
        let kind = ScoreKind::Composite(Contributions {
            ecg: true,
            ..Contributions::NONE
        });
        let score = formulas::ecg(ecg[0], ecg[1], ecg[2], ecg[3]);
        plots.push(render_gauge(score, kind, scope.plot_dir(), "ecg", &state.static_root)?);
    }

    let clinical = &values[CLINICAL_GROUP];
    if clinical.iter().all(|v| *v != 0.0) {
        let kind = ScoreKind::Composite(Contributions {
            clinical: true,
            ..Contributions::NONE
        });
        let score = formulas::clinical(clinical[0], clinical[1]);
        plots.push(render_gauge(score, kind, scope.plot_dir(), "clinical", &state.static_root)?);
    }

    let metabolites = &values[METABOLITES_GROUP];
    if metabolites.iter().all(|v| *v != 0.0) {
        let kind = ScoreKind::Composite(Contributions {
            metabolites: true,
            ..Contributions::NONE
        });
        let score = formulas::metabolites(metabolites[0], metabolites[1], metabolites[2]);
        plots.push(render_gauge(
            score,
            kind,
            scope.plot_dir(),
            "metabolites",
            &state.static_root,
        )?);
    }

    if let Some(cs) = combined(&values) {
        plots.push(render_gauge(
            cs.score,
            cs.kind,
            scope.plot_dir(),
            "combined",
            &state.static_root,
        )?);
    }

    if plots.is_empty() {
        return Err(AtriaError::NoPlots.into());
    }
    Ok(Html(state.render(
        "display.html",
        context! { title => "Combined risk score", plots => plots },
    )?))
}

// ── Single-model forms ────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AfForm {
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub lvef: String,
    #[serde(default)]
    pub sex: String,
    #[serde(default)]
    pub ladiameter: String,
}

pub async fn submit_af(
    State(state): State<SharedState>,
    Form(form): Form<AfForm>,
) -> Result<Html<String>, WebError> {
    let score = formulas::af_progression(
        num(&form.age),
        num(&form.lvef),
        num(&form.sex),
        num(&form.ladiameter),
    );
    single_gauge(&state, score, ScoreKind::AfProgression, "af", "AF progression")
}

#[derive(Debug, Deserialize)]
pub struct PacForm {
    #[serde(default)]
    pub geat_vi: String,
    #[serde(default)]
    pub la_pls: String,
    #[serde(default)]
    pub geat_t1: String,
}

pub async fn submit_pac(
    State(state): State<SharedState>,
    Form(form): Form<PacForm>,
) -> Result<Html<String>, WebError> {
    let score = formulas::atrial_cardiomyopathy(
        num(&form.geat_vi),
        num(&form.la_pls),
        num(&form.geat_t1),
    );
    single_gauge(
        &state,
        score,
        ScoreKind::AtrialCardiomyopathy,
        "pac",
        "Atrial cardiomyopathy",
    )
}

#[derive(Debug, Deserialize)]
pub struct PstafForm {
    #[serde(default)]
    pub laa_velocity: String,
    #[serde(default)]
    pub es_laa_area: String,
    #[serde(default)]
    pub es_laav: String,
    #[serde(default)]
    pub laa_morphology: String,
}

pub async fn submit_pstaf(
    State(state): State<SharedState>,
    Form(form): Form<PstafForm>,
) -> Result<Html<String>, WebError> {
    let score = formulas::sludge_thrombus(
        num(&form.laa_velocity),
        num(&form.es_laa_area),
        num(&form.es_laav),
        num(&form.laa_morphology),
    );
    single_gauge(
        &state,
        score,
        ScoreKind::SludgeThrombus,
        "pstaf",
        "Sludge / thrombus in AF",
    )
}

fn single_gauge(
    state: &SharedState,
    score: f64,
    kind: ScoreKind,
    index: &str,
    title: &str,
) -> Result<Html<String>, WebError> {
    let scope = RequestScope::open(state, &state.form_plot_root)?;
    let rel = render_gauge(score, kind, scope.plot_dir(), index, &state.static_root)?;
    Ok(Html(state.render(
        "display.html",
        context! { title => title, plots => vec![rel] },
    )?))
}
