//! CSV upload handlers — one route per scoring model, one shared flow.
//!
//! Flow: persist the upload into a request-scoped directory (or fall back
//! to the bundled default dataset), read and normalise the table, score
//! each patient, render one gauge per scorable patient, and show the
//! results page. Any failure rejects the whole upload with a plain 400.

use std::fs;
use std::path::PathBuf;

use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, State};
use axum::response::Html;
use minijinja::context;
use serde::Serialize;
use tracing::{debug, info};

use atriarisk_common::features;
use atriarisk_common::{AtriaError, ScoreKind};
use atriarisk_ingestion::{normalise, read_table, Orientation};
use atriarisk_plot::render_gauge;
use atriarisk_scoring::{combined, formulas};

use crate::error::WebError;
use crate::scope::RequestScope;
use crate::state::SharedState;

/// Which scoring model an upload route feeds.
#[derive(Debug, Clone, Copy)]
pub enum UploadModel {
    Composite,
    AfProgression,
    AtrialCardiomyopathy,
    SludgeThrombus,
}

impl UploadModel {
    fn title(&self) -> &'static str {
        match self {
            UploadModel::Composite => "Combined risk score",
            UploadModel::AfProgression => "AF progression",
            UploadModel::AtrialCardiomyopathy => "Atrial cardiomyopathy",
            UploadModel::SludgeThrombus => "Sludge / thrombus in AF",
        }
    }

    /// Bundled fallback dataset under the static root.
    fn default_dataset(&self) -> &'static str {
        match self {
            UploadModel::Composite => "default.csv",
            UploadModel::AfProgression => "default_afprogression.csv",
            UploadModel::AtrialCardiomyopathy => "default_PAC.csv",
            UploadModel::SludgeThrombus => "default_pstaf.csv",
        }
    }

    fn required_features(&self) -> &'static [&'static str] {
        match self {
            UploadModel::Composite => &features::COMPOSITE,
            UploadModel::AfProgression => &features::AF_PROGRESSION,
            UploadModel::AtrialCardiomyopathy => &features::ATRIAL_CARDIOMYOPATHY,
            UploadModel::SludgeThrombus => &features::SLUDGE_THROMBUS,
        }
    }

    /// Score one zero-filled patient vector. `None` means no sub-score is
    /// computable and the patient yields no gauge. The single-formula
    /// models score every vector; only the composite gates on groups.
    fn score(&self, values: &[f64]) -> Option<(f64, ScoreKind)> {
        match self {
            UploadModel::Composite => combined(values).map(|cs| (cs.score, cs.kind)),
            UploadModel::AfProgression => Some((
                formulas::af_progression(values[0], values[1], values[2], values[3]),
                ScoreKind::AfProgression,
            )),
            UploadModel::AtrialCardiomyopathy => Some((
                formulas::atrial_cardiomyopathy(values[0], values[1], values[2]),
                ScoreKind::AtrialCardiomyopathy,
            )),
            UploadModel::SludgeThrombus => Some((
                formulas::sludge_thrombus(values[0], values[1], values[2], values[3]),
                ScoreKind::SludgeThrombus,
            )),
        }
    }
}

/// One patient's rendered gauges, as listed on the results page.
#[derive(Debug, Serialize)]
pub struct PatientPlots {
    pub patient: usize,
    pub plots: Vec<String>,
}

pub async fn upload_composite(
    State(state): State<SharedState>,
    multipart: Multipart,
) -> Result<Html<String>, WebError> {
    run_upload(state, multipart, UploadModel::Composite).await
}

pub async fn upload_af(
    State(state): State<SharedState>,
    multipart: Multipart,
) -> Result<Html<String>, WebError> {
    run_upload(state, multipart, UploadModel::AfProgression).await
}

pub async fn upload_pac(
    State(state): State<SharedState>,
    multipart: Multipart,
) -> Result<Html<String>, WebError> {
    run_upload(state, multipart, UploadModel::AtrialCardiomyopathy).await
}

pub async fn upload_pstaf(
    State(state): State<SharedState>,
    multipart: Multipart,
) -> Result<Html<String>, WebError> {
    run_upload(state, multipart, UploadModel::SludgeThrombus).await
}

// ── Multipart input ───────────────────────────────────────────────────────────

struct UploadRequest {
    use_default: bool,
    orientation: Orientation,
    file: Option<(String, Vec<u8>)>,
}

fn bad_part(err: MultipartError) -> WebError {
    WebError::bad(format!("malformed upload: {err}"))
}

async fn parse_upload(mut multipart: Multipart) -> Result<UploadRequest, WebError> {
    let mut req = UploadRequest {
        use_default: false,
        orientation: Orientation::Rows,
        file: None,
    };
    while let Some(field) = multipart.next_field().await.map_err(bad_part)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "use_default_csv" => {
                let value = field.text().await.map_err(bad_part)?;
                req.use_default = matches!(value.trim(), "on" | "true" | "1");
            }
            "orientation" => {
                req.orientation = Orientation::from_form(&field.text().await.map_err(bad_part)?);
            }
            "file" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let data = field.bytes().await.map_err(bad_part)?;
                if !filename.is_empty() && !data.is_empty() {
                    req.file = Some((filename, data.to_vec()));
                }
            }
            _ => {}
        }
    }
    Ok(req)
}

// ── Shared flow ───────────────────────────────────────────────────────────────

async fn run_upload(
    state: SharedState,
    multipart: Multipart,
    model: UploadModel,
) -> Result<Html<String>, WebError> {
    let req = parse_upload(multipart).await?;
    let scope = RequestScope::open(&state, &state.upload_plot_root)?;

    let csv_path: PathBuf = if req.use_default {
        state.static_root.join(model.default_dataset())
    } else {
        let (name, data) = req
            .file
            .ok_or_else(|| AtriaError::Field("file".into()))?;
        if !name.to_ascii_lowercase().ends_with(".csv") {
            return Err(WebError::bad("only .csv files are accepted"));
        }
        let path = scope.upload_dir().join("upload.csv");
        fs::write(&path, &data).map_err(AtriaError::Io)?;
        path
    };

    let table = read_table(&csv_path)?;
    let vectors = normalise(&table, req.orientation, model.required_features())?;

    let mut patients = Vec::new();
    for pv in &vectors {
        let Some((score, kind)) = model.score(&pv.values) else {
            debug!(patient = pv.patient, "no qualifying sub-score, skipping");
            continue;
        };
        let rel = render_gauge(
            score,
            kind,
            scope.plot_dir(),
            &pv.patient.to_string(),
            &state.static_root,
        )?;
        patients.push(PatientPlots {
            patient: pv.patient,
            plots: vec![rel],
        });
    }
    if patients.is_empty() {
        return Err(AtriaError::NoPlots.into());
    }
    info!(
        model = model.title(),
        patients = patients.len(),
        scope = scope.id(),
        "upload scored"
    );

    Ok(Html(state.render(
        "results.html",
        context! { title => model.title(), patients => patients },
    )?))
}
