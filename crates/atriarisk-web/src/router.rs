//! Axum router — maps all URL paths to handlers.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer,
};

use crate::handlers::{
    display::display_graph,
    forms::{submit_af, submit_composite, submit_pac, submit_pstaf},
    pages::{
        af_page, composite_page, contact, data_formats, error_page, home, landing, pac_page,
        pstaf_page, tutorials,
    },
    upload::{upload_af, upload_composite, upload_pac, upload_pstaf},
};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let static_root = state.static_root.clone();
    let upload_root = state.upload_root.clone();
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Pages
        .route("/", get(landing))
        .route("/home", get(home))
        .route("/index", get(composite_page))
        .route("/afprogression", get(af_page))
        .route("/predictionofatrialcardiomyopathy", get(pac_page))
        .route("/predictionofsludgethrombusinaf", get(pstaf_page))
        .route("/data_formats", get(data_formats))
        .route("/tutorials", get(tutorials))
        .route("/contact", get(contact))
        .route("/error", get(error_page))
        // CSV uploads, one route per model
        .route("/upload", post(upload_composite))
        .route("/upload_afprogression", post(upload_af))
        .route("/upload_PAC", post(upload_pac))
        .route("/upload_pstaf", post(upload_pstaf))
        // Single-patient forms
        .route("/submit-answers", post(submit_composite))
        .route("/submit-answers-af", post(submit_af))
        .route("/submit-answers-pac", post(submit_pac))
        .route("/submit-answers-pstaf", post(submit_pstaf))
        // Gauge display
        .route("/display-graph", get(display_graph))
        // Static files (css, default datasets, rendered gauges) and uploads
        .nest_service("/static", ServeDir::new(static_root))
        .nest_service("/uploads", ServeDir::new(upload_root))
        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
