//! End-to-end tests against the full router.
//!
//! Run with: cargo test --package atriarisk-web --test test_routes

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use atriarisk_web::router::build_router;
use atriarisk_web::state::AppState;

const BOUNDARY: &str = "atriarisk-test-boundary";

fn app(tmp: &tempfile::TempDir) -> Router {
    let state = AppState::new(tmp.path().join("static"), tmp.path().join("uploads")).unwrap();
    build_router(state)
}

/// Multipart body with an uploaded CSV file part.
fn csv_upload_body(csv: &str, orientation: &str) -> String {
    format!(
        "--{BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"orientation\"\r\n\r\n\
         {orientation}\r\n\
         --{BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"file\"; filename=\"data.csv\"\r\n\
         Content-Type: text/csv\r\n\r\n\
         {csv}\r\n\
         --{BOUNDARY}--\r\n"
    )
}

/// Multipart body asking for the bundled default dataset.
fn default_upload_body() -> String {
    format!(
        "--{BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"use_default_csv\"\r\n\r\n\
         on\r\n\
         --{BOUNDARY}--\r\n"
    )
}

fn multipart_post(uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_pages_render() {
    let tmp = tempfile::tempdir().unwrap();
    let app = app(&tmp);

    for uri in [
        "/",
        "/home",
        "/index",
        "/afprogression",
        "/predictionofatrialcardiomyopathy",
        "/predictionofsludgethrombusinaf",
        "/data_formats",
        "/tutorials",
        "/contact",
        "/error",
    ] {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "page {uri}");
    }
}

#[tokio::test]
async fn test_upload_scores_patients_with_partial_columns() {
    let tmp = tempfile::tempdir().unwrap();
    let app = app(&tmp);

    // Only the clinical columns are present; the other seven composite
    // features are synthesised as zero, so every patient still gets a
    // clinical-only gauge.
    let csv = "GLYC,Urea\n10,5\n12,6\n";
    let response = app
        .oneshot(multipart_post("/upload", csv_upload_body(csv, "rows")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("Patient 1"));
    assert!(html.contains("Patient 2"));
    assert!(html.contains("graph_1.png"));
    assert!(html.contains("graph_2.png"));
}

#[tokio::test]
async fn test_upload_columns_orientation() {
    let tmp = tempfile::tempdir().unwrap();
    let app = app(&tmp);

    let csv = "Feature,P1,P2\nGLYC,10,12\nUrea,5,6\n";
    let response = app
        .oneshot(multipart_post("/upload", csv_upload_body(csv, "columns")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("Patient 1"));
    assert!(html.contains("Patient 2"));
}

#[tokio::test]
async fn test_upload_rows_data_in_columns_mode_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let app = app(&tmp);

    // First data cell is numeric: the table is rows-oriented.
    let csv = "GLYC,Urea\n10,5\n";
    let response = app
        .oneshot(multipart_post("/upload", csv_upload_body(csv, "columns")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_upload_without_qualifying_patients_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let app = app(&tmp);

    // A zero in the clinical group excludes it, and no other group has
    // data, so no patient yields a plot.
    let csv = "GLYC,Urea\n0,5\n0,6\n";
    let response = app
        .oneshot(multipart_post("/upload", csv_upload_body(csv, "rows")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let text = body_text(response).await;
    assert!(text.contains("no plots"));
}

#[tokio::test]
async fn test_upload_unreadable_table_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let app = app(&tmp);

    let response = app
        .oneshot(multipart_post(
            "/upload",
            csv_upload_body("justonecolumn\n42\n", "rows"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_upload_requires_a_file() {
    let tmp = tempfile::tempdir().unwrap();
    let app = app(&tmp);

    let body = format!("--{BOUNDARY}--\r\n");
    let response = app
        .oneshot(multipart_post("/upload_pstaf", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_default_dataset_fallback() {
    let tmp = tempfile::tempdir().unwrap();
    let app = app(&tmp);

    std::fs::write(
        tmp.path().join("static").join("default_PAC.csv"),
        "GEAT volume index,LA PLS,GEAT T1\n2,3,4\n",
    )
    .unwrap();

    let response = app
        .oneshot(multipart_post("/upload_PAC", default_upload_body()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("graph_1.png"));
}

#[tokio::test]
async fn test_single_model_upload_scores_every_row() {
    let tmp = tempfile::tempdir().unwrap();
    let app = app(&tmp);

    // Single-formula models have no group gating: a zero value still
    // produces a gauge.
    let csv = "Age,LVEF,Sex,LAdiameter\n64,55,0,42\n";
    let response = app
        .oneshot(multipart_post(
            "/upload_afprogression",
            csv_upload_body(csv, "rows"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_composite_form_renders_group_and_combined_gauges() {
    let tmp = tempfile::tempdir().unwrap();
    let app = app(&tmp);

    let response = app
        .oneshot(form_post("/submit-answers", "glyc=10&urea=5"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("graph_clinical.png"));
    assert!(html.contains("graph_combined.png"));
    assert!(!html.contains("graph_ecg.png"));
}

#[tokio::test]
async fn test_composite_form_without_data_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let app = app(&tmp);

    let response = app
        .oneshot(form_post("/submit-answers", "glyc=0&urea=5"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_single_model_form() {
    let tmp = tempfile::tempdir().unwrap();
    let app = app(&tmp);

    let response = app
        .oneshot(form_post(
            "/submit-answers-pac",
            "geat_vi=2&la_pls=3&geat_t1=4",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("graph_pac.png"));
}

#[tokio::test]
async fn test_display_graph() {
    let tmp = tempfile::tempdir().unwrap();
    let app = app(&tmp);

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/display-graph?plots=plots2/abc/graph_pac.png")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("/static/plots2/abc/graph_pac.png"));

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/display-graph")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/display-graph?plots=../secrets.png")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
