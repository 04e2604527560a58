//! Gauge display page — shows images named in the query string.

use axum::extract::{Query, State};
use axum::response::Html;
use minijinja::context;
use serde::Deserialize;

use crate::error::WebError;
use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct DisplayQuery {
    /// Comma-separated static-relative gauge paths.
    #[serde(default)]
    pub plots: String,
}

pub async fn display_graph(
    State(state): State<SharedState>,
    Query(query): Query<DisplayQuery>,
) -> Result<Html<String>, WebError> {
    let plots: Vec<&str> = query
        .plots
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();
    if plots.is_empty() {
        return Err(WebError::bad("no plots to display"));
    }
    // Only bare static-relative paths reach the template.
    if plots.iter().any(|p| p.contains("..") || p.starts_with('/')) {
        return Err(WebError::bad("invalid plot path"));
    }
    Ok(Html(state.render(
        "display.html",
        context! { title => "Your gauges", plots => plots },
    )?))
}
