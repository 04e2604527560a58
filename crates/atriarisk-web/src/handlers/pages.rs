//! Templated GET pages.

use axum::extract::{Query, State};
use axum::response::Html;
use minijinja::context;
use serde::Deserialize;

use crate::error::WebError;
use crate::state::SharedState;

fn page(state: &SharedState, template: &str) -> Result<Html<String>, WebError> {
    Ok(Html(state.render(template, context! {})?))
}

pub async fn landing(State(state): State<SharedState>) -> Result<Html<String>, WebError> {
    page(&state, "landing.html")
}

pub async fn home(State(state): State<SharedState>) -> Result<Html<String>, WebError> {
    page(&state, "home.html")
}

pub async fn composite_page(State(state): State<SharedState>) -> Result<Html<String>, WebError> {
    page(&state, "composite.html")
}

pub async fn af_page(State(state): State<SharedState>) -> Result<Html<String>, WebError> {
    page(&state, "afprogression.html")
}

pub async fn pac_page(State(state): State<SharedState>) -> Result<Html<String>, WebError> {
    page(&state, "pac.html")
}

pub async fn pstaf_page(State(state): State<SharedState>) -> Result<Html<String>, WebError> {
    page(&state, "pstaf.html")
}

pub async fn data_formats(State(state): State<SharedState>) -> Result<Html<String>, WebError> {
    page(&state, "data_formats.html")
}

pub async fn tutorials(State(state): State<SharedState>) -> Result<Html<String>, WebError> {
    page(&state, "tutorials.html")
}

pub async fn contact(State(state): State<SharedState>) -> Result<Html<String>, WebError> {
    page(&state, "contact.html")
}

#[derive(Debug, Deserialize)]
pub struct ErrorQuery {
    #[serde(default)]
    pub message: String,
}

pub async fn error_page(
    State(state): State<SharedState>,
    Query(query): Query<ErrorQuery>,
) -> Result<Html<String>, WebError> {
    Ok(Html(state.render(
        "error.html",
        context! { message => query.message },
    )?))
}
