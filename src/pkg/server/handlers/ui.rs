use askama::Template;
use axum::extract::{Path as AxumPath, State};
use axum::http::StatusCode;
use axum::response::Html;
use standard_error::{StandardError, Status};
use uuid::Uuid;

use crate::pkg::internal::adaptors::resumes::selectors::ResumeSelector;
use crate::pkg::internal::adaptors::resumes::spec::ResumeRecord;
use crate::pkg::internal::pdf::markup;
use crate::pkg::server::state::{AppState, GetTxn};
use crate::pkg::server::uispec::{Builder, Home};
use crate::prelude::Result;

pub async fn home(State(state): State<AppState>) -> Result<Html<String>> {
    let mut tx = state.db_pool.begin_txn().await?;
    let resumes: Vec<ResumeRecord> = ResumeSelector::new(&mut tx)
        .list()
        .await?
        .into_iter()
        .map(ResumeRecord::from)
        .collect();
    tracing::debug!("rendering home with {} resumes", resumes.len());
    Ok(Html(Home { resumes }.render()?))
}

/// One template serves both `/builder` and `/builder/:id`; the page reads
/// the id from its location and fetches the resume over the API.
pub async fn builder() -> Result<Html<String>> {
    Ok(Html(Builder {}.render()?))
}

/// The preview is exactly the markup the PDF pipeline prints.
pub async fn preview(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
) -> Result<Html<String>> {
    let id = Uuid::parse_str(&id)
        .map_err(|_| StandardError::new("ERR-RESUME-001").code(StatusCode::NOT_FOUND))?;
    let mut tx = state.db_pool.begin_txn().await?;
    let entry = ResumeSelector::new(&mut tx)
        .get_by_id(id)
        .await?
        .ok_or_else(|| StandardError::new("ERR-RESUME-001").code(StatusCode::NOT_FOUND))?;
    Ok(Html(markup::render(&entry.document)?))
}
