use axum::extract::{Path as AxumPath, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::{json, Value};
use standard_error::{StandardError, Status};
use uuid::Uuid;

use crate::pkg::internal::adaptors::resumes::mutators::ResumeMutator;
use crate::pkg::internal::adaptors::resumes::selectors::ResumeSelector;
use crate::pkg::internal::adaptors::resumes::spec::{ResumeDoc, ResumeEntry, ResumeRecord};
use crate::pkg::internal::adaptors::resumes::validate::ensure_valid;
use crate::pkg::internal::pdf::{export, markup};
use crate::pkg::server::state::{AppState, GetTxn};
use crate::prelude::Result;

fn not_found() -> StandardError {
    StandardError::new("ERR-RESUME-001").code(StatusCode::NOT_FOUND)
}

/// Ids are opaque; a path segment that is not a valid id names no resume.
fn parse_id(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw).map_err(|_| not_found())
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<ResumeRecord>>> {
    let mut tx = state.db_pool.begin_txn().await?;
    let entries = ResumeSelector::new(&mut tx).list().await?;
    Ok(Json(entries.into_iter().map(ResumeRecord::from).collect()))
}

pub async fn get(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
) -> Result<Json<ResumeRecord>> {
    let mut tx = state.db_pool.begin_txn().await?;
    let entry = fetch(&mut tx, &id).await?;
    Ok(Json(entry.into()))
}

pub async fn create(
    State(state): State<AppState>,
    Json(doc): Json<ResumeDoc>,
) -> Result<(StatusCode, Json<ResumeRecord>)> {
    ensure_valid(&doc)?;
    let mut tx = state.db_pool.begin_txn().await?;
    let entry = ResumeMutator::new(&mut tx).create(doc).await?;
    tx.commit().await?;
    tracing::info!("created resume {}", entry.id);
    Ok((StatusCode::CREATED, Json(entry.into())))
}

pub async fn update(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
    Json(doc): Json<ResumeDoc>,
) -> Result<Json<ResumeRecord>> {
    let id = parse_id(&id)?;
    ensure_valid(&doc)?;
    let mut tx = state.db_pool.begin_txn().await?;
    let entry = ResumeMutator::new(&mut tx)
        .replace(id, doc)
        .await?
        .ok_or_else(not_found)?;
    tx.commit().await?;
    Ok(Json(entry.into()))
}

pub async fn remove(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
) -> Result<Json<Value>> {
    let id = parse_id(&id)?;
    let mut tx = state.db_pool.begin_txn().await?;
    if !ResumeMutator::new(&mut tx).delete(id).await? {
        return Err(not_found());
    }
    tx.commit().await?;
    tracing::info!("deleted resume {}", id);
    Ok(Json(json!({"message": "Resume deleted successfully"})))
}

pub async fn export_pdf(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
) -> Result<impl IntoResponse> {
    let mut tx = state.db_pool.begin_txn().await?;
    let entry = fetch(&mut tx, &id).await?;
    drop(tx);

    let html = markup::render(&entry.document)?;
    let bytes = export::print_pdf(html).await?;
    let disposition = format!(
        "attachment; filename=\"{}\"",
        markup::export_filename(&entry.document)
    );
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    ))
}

async fn fetch(tx: &mut sqlx::PgConnection, raw_id: &str) -> Result<ResumeEntry> {
    let id = parse_id(raw_id)?;
    ResumeSelector::new(tx)
        .get_by_id(id)
        .await?
        .ok_or_else(not_found)
}
