use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;
use standard_error::{Interpolate, StandardError, Status};

use crate::pkg::internal::ai::advisor::AdvisorOps;
use crate::pkg::internal::ai::report::{ImprovementSet, KeywordSet, SuggestionReport};
use crate::pkg::server::state::AppState;
use crate::prelude::Result;

fn missing_input(what: &str) -> StandardError {
    StandardError::new("ERR-AI-004")
        .code(StatusCode::BAD_REQUEST)
        .interpolate_err(what.to_string())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionsInput {
    pub resume_data: Option<Value>,
    pub target_role: Option<String>,
    pub industry: Option<String>,
}

pub async fn suggestions(
    State(state): State<AppState>,
    Json(input): Json<SuggestionsInput>,
) -> Result<Json<SuggestionReport>> {
    let resume = input
        .resume_data
        .ok_or_else(|| missing_input("resumeData"))?;
    let report = state
        .ai_client
        .resume_suggestions(
            &resume,
            non_empty(input.target_role).as_deref(),
            non_empty(input.industry).as_deref(),
        )
        .await?;
    Ok(Json(report))
}

#[derive(Deserialize)]
pub struct KeywordsInput {
    pub industry: Option<String>,
    pub role: Option<String>,
}

pub async fn keywords(
    State(state): State<AppState>,
    Json(input): Json<KeywordsInput>,
) -> Result<Json<KeywordSet>> {
    let industry = non_empty(input.industry);
    let role = non_empty(input.role);
    if industry.is_none() && role.is_none() {
        return Err(missing_input("industry or role"));
    }
    let keywords = state
        .ai_client
        .industry_keywords(industry.as_deref(), role.as_deref())
        .await?;
    Ok(Json(keywords))
}

#[derive(Deserialize)]
pub struct ImproveSectionInput {
    pub section: Option<String>,
    pub content: Option<String>,
    pub context: Option<String>,
}

pub async fn improve_section(
    State(state): State<AppState>,
    Json(input): Json<ImproveSectionInput>,
) -> Result<Json<ImprovementSet>> {
    let section = non_empty(input.section).ok_or_else(|| missing_input("section"))?;
    let content = non_empty(input.content).ok_or_else(|| missing_input("content"))?;
    let improvements = state
        .ai_client
        .improve_section(&section, &content, non_empty(input.context).as_deref())
        .await?;
    Ok(Json(improvements))
}
