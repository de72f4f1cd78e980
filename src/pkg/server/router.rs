use axum::routing::{delete, get, post, put};
use axum::Router;

use super::handlers;
use super::handlers::probes::{healthz, livez};
use super::state::AppState;
use crate::prelude::Result;

pub async fn build_routes() -> Result<Router> {
    let state = AppState::new().await?;
    let app = Router::new()
        .route("/", get(handlers::ui::home))
        .route("/builder", get(handlers::ui::builder))
        .route("/builder/:id", get(handlers::ui::builder))
        .route("/preview/:id", get(handlers::ui::preview))
        .route("/resume", get(handlers::resumes::list))
        .route("/resume", post(handlers::resumes::create))
        .route("/resume/:id", get(handlers::resumes::get))
        .route("/resume/:id", put(handlers::resumes::update))
        .route("/resume/:id", delete(handlers::resumes::remove))
        .route("/resume/:id/pdf", get(handlers::resumes::export_pdf))
        .route("/ai/suggestions", post(handlers::ai::suggestions))
        .route("/ai/keywords", post(handlers::ai::keywords))
        .route("/ai/improve-section", post(handlers::ai::improve_section))
        .route("/healthz", get(healthz))
        .route("/livez", get(livez))
        .with_state(state);

    Ok(app)
}
