//! HTTP route handlers for the judging API.

use std::sync::Arc;

use axum::{extract::State, Json};
use tracing::{error, info};
use verdict_panel::{evaluation_task, format_transcript};

use crate::dto::{EvaluateRequest, EvaluateResponse, WelcomeResponse};
use crate::error::AppError;
use crate::ServerState;

/// Liveness check.
pub async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the Hackathon Judging API",
    })
}

/// Runs one full evaluation and blocks until the workforce is done.
pub async fn evaluate(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<EvaluateRequest>,
) -> Result<Json<EvaluateResponse>, AppError> {
    if req.name.trim().is_empty() {
        return Err(AppError::Validation("name must not be empty".into()));
    }
    if req.description.trim().is_empty() {
        return Err(AppError::Validation("description must not be empty".into()));
    }

    info!("evaluating project '{}'", req.name);

    let project = format!("Project name: {}\n\nDescription: {}", req.name, req.description);
    let task = evaluation_task(&project);

    let result = tokio::time::timeout(state.evaluation_timeout, state.workforce.process(task))
        .await
        .map_err(|_| {
            error!("evaluation timed out after {:?}", state.evaluation_timeout);
            AppError::Timeout
        })?
        .map_err(|e| {
            error!("evaluation failed: {e}");
            AppError::Internal(e.to_string())
        })?;

    let transcript = format_transcript(&result).map_err(|e| {
        error!("failed to format transcript: {e}");
        AppError::Internal(e.to_string())
    })?;

    Ok(Json(EvaluateResponse { result: transcript }))
}
