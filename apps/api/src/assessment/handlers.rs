use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;

use crate::assessment::catalog::list_questions;
use crate::assessment::service::{assess, RESULT_COLLECTION};
use crate::errors::AppError;
use crate::models::assessment::{AssessmentRequest, AssessmentResponse, QuestionView};
use crate::state::AppState;

/// GET /api/questions
pub async fn handle_list_questions() -> Json<Vec<QuestionView>> {
    Json(list_questions())
}

/// POST /api/assess
pub async fn handle_assess(
    State(state): State<AppState>,
    Json(req): Json<AssessmentRequest>,
) -> Result<Json<AssessmentResponse>, AppError> {
    let response = assess(state.store.as_deref(), &req).await?;
    Ok(Json(response))
}

/// GET /api/assessments/:id
pub async fn handle_get_assessment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let store = state
        .store
        .as_deref()
        .ok_or_else(|| AppError::PersistenceUnavailable("no store configured".to_string()))?;

    let doc = store
        .get_document(RESULT_COLLECTION, &id)
        .await
        .map_err(|e| AppError::PersistenceUnavailable(e.to_string()))?;

    doc.map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Assessment {id} not found")))
}
