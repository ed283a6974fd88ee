//! Question registry endpoints

use axum::{extract::State, Json};
use chrono::Utc;

use crate::error::{ApiError, Result};
use crate::models::{CreateQuestionRequest, QuestionListResponse};
use crate::store::Question;
use crate::AppState;

/// POST /api/questions
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateQuestionRequest>,
) -> Result<Json<Question>> {
    if request.prompt.trim().is_empty() {
        return Err(ApiError::BadRequest("prompt must not be empty".to_string()));
    }

    let question = state
        .store
        .insert_question(
            request.prompt,
            request.category,
            request.difficulty,
            Utc::now(),
        )
        .await;

    Ok(Json(question))
}

/// GET /api/questions
pub async fn list(State(state): State<AppState>) -> Result<Json<QuestionListResponse>> {
    let questions = state.store.list_questions().await;
    Ok(Json(QuestionListResponse { questions }))
}
