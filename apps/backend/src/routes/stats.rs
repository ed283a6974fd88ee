//! Streak and session statistics endpoints

use axum::{extract::State, Json};
use chrono::Utc;

use crate::error::Result;
use crate::models::{ResetResponse, SessionEndRequest, SessionEndResponse};
use crate::AppState;
use expound_core::{record_session_end, StreakState};

/// POST /api/study/session-end
///
/// Applied twice on the same calendar date this is a no-op for the streak;
/// the session tally is taken either way.
pub async fn session_end(
    State(state): State<AppState>,
    Json(request): Json<SessionEndRequest>,
) -> Result<Json<SessionEndResponse>> {
    let session_date = request
        .session_date
        .unwrap_or_else(|| Utc::now().date_naive());

    let current = state.store.get_streak().await;
    let updated = record_session_end(&current, session_date);
    state.store.put_streak(updated.clone()).await;

    let session = state.store.take_session().await;

    Ok(Json(SessionEndResponse {
        streak: updated,
        cards_reviewed: session.cards_reviewed,
        average_score: session.average_score(),
    }))
}

/// GET /api/stats/streak
pub async fn streak(State(state): State<AppState>) -> Result<Json<StreakState>> {
    Ok(Json(state.store.get_streak().await))
}

/// POST /api/progress/reset
///
/// Full progress reset: schedules reinitialize to defaults (the questions
/// themselves stay registered), streak and session state clear.
pub async fn reset_progress(State(state): State<AppState>) -> Result<Json<ResetResponse>> {
    let schedules_reset = state.store.reset_progress(Utc::now()).await;
    Ok(Json(ResetResponse { schedules_reset }))
}
