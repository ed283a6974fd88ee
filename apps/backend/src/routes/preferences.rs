//! Category preference endpoints

use axum::{extract::State, Json};

use crate::error::Result;
use crate::AppState;
use expound_core::UserPreferences;

/// GET /api/preferences
pub async fn get_all(State(state): State<AppState>) -> Result<Json<UserPreferences>> {
    Ok(Json(state.store.get_preferences().await))
}

/// PUT /api/preferences
pub async fn update(
    State(state): State<AppState>,
    Json(request): Json<UserPreferences>,
) -> Result<Json<UserPreferences>> {
    state.store.put_preferences(request.clone()).await;
    Ok(Json(request))
}
