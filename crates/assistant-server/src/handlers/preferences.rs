//! Per-user preference endpoints backed by the in-memory store.

use std::sync::Arc;

use assistant_core::DEFAULT_USER;
use axum::extract::{Query, State};
use axum::Json;

use crate::dto::{Preferences, PreferencesQuery, SaveOutcome, SavePreferencesRequest};
use crate::state::AppState;

pub async fn get_preferences(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PreferencesQuery>,
) -> Json<Preferences> {
    let user_id = query.user_id.as_deref().unwrap_or(DEFAULT_USER);
    Json(state.preferences_for(user_id))
}

pub async fn save_preferences(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SavePreferencesRequest>,
) -> Json<SaveOutcome> {
    let user_id = req.user_id.as_deref().unwrap_or(DEFAULT_USER);
    state.save_preferences(user_id, req.preferences);

    Json(SaveOutcome {
        success: true,
        message: "Preferences saved successfully",
    })
}
