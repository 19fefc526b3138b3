use axum::extract::State;
use axum::Json;

use crate::state::AppState;

/// GET /api/users — the configured user names for the identity selector.
pub async fn list_users(State(app): State<AppState>) -> Json<Vec<String>> {
    Json(app.config.users.clone())
}
