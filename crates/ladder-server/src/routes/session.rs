use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;

use crate::auth::{self, clear_session_cookie, session_cookie};
use crate::error::AppError;
use crate::state::AppState;

#[derive(serde::Deserialize)]
pub struct LoginBody {
    pub password: String,
}

/// POST /api/session — password login; issues the session cookie.
pub async fn login(
    State(app): State<AppState>,
    Json(body): Json<LoginBody>,
) -> Result<impl IntoResponse, AppError> {
    app.config.check_password(&body.password)?;
    let token = app.sessions.issue().await;
    tracing::info!("login accepted, session issued");
    Ok((
        StatusCode::NO_CONTENT,
        [(header::SET_COOKIE, session_cookie(&token))],
    ))
}

/// DELETE /api/session — revoke the current session and clear the cookie.
pub async fn logout(State(app): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    if let Some(token) = auth::session_token(&headers) {
        app.sessions.revoke(&token).await;
    }
    (
        StatusCode::NO_CONTENT,
        [(header::SET_COOKIE, clear_session_cookie())],
    )
}

/// GET /api/session — public probe the UI uses to pick a screen.
pub async fn status(State(app): State<AppState>, headers: HeaderMap) -> Json<serde_json::Value> {
    let authenticated = match auth::session_token(&headers) {
        Some(token) => app.sessions.contains(&token).await,
        None => false,
    };
    Json(serde_json::json!({ "authenticated": authenticated }))
}
