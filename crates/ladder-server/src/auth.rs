use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    body::Body,
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

pub const SESSION_COOKIE: &str = "ladder_session";

// ---------------------------------------------------------------------------
// Sessions
// ---------------------------------------------------------------------------

/// Server-side session set. Each successful login issues a fresh opaque
/// token; authentication state is scoped to the session holding that token,
/// never a process-global flag.
#[derive(Clone, Default)]
pub struct Sessions {
    inner: Arc<RwLock<HashSet<String>>>,
}

impl Sessions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint and register a new session token.
    pub async fn issue(&self) -> String {
        let token = uuid::Uuid::new_v4().to_string();
        self.inner.write().await.insert(token.clone());
        token
    }

    pub async fn contains(&self, token: &str) -> bool {
        self.inner.read().await.contains(token)
    }

    /// Revoke a token. Revoking an unknown token is a no-op.
    pub async fn revoke(&self, token: &str) {
        self.inner.write().await.remove(token);
    }
}

/// Extract the session token from a Cookie header, if present.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    let cookies = headers.get("cookie")?.to_str().ok()?;
    cookies.split(';').find_map(|part| {
        part.trim()
            .strip_prefix(SESSION_COOKIE)
            .and_then(|rest| rest.strip_prefix('='))
            .map(str::to_string)
    })
}

/// Set-Cookie value for a freshly issued session.
pub fn session_cookie(token: &str) -> String {
    format!("{SESSION_COOKIE}={token}; HttpOnly; SameSite=Lax; Path=/")
}

/// Set-Cookie value that clears the session cookie.
pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Max-Age=0; HttpOnly; SameSite=Lax; Path=/")
}

// ---------------------------------------------------------------------------
// Middleware
// ---------------------------------------------------------------------------

/// Gate `/api/*` behind a valid session cookie.
///
/// Evaluated in order:
/// 1. Path outside `/api/` → passthrough (static assets and the SPA shell
///    must render the login form without a session)
/// 2. Path is `/api/session` → passthrough (login, logout, status probe)
/// 3. Cookie holds a registered token → passthrough
/// 4. None matched → 401 JSON
pub async fn auth_middleware(
    State(sessions): State<Sessions>,
    req: Request,
    next: Next,
) -> Response {
    let path = req.uri().path();
    if !path.starts_with("/api/") || path == "/api/session" {
        return next.run(req).await;
    }

    if let Some(token) = session_token(req.headers()) {
        if sessions.contains(&token).await {
            return next.run(req).await;
        }
    }

    Response::builder()
        .status(401)
        .header("Content-Type", "application/json")
        .body(Body::from(r#"{"error":"unauthorized"}"#))
        .expect("infallible: all header values are valid ASCII")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::{body::Body, http::Request, middleware, routing::get, Router};
    use tower::ServiceExt;

    async fn ok_handler() -> &'static str {
        "ok"
    }

    fn test_app(sessions: Sessions) -> Router {
        Router::new()
            .route("/", get(ok_handler))
            .route("/api/session", get(ok_handler))
            .route("/api/progress", get(ok_handler))
            .layer(middleware::from_fn_with_state(sessions, auth_middleware))
    }

    #[tokio::test]
    async fn static_paths_pass_without_session() {
        let resp = test_app(Sessions::new())
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn session_endpoint_is_public() {
        let resp = test_app(Sessions::new())
            .oneshot(
                Request::builder()
                    .uri("/api/session")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn gated_route_without_cookie_returns_401_json() {
        let resp = test_app(Sessions::new())
            .oneshot(
                Request::builder()
                    .uri("/api/progress")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let ct = resp
            .headers()
            .get("content-type")
            .unwrap()
            .to_str()
            .unwrap();
        assert!(ct.contains("application/json"));
    }

    #[tokio::test]
    async fn valid_session_cookie_passes_through() {
        let sessions = Sessions::new();
        let token = sessions.issue().await;
        let resp = test_app(sessions)
            .oneshot(
                Request::builder()
                    .uri("/api/progress")
                    .header("cookie", format!("{SESSION_COOKIE}={token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn revoked_session_is_rejected() {
        let sessions = Sessions::new();
        let token = sessions.issue().await;
        sessions.revoke(&token).await;
        let resp = test_app(sessions)
            .oneshot(
                Request::builder()
                    .uri("/api/progress")
                    .header("cookie", format!("{SESSION_COOKIE}={token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn unknown_token_is_rejected() {
        let resp = test_app(Sessions::new())
            .oneshot(
                Request::builder()
                    .uri("/api/progress")
                    .header("cookie", format!("{SESSION_COOKIE}=not-a-session"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn session_token_parses_among_other_cookies() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "cookie",
            "theme=dark; ladder_session=abc123; lang=ja".parse().unwrap(),
        );
        assert_eq!(session_token(&headers).as_deref(), Some("abc123"));
    }

    #[test]
    fn session_token_absent_without_cookie() {
        assert!(session_token(&HeaderMap::new()).is_none());
    }
}
