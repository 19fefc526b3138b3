pub mod auth;
pub mod embed;
pub mod error;
pub mod routes;
pub mod state;

use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use ladder_core::config::Config;
use ladder_core::store::SheetStore;
use tower_http::cors::{Any, CorsLayer};

/// Build the axum Router with all API routes and middleware.
/// Used by `serve()` and available for integration testing.
pub fn build_router(config: Config, store: Box<dyn SheetStore>) -> Router {
    let app_state = state::AppState::new(config, store);
    let sessions = app_state.sessions.clone();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Session gate
        .route(
            "/api/session",
            get(routes::session::status)
                .post(routes::session::login)
                .delete(routes::session::logout),
        )
        // Read side
        .route("/api/users", get(routes::users::list_users))
        .route("/api/catalog", get(routes::catalog::get_catalog))
        .route("/api/progress", get(routes::progress::get_progress))
        // Append side
        .route("/api/records", post(routes::records::submit_record))
        .fallback(embed::static_handler)
        .layer(middleware::from_fn_with_state(
            sessions,
            auth::auth_middleware,
        ))
        .layer(cors)
        .with_state(app_state)
}

/// Start the ladder web UI server.
pub async fn serve(config: Config, port: u16, open_browser: bool) -> anyhow::Result<()> {
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    serve_on(config, listener, open_browser).await
}

/// Start the server on a pre-bound listener.
///
/// Accepting a `TcpListener` lets the caller read the actual port before
/// starting (useful when `port = 0` and the OS picks a free port).
pub async fn serve_on(
    config: Config,
    listener: tokio::net::TcpListener,
    open_browser: bool,
) -> anyhow::Result<()> {
    let actual_port = listener.local_addr()?.port();

    // The HTTP store backend wraps a blocking client, so build it off the
    // async runtime like every other core call.
    let store = {
        let config = config.clone();
        tokio::task::spawn_blocking(move || config.open_store()).await??
    };
    let app = build_router(config, store);

    tracing::info!("ladder UI server listening on http://localhost:{actual_port}");

    if open_browser {
        let url = format!("http://localhost:{actual_port}");
        let _ = open::that(&url);
    }

    axum::serve(listener, app).await?;
    Ok(())
}
