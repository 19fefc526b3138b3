use axum::extract::{Query, State};
use axum::Json;

use crate::error::AppError;
use crate::state::AppState;
use ladder_core::progress;

#[derive(serde::Deserialize)]
pub struct ProgressQuery {
    pub user: String,
}

/// GET /api/progress?user=NAME — the user's current level per item plus the
/// aggregate report. Recomputed from the full log on every call.
pub async fn get_progress(
    State(app): State<AppState>,
    Query(query): Query<ProgressQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let store = app.store.clone();
    let worksheet = app.config.worksheet.clone();
    let user = query.user;

    let result = tokio::task::spawn_blocking(move || {
        let rows = store.read(&worksheet)?;
        let levels = progress::reduce(&rows, &user);
        let report = progress::report(&levels);

        Ok::<_, ladder_core::LadderError>(serde_json::json!({
            "user": user,
            "levels": levels,
            "total_items": report.total_items,
            "cleared_count": report.cleared_count,
            "remaining": report.remaining,
            "rate": report.rate,
            "categories": report.categories,
        }))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}
