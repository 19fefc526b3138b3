use axum::extract::State;
use axum::Json;

use crate::error::AppError;
use crate::state::AppState;
use ladder_core::level::Level;
use ladder_core::record::ProgressRecord;
use ladder_core::store;

#[derive(serde::Deserialize)]
pub struct SubmitBody {
    pub user: String,
    pub category: String,
    pub item_id: String,
    pub item_title: String,
    pub level: u8,
    #[serde(default)]
    pub comment: String,
}

/// POST /api/records — append one reflection to the log.
///
/// Returns `{milestone, record}`; `milestone` is true when this submission
/// crossed the cleared threshold for the first time. The log is never
/// deduplicated — a repeat submission just adds another row.
pub async fn submit_record(
    State(app): State<AppState>,
    Json(body): Json<SubmitBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let level = Level::try_from(body.level)?;
    let record = ProgressRecord::new(
        body.user,
        body.category,
        body.item_id,
        body.item_title,
        level,
        body.comment,
    );

    let store = app.store.clone();
    let worksheet = app.config.worksheet.clone();

    // One append at a time: the transport is whole-sheet replace, so two
    // interleaved read-modify-writes in this process could drop a row.
    let _append = app.append_lock.lock().await;

    let submission = tokio::task::spawn_blocking(move || {
        store::submit(store.as_ref(), &worksheet, record)
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    if submission.milestone {
        tracing::info!(
            item = %submission.record.item_id,
            "milestone: item cleared for the first time"
        );
    }

    Ok(Json(serde_json::json!({
        "milestone": submission.milestone,
        "record": submission.record,
    })))
}
