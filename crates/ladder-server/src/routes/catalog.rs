use axum::Json;

use ladder_core::catalog;
use ladder_core::level::Level;

/// GET /api/catalog — categories, items, level labels, and the Lv3 criteria
/// note. Static per process; the UI renders one panel per item from this.
pub async fn get_catalog() -> Json<serde_json::Value> {
    let levels: Vec<serde_json::Value> = Level::all()
        .iter()
        .map(|l| {
            serde_json::json!({
                "value": l.as_u8(),
                "label": l.label(),
            })
        })
        .collect();

    Json(serde_json::json!({
        "categories": catalog::categories(),
        "levels": levels,
        "criteria": catalog::LEVEL3_CRITERIA,
    }))
}
