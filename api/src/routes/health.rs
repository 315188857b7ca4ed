use axum::{Json, extract::State};
use chrono::Utc;

use crate::states::AppState;

/// GET /health
/// Response: 200 OK with JSON
pub async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
      "status": "healthy",
      "posts": state.store.len(),
      "timestamp": Utc::now().to_rfc3339()
    }))
}
