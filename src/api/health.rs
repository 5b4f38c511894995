use axum::Json;
use serde_json::{json, Value};

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is running")
    )
)]
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "message": "Chat backend is running"
    }))
}
