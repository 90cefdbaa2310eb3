use axum::{http::StatusCode, Json};

pub async fn index() -> &'static str {
    "Vaultfit Products API"
}

pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(serde_json::json!({ "status": "ok" })))
}
