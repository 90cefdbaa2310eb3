use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use vaultfit_commerce::CommerceError;

/// Map a commerce failure onto the wire contract.
///
/// Upstream failures forward the upstream status; everything unexpected
/// collapses to a generic 500. Upstream bodies are logged at the client
/// layer, never echoed to callers.
pub fn commerce_error_to_response(err: CommerceError) -> axum::response::Response {
    match err {
        CommerceError::MissingApiKey => json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "API key is not configured",
        ),
        CommerceError::Upstream {
            status,
            status_text,
        } => json_error(
            StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
            format!("Failed to fetch products from GHL API: {status_text}"),
        ),
        CommerceError::Transport(e) => {
            tracing::error!(error = %e, "server error while proxying products");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Server error while fetching products",
            )
        }
    }
}

/// Error envelope shared by every endpoint: `{"success":false,"error":…}`.
pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "success": false,
            "error": message.into(),
        })),
    )
        .into_response()
}
