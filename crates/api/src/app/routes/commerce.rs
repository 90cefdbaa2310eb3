use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use vaultfit_commerce::CommerceClient;

use crate::app::errors;

/// `GET /api/products`: forward one read to the upstream commerce API and
/// return just the unwrapped `products` array.
pub async fn fetch_products(
    Extension(commerce): Extension<Arc<CommerceClient>>,
) -> axum::response::Response {
    match commerce.fetch_products().await {
        Ok(products) => (StatusCode::OK, Json(products)).into_response(),
        Err(err) => errors::commerce_error_to_response(err),
    }
}
