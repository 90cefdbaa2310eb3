//! HTTP application wiring (Axum router + shared state).
//!
//! This folder is structured like:
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use vaultfit_catalog::ProductRegistry;
use vaultfit_commerce::CommerceClient;

use crate::config::AppConfig;

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// The registry and the commerce client are the only shared state; both are
/// immutable after this point, so requests need no coordination.
pub fn build_app(config: AppConfig) -> anyhow::Result<Router> {
    let registry = Arc::new(ProductRegistry::embedded()?);
    let commerce = Arc::new(CommerceClient::with_base_url(
        config.ghl_api_key,
        config.ghl_base_url,
    )?);

    Ok(Router::new()
        .route("/", get(routes::system::index))
        .route("/health", get(routes::system::health))
        .route("/api/products", get(routes::commerce::fetch_products))
        .nest("/catalog", routes::catalog::router())
        .layer(
            ServiceBuilder::new()
                .layer(CorsLayer::permissive())
                .layer(Extension(registry))
                .layer(Extension(commerce)),
        ))
}
