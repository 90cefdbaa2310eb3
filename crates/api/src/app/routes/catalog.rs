use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use vaultfit_catalog::{Category, Persona, PriceRange, ProductRegistry};
use vaultfit_core::ProductId;

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/:id", get(get_product))
        .route("/products/:id/related", get(related_products))
        .route("/filters", get(filter_metadata))
}

pub async fn list_products(
    Extension(registry): Extension<Arc<ProductRegistry>>,
    Query(query): Query<dto::ProductQuery>,
) -> axum::response::Response {
    let filter = query.into_filter();
    let items = filter
        .apply(registry.all())
        .into_iter()
        .map(dto::product_summary_json)
        .collect::<Vec<_>>();

    (
        StatusCode::OK,
        Json(serde_json::json!({ "total": items.len(), "items": items })),
    )
        .into_response()
}

pub async fn get_product(
    Extension(registry): Extension<Arc<ProductRegistry>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = ProductId::new(id);
    match registry.get(&id) {
        Some(product) => {
            let related = registry.related(&id);
            (StatusCode::OK, Json(dto::product_detail_json(product, &related))).into_response()
        }
        None => errors::json_error(StatusCode::NOT_FOUND, "product not found"),
    }
}

pub async fn related_products(
    Extension(registry): Extension<Arc<ProductRegistry>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = ProductId::new(id);
    if registry.get(&id).is_none() {
        return errors::json_error(StatusCode::NOT_FOUND, "product not found");
    }

    let items = registry
        .related(&id)
        .into_iter()
        .map(dto::product_summary_json)
        .collect::<Vec<_>>();
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}

/// Selector metadata for building filter UIs: the fixed category, persona,
/// and price-range enumerations plus every tag the catalog actually uses.
pub async fn filter_metadata(
    Extension(registry): Extension<Arc<ProductRegistry>>,
) -> axum::response::Response {
    let categories = Category::all()
        .iter()
        .map(|c| serde_json::json!({ "id": c.id(), "label": c.label() }))
        .collect::<Vec<_>>();

    let personas = Persona::all()
        .iter()
        .map(|p| {
            serde_json::json!({
                "id": p.id(),
                "title": p.title(),
                "categories": p.related_categories().iter().map(|c| c.id()).collect::<Vec<_>>(),
            })
        })
        .collect::<Vec<_>>();

    let price_ranges = PriceRange::all()
        .iter()
        .map(|r| serde_json::json!({ "id": r.id(), "label": r.label() }))
        .collect::<Vec<_>>();

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "categories": categories,
            "personas": personas,
            "price_ranges": price_ranges,
            "tags": registry.tag_universe(),
        })),
    )
        .into_response()
}
