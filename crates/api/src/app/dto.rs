use serde::Deserialize;

use vaultfit_catalog::{CategoryFilter, Persona, PriceRange, Product, ProductFilter};

// -------------------------
// Request DTOs
// -------------------------

/// Query parameters of the catalog listing endpoint.
///
/// Every field is optional and every malformed value degrades to "no
/// constraint"; this endpoint never rejects a filter.
#[derive(Debug, Default, Deserialize)]
pub struct ProductQuery {
    pub q: Option<String>,
    pub category: Option<String>,
    pub persona: Option<String>,
    /// Comma-separated tag list.
    pub tags: Option<String>,
    pub price: Option<String>,
}

impl ProductQuery {
    pub fn into_filter(self) -> ProductFilter {
        ProductFilter {
            query: self.q.unwrap_or_default(),
            category: self
                .category
                .map(|c| CategoryFilter::parse(&c))
                .unwrap_or_default(),
            persona: self.persona.and_then(|p| Persona::parse(&p)),
            tags: self
                .tags
                .map(|raw| {
                    raw.split(',')
                        .map(str::trim)
                        .filter(|t| !t.is_empty())
                        .map(String::from)
                        .collect()
                })
                .unwrap_or_default(),
            price: self
                .price
                .map(|p| PriceRange::parse(&p))
                .unwrap_or_default(),
        }
    }
}

// -------------------------
// JSON mapping helpers
// -------------------------

/// Listing-card view of a product.
pub fn product_summary_json(product: &Product) -> serde_json::Value {
    serde_json::json!({
        "id": product.id.as_str(),
        "name": product.name,
        "hook": product.hook,
        "description": product.description,
        "price_cents": product.price_cents,
        "price_display": product.price_display(),
        "original_price_cents": product.original_price_cents,
        "category": product.category.id(),
        "image": product.image,
        "for_professionals": product.for_professionals,
        "rating": product.rating,
        "users_count": product.users_count,
        "in_stock": product.in_stock,
        "personas": product.personas.iter().map(|p| p.id()).collect::<Vec<_>>(),
        "tags": product.tags,
    })
}

/// Detail view: the full record plus its resolved related products.
pub fn product_detail_json(product: &Product, related: &[&Product]) -> serde_json::Value {
    serde_json::json!({
        "product": product,
        "related": related.iter().map(|p| product_summary_json(p)).collect::<Vec<_>>(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use vaultfit_catalog::Category;

    #[test]
    fn query_defaults_to_no_constraint() {
        let filter = ProductQuery::default().into_filter();
        assert_eq!(filter, ProductFilter::default());
    }

    #[test]
    fn query_parses_each_selector() {
        let query = ProductQuery {
            q: Some("landing page".to_string()),
            category: Some("business".to_string()),
            persona: Some("trainer".to_string()),
            tags: Some("new, bestseller ,".to_string()),
            price: Some("50-100".to_string()),
        };
        let filter = query.into_filter();

        assert_eq!(filter.query, "landing page");
        assert_eq!(filter.category, CategoryFilter::Only(Category::Business));
        assert_eq!(filter.persona, Some(Persona::Trainer));
        assert_eq!(filter.tags, vec!["new".to_string(), "bestseller".to_string()]);
        assert_eq!(filter.price, PriceRange::From50To100);
    }

    #[test]
    fn malformed_selectors_degrade() {
        let query = ProductQuery {
            q: None,
            category: Some("not-a-category".to_string()),
            persona: Some("not-a-persona".to_string()),
            tags: Some(" , ,".to_string()),
            price: Some("cheap".to_string()),
        };
        let filter = query.into_filter();
        assert_eq!(filter, ProductFilter::default());
    }
}
