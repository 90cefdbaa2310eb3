//! In-memory product registry.

use std::collections::{BTreeSet, HashMap};

use vaultfit_core::{DomainError, DomainResult, ProductId};

use crate::data;
use crate::product::Product;

/// Read-only lookup over the product catalog.
///
/// Populated once at startup and shared immutably between requests; there is
/// no writer after construction. Iteration order equals the order products
/// were supplied in, which the filter engine relies on for stable output.
#[derive(Debug, Clone)]
pub struct ProductRegistry {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

impl ProductRegistry {
    /// Build a registry, validating the catalog data.
    ///
    /// Rejects products with an empty display name and duplicate identifiers.
    pub fn try_new(products: Vec<Product>) -> DomainResult<Self> {
        let mut index = HashMap::with_capacity(products.len());
        for (pos, product) in products.iter().enumerate() {
            if product.name.trim().is_empty() {
                return Err(DomainError::validation(format!(
                    "product {} has an empty name",
                    product.id
                )));
            }
            if index.insert(product.id.clone(), pos).is_some() {
                return Err(DomainError::conflict(format!(
                    "duplicate product id: {}",
                    product.id
                )));
            }
        }
        Ok(Self { products, index })
    }

    /// Registry over the embedded catalog data.
    pub fn embedded() -> DomainResult<Self> {
        Self::try_new(data::seed())
    }

    /// Every product, in catalog order.
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.index.get(id).map(|&pos| &self.products[pos])
    }

    /// Resolve a product's related-product references.
    ///
    /// Identifiers that do not resolve are skipped: a dangling reference is
    /// treated as absent, never as an error.
    pub fn related(&self, id: &ProductId) -> Vec<&Product> {
        match self.get(id) {
            Some(product) => product
                .related
                .iter()
                .filter_map(|rid| self.get(rid))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Every tag appearing anywhere in the catalog, sorted.
    pub fn tag_universe(&self) -> BTreeSet<String> {
        self.products
            .iter()
            .flat_map(|p| p.tags.iter().cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::{Category, Persona};

    fn minimal_product(id: &str, name: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            hook: None,
            description: String::new(),
            detailed_description: None,
            price_cents: 1000,
            original_price_cents: None,
            category: Category::Programs,
            image: String::new(),
            for_professionals: false,
            rating: 5.0,
            users_count: None,
            in_stock: true,
            personas: vec![Persona::Individual],
            tags: vec![],
            features: vec![],
            specifications: vec![],
            includes: vec![],
            perfect_for: vec![],
            not_for: vec![],
            faqs: vec![],
            variants: vec![],
            gallery: vec![],
            related: vec![],
            checkout_url: None,
        }
    }

    #[test]
    fn embedded_registry_loads() {
        let registry = ProductRegistry::embedded().unwrap();
        assert_eq!(registry.len(), 4);
        assert!(registry.get(&ProductId::new("pt-starter-pack")).is_some());
        assert!(registry.get(&ProductId::new("does-not-exist")).is_none());
    }

    #[test]
    fn all_preserves_catalog_order() {
        let registry = ProductRegistry::try_new(vec![
            minimal_product("b", "B"),
            minimal_product("a", "A"),
            minimal_product("c", "C"),
        ])
        .unwrap();

        let slugs: Vec<&str> = registry.all().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(slugs, vec!["b", "a", "c"]);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = ProductRegistry::try_new(vec![
            minimal_product("dup", "First"),
            minimal_product("dup", "Second"),
        ])
        .unwrap_err();

        match err {
            DomainError::Conflict(msg) => assert!(msg.contains("dup")),
            other => panic!("expected Conflict, got {other:?}"),
        }
    }

    #[test]
    fn empty_names_are_rejected() {
        let err =
            ProductRegistry::try_new(vec![minimal_product("blank", "   ")]).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn related_skips_dangling_references() {
        // website-creation references "pt-business-toolkit", which is not in
        // the catalog; resolution must skip it silently.
        let registry = ProductRegistry::embedded().unwrap();
        let related = registry.related(&ProductId::new("website-creation"));

        let slugs: Vec<&str> = related.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(slugs, vec!["online-coaching-bundle", "pt-starter-pack"]);
    }

    #[test]
    fn related_for_unknown_product_is_empty() {
        let registry = ProductRegistry::embedded().unwrap();
        assert!(registry.related(&ProductId::new("nope")).is_empty());
    }

    #[test]
    fn tag_universe_is_sorted_and_deduplicated() {
        let registry = ProductRegistry::embedded().unwrap();
        let tags: Vec<String> = registry.tag_universe().into_iter().collect();
        assert_eq!(
            tags,
            vec![
                "bestseller",
                "business",
                "new",
                "programs",
                "science-backed",
                "service",
                "templates",
            ]
        );
    }
}
