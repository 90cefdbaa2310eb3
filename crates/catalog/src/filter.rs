//! Filter predicate engine.
//!
//! Given the product catalog and a set of user-selected criteria, produce the
//! order-stable subsequence of products satisfying all active predicates.
//! There are no error conditions: malformed or out-of-range selector values
//! degrade to "no constraint" instead of failing.

use crate::product::{Category, Persona, Product};

/// Category selector. `All` is the sentinel that bypasses the check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Parse a category selector; unknown values degrade to `All`.
    pub fn parse(s: &str) -> Self {
        match Category::parse(s) {
            Some(category) => Self::Only(category),
            None => Self::All,
        }
    }

    fn admits(self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => product.category == category,
        }
    }
}

/// Price bucket selector (cents). `All` is the sentinel that bypasses the
/// check; the remaining buckets mirror the storefront's fixed intervals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PriceRange {
    #[default]
    All,
    Under50,
    From50To100,
    From100To200,
    Over200,
}

impl PriceRange {
    pub fn all() -> [Self; 5] {
        [
            Self::All,
            Self::Under50,
            Self::From50To100,
            Self::From100To200,
            Self::Over200,
        ]
    }

    /// Parse a price-range selector; unknown values degrade to `All`.
    pub fn parse(s: &str) -> Self {
        match s {
            "under-50" => Self::Under50,
            "50-100" => Self::From50To100,
            "100-200" => Self::From100To200,
            "over-200" => Self::Over200,
            _ => Self::All,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Under50 => "under-50",
            Self::From50To100 => "50-100",
            Self::From100To200 => "100-200",
            Self::Over200 => "over-200",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All Prices",
            Self::Under50 => "Under $50",
            Self::From50To100 => "$50 - $100",
            Self::From100To200 => "$100 - $200",
            Self::Over200 => "Over $200",
        }
    }

    /// Whether a price (in cents) falls inside this bucket.
    ///
    /// Interval edges: $50 and $100 belong to `From50To100`, $200 to
    /// `From100To200`.
    pub fn contains(self, price_cents: u64) -> bool {
        match self {
            Self::All => true,
            Self::Under50 => price_cents < 5_000,
            Self::From50To100 => (5_000..=10_000).contains(&price_cents),
            Self::From100To200 => price_cents > 10_000 && price_cents <= 20_000,
            Self::Over200 => price_cents > 20_000,
        }
    }
}

/// A set of filter criteria. Every field defaults to "no constraint"; active
/// predicates are combined with logical AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    /// Free-text query, matched case-insensitively against name and
    /// description. Empty matches everything.
    pub query: String,
    pub category: CategoryFilter,
    pub persona: Option<Persona>,
    /// Selected tags; a product passes if any selected tag appears in its tag
    /// set (OR across selections). Empty matches everything.
    pub tags: Vec<String>,
    pub price: PriceRange,
}

impl ProductFilter {
    /// Whether a single product satisfies every active predicate.
    pub fn matches(&self, product: &Product) -> bool {
        let matches_query = self.query.is_empty() || {
            let needle = self.query.to_lowercase();
            product.name.to_lowercase().contains(&needle)
                || product.description.to_lowercase().contains(&needle)
        };

        let matches_persona = self
            .persona
            .is_none_or(|persona| product.applies_to(persona));

        let matches_tags =
            self.tags.is_empty() || self.tags.iter().any(|tag| product.has_tag(tag));

        matches_query
            && self.category.admits(product)
            && matches_persona
            && matches_tags
            && self.price.contains(product.price_cents)
    }

    /// The order-stable subsequence of `products` satisfying the filter.
    ///
    /// Relative order of matches equals their order in the source; the source
    /// is never mutated or resorted.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}
