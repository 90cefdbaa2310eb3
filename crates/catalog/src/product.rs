use serde::{Deserialize, Serialize};

use vaultfit_core::ProductId;

/// Product category (fixed enumeration, matches the storefront sections).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Services,
    Coaching,
    Programs,
    Business,
    Resources,
    Education,
}

impl Category {
    pub fn all() -> [Self; 6] {
        [
            Self::Services,
            Self::Coaching,
            Self::Programs,
            Self::Business,
            Self::Resources,
            Self::Education,
        ]
    }

    /// Parse a category selector; `None` for anything outside the enumeration.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "services" => Some(Self::Services),
            "coaching" => Some(Self::Coaching),
            "programs" => Some(Self::Programs),
            "business" => Some(Self::Business),
            "resources" => Some(Self::Resources),
            "education" => Some(Self::Education),
            _ => None,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::Services => "services",
            Self::Coaching => "coaching",
            Self::Programs => "programs",
            Self::Business => "business",
            Self::Resources => "resources",
            Self::Education => "education",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Services => "Services",
            Self::Coaching => "Coaching",
            Self::Programs => "Programs",
            Self::Business => "For PTs",
            Self::Resources => "Resources",
            Self::Education => "Education",
        }
    }
}

/// Coarse user segment a product applies to. Used purely for filtering,
/// never for authentication or authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Persona {
    Trainer,
    GymOwner,
    Individual,
}

impl Persona {
    pub fn all() -> [Self; 3] {
        [Self::Trainer, Self::GymOwner, Self::Individual]
    }

    /// Parse a persona selector; `None` for anything outside the enumeration.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "trainer" => Some(Self::Trainer),
            "gym-owner" => Some(Self::GymOwner),
            "individual" => Some(Self::Individual),
            _ => None,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::Trainer => "trainer",
            Self::GymOwner => "gym-owner",
            Self::Individual => "individual",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Trainer => "Personal Trainer",
            Self::GymOwner => "Gym Owner",
            Self::Individual => "Training for Myself",
        }
    }

    /// Storefront sections this segment is steered towards.
    pub fn related_categories(&self) -> &'static [Category] {
        match self {
            Self::Trainer => &[Category::Business, Category::Education, Category::Resources],
            Self::GymOwner => &[Category::Services, Category::Business, Category::Resources],
            Self::Individual => &[Category::Programs, Category::Coaching],
        }
    }
}

/// A headline capability of a product (title plus one-line description).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specification {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub id: String,
    pub name: String,
    pub image: String,
    pub color_name: String,
}

/// A catalog product.
///
/// Records are immutable after load; there is no create/update/delete
/// lifecycle. Prices are carried in the smallest currency unit (cents).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hook: Option<String>,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detailed_description: Option<String>,
    pub price_cents: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price_cents: Option<u64>,
    pub category: Category,
    pub image: String,
    pub for_professionals: bool,
    pub rating: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users_count: Option<u64>,
    pub in_stock: bool,
    pub personas: Vec<Persona>,
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<Feature>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub specifications: Vec<Specification>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub includes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub perfect_for: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub not_for: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub faqs: Vec<Faq>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<Variant>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub gallery: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related: Vec<ProductId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkout_url: Option<String>,
}

impl Product {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn applies_to(&self, persona: Persona) -> bool {
        self.personas.contains(&persona)
    }

    /// Price formatted for display, e.g. `"$39.99"`.
    pub fn price_display(&self) -> String {
        format!("${}.{:02}", self.price_cents / 100, self.price_cents % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Category::Business).unwrap(), "\"business\"");
        assert_eq!(serde_json::to_string(&Category::Programs).unwrap(), "\"programs\"");
    }

    #[test]
    fn persona_serializes_kebab_case() {
        assert_eq!(serde_json::to_string(&Persona::GymOwner).unwrap(), "\"gym-owner\"");
        let back: Persona = serde_json::from_str("\"gym-owner\"").unwrap();
        assert_eq!(back, Persona::GymOwner);
    }

    #[test]
    fn category_parse_matches_serde_ids() {
        for category in Category::all() {
            assert_eq!(Category::parse(category.id()), Some(category));
        }
        assert_eq!(Category::parse("garden-furniture"), None);
    }

    #[test]
    fn persona_parse_matches_serde_ids() {
        for persona in Persona::all() {
            assert_eq!(Persona::parse(persona.id()), Some(persona));
        }
        assert_eq!(Persona::parse("Trainer"), None);
    }

    #[test]
    fn price_display_pads_cents() {
        let mut product = crate::data::seed().remove(0);
        product.price_cents = 3999;
        assert_eq!(product.price_display(), "$39.99");
        product.price_cents = 9700;
        assert_eq!(product.price_display(), "$97.00");
        product.price_cents = 5;
        assert_eq!(product.price_display(), "$0.05");
    }
}
