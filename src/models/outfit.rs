use serde::{Deserialize, Serialize};

use super::{AgeGroup, Budget, Climate, Gender, Occasion, Season};

/// A curated outfit from the static catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Outfit {
    pub id: String,
    pub name: String,
    pub gender: Gender,
    pub occasion: Occasion,
    /// Climates the outfit suits; may hold several
    pub climate: Vec<Climate>,
    pub age_group: Vec<AgeGroup>,
    /// Garment pieces, in wearing order
    pub items: Vec<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub accessories: Vec<String>,
    #[serde(default)]
    pub footwear: String,
    pub budget: Budget,
    #[serde(default)]
    pub brands: Vec<String>,
    #[serde(default)]
    pub style_tags: Vec<String>,
    #[serde(default)]
    pub season: Vec<Season>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub reasoning: String,
}

/// Search URLs for one garment across the supported retail partners
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RetailerLinks {
    pub amazon: String,
    pub flipkart: String,
    pub meesho: String,
}

/// Shopping links for a single outfit item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShoppingLink {
    pub item: String,
    pub links: RetailerLinks,
}

/// Outfit returned to clients, with computed fields appended
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnrichedOutfit {
    #[serde(flatten)]
    pub outfit: Outfit,
    pub shopping_links: Vec<ShoppingLink>,
    pub average_rating: f64,
}
