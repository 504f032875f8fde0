use serde::Serialize;
use std::collections::HashMap;

use super::{
    parse_optional, parse_or_default, AgeGroup, Budget, Climate, EnrichedOutfit, Gender,
    Occasion, Season,
};

/// Fixed confidence reported with every prediction
pub const PREDICTION_CONFIDENCE: f64 = 0.95;

/// Subject label reported with every prediction
pub const CLOTHING_TYPE: &str = "Clothing Item";

/// Criteria that narrow the catalog but may be relaxed by backfill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HardConstraints {
    pub occasion: Occasion,
    pub climate: Climate,
    pub clothing_style: Gender,
    pub age_group: AgeGroup,
}

/// Optional preferences, each applied only if it leaves at least one outfit
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SoftPreferences {
    pub colors: Vec<String>,
    pub budget: Option<Budget>,
    pub brands: Vec<String>,
    pub style_tags: Vec<String>,
    /// `None` means the current calendar season
    pub season: Option<Season>,
}

/// Normalized recommendation request
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecommendationCriteria {
    pub hard: HardConstraints,
    pub soft: SoftPreferences,
}

impl RecommendationCriteria {
    /// Builds criteria from raw form fields.
    ///
    /// Never fails: unrecognized hard values fall back to their defaults and
    /// unrecognized soft values are dropped.
    pub fn from_form(form: &HashMap<String, String>) -> Self {
        let field = |name: &str| form.get(name).map(String::as_str);

        Self {
            hard: HardConstraints {
                occasion: parse_or_default(field("occasion")),
                climate: parse_or_default(field("climate")),
                clothing_style: parse_or_default(field("clothing_style")),
                age_group: parse_or_default(field("age_group")),
            },
            soft: SoftPreferences {
                colors: split_list(field("color_preferences")),
                budget: parse_optional(field("budget_range")),
                brands: split_list(field("brand_preferences")),
                style_tags: split_list(field("style_tags")),
                season: parse_optional(field("season_preference")),
            },
        }
    }
}

/// Splits a comma-separated list, trimming entries and dropping empty and
/// duplicate (case-insensitive) values.
pub fn split_list(raw: Option<&str>) -> Vec<String> {
    let mut values: Vec<String> = Vec::new();
    for entry in raw.unwrap_or_default().split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        let folded = entry.to_lowercase();
        if !values.iter().any(|v| v.to_lowercase() == folded) {
            values.push(entry.to_string());
        }
    }
    values
}

#[derive(Debug, Clone, Serialize)]
pub struct Prediction {
    pub confidence: f64,
    pub clothing_type: String,
    pub outfits: Vec<EnrichedOutfit>,
}

impl Prediction {
    pub fn new(outfits: Vec<EnrichedOutfit>) -> Self {
        Self {
            confidence: PREDICTION_CONFIDENCE,
            clothing_type: CLOTHING_TYPE.to_string(),
            outfits,
        }
    }
}

/// Success envelope for `/predict`
#[derive(Debug, Clone, Serialize)]
pub struct PredictionResponse {
    pub status: &'static str,
    pub prediction: Prediction,
}

impl PredictionResponse {
    pub fn success(prediction: Prediction) -> Self {
        Self {
            status: "success",
            prediction,
        }
    }
}
