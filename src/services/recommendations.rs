use std::time::Instant;

use crate::{
    models::{Prediction, RecommendationCriteria, Season},
    services::{
        catalog::Catalog,
        enrichment::enrich_outfits,
        filter::select_outfits_with_season,
        ratings::RatingsStore,
    },
};

/// Generates a prediction for already-normalized criteria
///
/// Selects up to three outfits from the catalog and enriches them with
/// shopping links and ratings. An empty outfit list is a valid result.
pub async fn recommend(
    catalog: &Catalog,
    ratings: &dyn RatingsStore,
    criteria: &RecommendationCriteria,
) -> Prediction {
    recommend_with_season(catalog, ratings, criteria, Season::current()).await
}

pub async fn recommend_with_season(
    catalog: &Catalog,
    ratings: &dyn RatingsStore,
    criteria: &RecommendationCriteria,
    default_season: Season,
) -> Prediction {
    let start = Instant::now();

    let selected = select_outfits_with_season(catalog, criteria, default_season);
    let outfits = enrich_outfits(&selected, ratings).await;

    tracing::info!(
        occasion = %criteria.hard.occasion,
        climate = %criteria.hard.climate,
        clothing_style = %criteria.hard.clothing_style,
        age_group = %criteria.hard.age_group,
        season = %criteria.soft.season.unwrap_or(default_season),
        outfits = outfits.len(),
        processing_time_ms = start.elapsed().as_millis(),
        "Recommendation generated"
    );

    Prediction::new(outfits)
}
