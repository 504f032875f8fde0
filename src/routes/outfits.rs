use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, AppResult},
    models::{EnrichedOutfit, Outfit},
    services::{
        enrichment::enrich_outfit,
        ratings::{validate_rating, RatingSummary},
    },
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct RatingRequest {
    pub rating: i64,
}

#[derive(Debug, Serialize)]
pub struct RatingResponse {
    pub status: &'static str,
    #[serde(flatten)]
    pub summary: RatingSummary,
}

fn find_outfit<'a>(state: &'a AppState, id: &str) -> AppResult<&'a Outfit> {
    state
        .catalog
        .get(id)
        .ok_or_else(|| AppError::NotFound(format!("Outfit '{}' not found", id)))
}

/// Full catalog, in catalog order
pub async fn list(State(state): State<AppState>) -> Json<Vec<Outfit>> {
    Json(state.catalog.outfits().to_vec())
}

/// One outfit with shopping links and its current rating
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<EnrichedOutfit>> {
    let outfit = find_outfit(&state, &id)?;
    Ok(Json(enrich_outfit(outfit, state.ratings.as_ref()).await))
}

pub async fn rating_summary(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<RatingResponse>> {
    let outfit = find_outfit(&state, &id)?;
    let ratings = state.ratings.ratings(&outfit.id).await?;

    Ok(Json(RatingResponse {
        status: "success",
        summary: RatingSummary::new(&outfit.id, &ratings),
    }))
}

/// Records a 1-5 rating and returns the updated summary
pub async fn submit_rating(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<RatingRequest>, JsonRejection>,
) -> AppResult<Json<RatingResponse>> {
    let Json(request) = body.map_err(|e| AppError::InvalidInput(e.body_text()))?;
    let outfit = find_outfit(&state, &id)?;
    let rating = validate_rating(request.rating)?;

    state.ratings.submit(&outfit.id, rating).await?;
    let ratings = state.ratings.ratings(&outfit.id).await?;
    let summary = RatingSummary::new(&outfit.id, &ratings);

    tracing::info!(
        outfit_id = %outfit.id,
        rating,
        average_rating = summary.average_rating,
        total_ratings = summary.total_ratings,
        store = state.ratings.name(),
        "Rating recorded"
    );

    Ok(Json(RatingResponse {
        status: "success",
        summary,
    }))
}
