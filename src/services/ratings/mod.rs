//! Outfit ratings storage
//!
//! Ratings are kept outside the catalog so the catalog stays immutable. Two
//! backends exist: a JSON file (default) and Redis. Both implement
//! [`RatingsStore`], which the enrichment stage reads from and the rating
//! endpoints write to.

use serde::Serialize;

use crate::error::{AppError, AppResult};

pub mod file_store;
pub mod redis_store;

pub use file_store::FileRatingsStore;
pub use redis_store::RedisRatingsStore;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// Storage for per-outfit rating lists
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RatingsStore: Send + Sync {
    /// All ratings recorded for an outfit, oldest first
    async fn ratings(&self, outfit_id: &str) -> AppResult<Vec<u8>>;

    /// Appends one rating for an outfit
    async fn submit(&self, outfit_id: &str, rating: u8) -> AppResult<()>;

    /// Backend name for logging
    fn name(&self) -> &'static str;
}

/// Aggregate rating for one outfit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingSummary {
    pub outfit_id: String,
    pub average_rating: f64,
    pub total_ratings: usize,
}

impl RatingSummary {
    pub fn new(outfit_id: impl Into<String>, ratings: &[u8]) -> Self {
        Self {
            outfit_id: outfit_id.into(),
            average_rating: average_rating(ratings),
            total_ratings: ratings.len(),
        }
    }
}

/// Mean rating rounded to two decimals, or 0 when there are no ratings
pub fn average_rating(ratings: &[u8]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }

    let total: u32 = ratings.iter().map(|&r| u32::from(r)).sum();
    let mean = f64::from(total) / ratings.len() as f64;
    (mean * 100.0).round() / 100.0
}

/// Checks that a submitted value is a whole-star rating
pub fn validate_rating(value: i64) -> AppResult<u8> {
    u8::try_from(value)
        .ok()
        .filter(|r| (MIN_RATING..=MAX_RATING).contains(r))
        .ok_or_else(|| {
            AppError::InvalidInput(format!(
                "Rating must be between {} and {}, got {}",
                MIN_RATING, MAX_RATING, value
            ))
        })
}
