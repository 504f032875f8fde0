use axum::{
    extract::{rejection::JsonRejection, Path, Query},
    Json,
};
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::{parse_optional, parse_or_default, BudgetTier, Gender, WeatherCondition},
    services::{
        budget_stylist::{self, BudgetOutfit},
        occasion_guide::{self, OccasionAdvice},
        stylist_chat::{self, ChatReply},
        weather::{self, WeatherAdvice},
    },
};

/// Longest chat message accepted, in characters
const MAX_CHAT_MESSAGE_CHARS: usize = 500;

/// Observed weather as sent by the front end. Values that do not parse are
/// treated as absent.
#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    code: Option<String>,
    temperature: Option<String>,
}

impl WeatherQuery {
    fn code(&self) -> Option<u16> {
        self.code.as_deref().and_then(|raw| raw.trim().parse().ok())
    }

    fn temperature(&self) -> Option<f64> {
        self.temperature
            .as_deref()
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .filter(|t| t.is_finite())
    }
}

#[derive(Debug, Deserialize)]
pub struct AdviceQuery {
    gender: Option<String>,
    weather: Option<String>,
    #[serde(flatten)]
    observed: WeatherQuery,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    message: String,
}

#[derive(Debug, Deserialize)]
pub struct BudgetQuery {
    tier: Option<String>,
    gender: Option<String>,
    amount: Option<String>,
}

pub async fn list_occasions() -> Json<Vec<&'static str>> {
    Json(occasion_guide::occasion_keys())
}

/// Styling advice for one occasion
pub async fn occasion_advice(
    Path(key): Path<String>,
    Query(params): Query<AdviceQuery>,
) -> AppResult<Json<OccasionAdvice>> {
    let guide = occasion_guide::find(&key)
        .ok_or_else(|| AppError::NotFound(format!("Occasion '{}' not found", key)))?;

    let gender: Gender = parse_or_default(params.gender.as_deref());
    // An explicit condition wins over observed code and temperature.
    let weather = parse_optional::<WeatherCondition>(params.weather.as_deref()).or_else(|| {
        weather::resolve_condition(params.observed.code(), params.observed.temperature())
    });

    Ok(Json(guide.advise(gender, weather)))
}

/// Budget looks filtered by tier, gender and an optional custom amount.
/// `all` or unrecognized values disable the corresponding filter.
pub async fn budget_outfits(Query(params): Query<BudgetQuery>) -> Json<Vec<BudgetOutfit>> {
    let tier: Option<BudgetTier> = parse_optional(params.tier.as_deref());
    let gender: Option<Gender> = parse_optional(params.gender.as_deref());
    let amount = params
        .amount
        .as_deref()
        .and_then(|raw| raw.trim().parse::<u32>().ok());

    Json(budget_stylist::budget_outfits(tier, gender, amount))
}

/// Style advice for observed weather
pub async fn weather_style(Query(params): Query<WeatherQuery>) -> AppResult<Json<WeatherAdvice>> {
    weather::advise(params.code(), params.temperature())
        .map(Json)
        .ok_or_else(|| {
            AppError::InvalidInput("A weather code or temperature is required".to_string())
        })
}

/// Rule-based styling assistant
pub async fn chat(body: Result<Json<ChatRequest>, JsonRejection>) -> AppResult<Json<ChatReply>> {
    let Json(request) = body.map_err(|e| AppError::InvalidInput(e.body_text()))?;
    let message = request.message.trim();

    if message.is_empty() {
        return Err(AppError::InvalidInput("Message cannot be empty".to_string()));
    }
    if message.chars().count() > MAX_CHAT_MESSAGE_CHARS {
        return Err(AppError::InvalidInput(format!(
            "Message must be at most {} characters",
            MAX_CHAT_MESSAGE_CHARS
        )));
    }

    let reply = stylist_chat::respond(message);
    tracing::debug!(intent = ?reply.intent, "Chat message answered");

    Ok(Json(reply))
}
