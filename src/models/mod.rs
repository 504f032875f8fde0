use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

pub mod outfit;
pub mod request;

pub use outfit::{EnrichedOutfit, Outfit, RetailerLinks, ShoppingLink};
pub use request::{
    HardConstraints, Prediction, PredictionResponse, RecommendationCriteria, SoftPreferences,
};

/// Error returned when a string does not name any variant of a closed enum
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} value: '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// Declares a closed, lowercase-named enum with `as_str`, `Display` and `FromStr`.
///
/// Parsing trims and ignores ASCII case, so `" Formal "` parses as `formal`.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$vmeta:meta])* $variant:ident => $text:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($text => Ok($name::$variant),)+
                    _ => Err(UnknownVariant {
                        kind: stringify!($name),
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

string_enum! {
    /// The event an outfit is meant for
    #[derive(Default)]
    Occasion { #[default] Casual => "casual", Formal => "formal" }
}

string_enum! {
    /// Weather band an outfit is comfortable in
    #[derive(Default)]
    Climate { Hot => "hot", #[default] Moderate => "moderate", Cold => "cold" }
}

string_enum! {
    /// Outfit gender, also used as the requested clothing style
    #[derive(Default)]
    Gender { Mens => "mens", Womens => "womens", #[default] Unisex => "unisex" }
}

string_enum! {
    #[derive(Default)]
    AgeGroup { #[default] Young => "young", Adult => "adult", Senior => "senior" }
}

string_enum! {
    /// Price band of an outfit
    Budget { Low => "low", Medium => "medium", High => "high" }
}

string_enum! {
    Season { Spring => "spring", Summer => "summer", Fall => "fall", Winter => "winter" }
}

string_enum! {
    /// Coarse weather condition used to pick a styling tip
    WeatherCondition {
        Sunny => "sunny",
        Mild => "mild",
        Rainy => "rainy",
        Cold => "cold",
        Hot => "hot",
    }
}

string_enum! {
    /// Spending band of the budget stylist, in rupees
    BudgetTier {
        Under500 => "500",
        Under1000 => "1000",
        Under3000 => "3000",
        Custom => "custom",
    }
}

impl Gender {
    /// Whether an outfit of this gender may be shown for the requested clothing style.
    ///
    /// Unisex outfits always pass and a unisex request accepts everything;
    /// otherwise mens and womens exclude each other.
    pub fn is_compatible_with(&self, requested: Gender) -> bool {
        match (requested, self) {
            (Gender::Unisex, _) | (_, Gender::Unisex) => true,
            (requested, outfit) => requested == *outfit,
        }
    }
}

impl Season {
    /// Northern-hemisphere season for a calendar month (1-12)
    pub fn from_month(month: u32) -> Self {
        match month {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Fall,
            _ => Season::Winter,
        }
    }

    pub fn for_date(date: NaiveDate) -> Self {
        Self::from_month(date.month())
    }

    /// Season of the current local date
    pub fn current() -> Self {
        Self::for_date(Local::now().date_naive())
    }
}

/// Parses an enum-like request value, falling back to the type's default when
/// the value is absent or unrecognized.
pub fn parse_or_default<T>(raw: Option<&str>) -> T
where
    T: FromStr + Default,
{
    raw.and_then(|value| value.parse().ok()).unwrap_or_default()
}

/// Parses an optional enum-like request value; unrecognized values count as absent.
pub fn parse_optional<T: FromStr>(raw: Option<&str>) -> Option<T> {
    raw.and_then(|value| value.parse().ok())
}
