//! Weather-driven styling advice
//!
//! Current conditions arrive as a WMO weather code and/or a temperature in
//! degrees Celsius, as reported by common forecast APIs. Fetching them is the
//! caller's job; this module only turns them into a [`WeatherCondition`] and
//! the matching style advice.

use serde::Serialize;

use crate::models::WeatherCondition;

/// At or above this many degrees the hot-weather advice wins over the code
pub const HOT_THRESHOLD_C: i32 = 35;

/// At or below this many degrees the cold-weather advice wins over the code
pub const COLD_THRESHOLD_C: i32 = 10;

const UNKNOWN_LABEL: &str = "Unknown";

/// WMO code, display label and the condition it implies
static WMO_CODES: &[(u16, &str, WeatherCondition)] = &[
    (0, "Clear Sky", WeatherCondition::Sunny),
    (1, "Mainly Clear", WeatherCondition::Sunny),
    (2, "Partly Cloudy", WeatherCondition::Mild),
    (3, "Overcast", WeatherCondition::Mild),
    (45, "Foggy", WeatherCondition::Mild),
    (48, "Depositing Fog", WeatherCondition::Mild),
    (51, "Light Drizzle", WeatherCondition::Rainy),
    (53, "Moderate Drizzle", WeatherCondition::Rainy),
    (55, "Heavy Drizzle", WeatherCondition::Rainy),
    (61, "Slight Rain", WeatherCondition::Rainy),
    (63, "Moderate Rain", WeatherCondition::Rainy),
    (65, "Heavy Rain", WeatherCondition::Rainy),
    (71, "Slight Snow", WeatherCondition::Cold),
    (73, "Moderate Snow", WeatherCondition::Cold),
    (75, "Heavy Snow", WeatherCondition::Cold),
    (80, "Slight Showers", WeatherCondition::Rainy),
    (81, "Moderate Showers", WeatherCondition::Rainy),
    (95, "Thunderstorm", WeatherCondition::Rainy),
];

/// What to wear for one weather condition
#[derive(Debug, Serialize)]
pub struct WeatherStyle {
    pub condition: WeatherCondition,
    pub suggestion: &'static str,
    pub colors: &'static [&'static str],
    pub fabrics: &'static [&'static str],
    pub avoid: &'static str,
}

static STYLES: &[WeatherStyle] = &[
    WeatherStyle {
        condition: WeatherCondition::Sunny,
        suggestion: "It's sunny today. Wear light, breathable fabrics like cotton or linen.",
        colors: &["White", "Sky Blue", "Coral", "Mint", "Yellow"],
        fabrics: &["Cotton", "Linen", "Chambray"],
        avoid: "Dark heavy fabrics, they absorb heat.",
    },
    WeatherStyle {
        condition: WeatherCondition::Mild,
        suggestion: "Mild weather today, good for layering with light jackets or cardigans.",
        colors: &["Beige", "Olive", "Navy", "Grey", "Sage"],
        fabrics: &["Denim", "Chino", "Light Wool"],
        avoid: "Overly heavy coats or sleeveless tops.",
    },
    WeatherStyle {
        condition: WeatherCondition::Rainy,
        suggestion: "It's raining. Wear water-resistant outerwear and avoid suede or light fabrics.",
        colors: &["Navy", "Charcoal", "Burgundy", "Forest Green"],
        fabrics: &["Nylon", "Polyester", "Waterproof Shell"],
        avoid: "Light colours, suede and raw silk.",
    },
    WeatherStyle {
        condition: WeatherCondition::Cold,
        suggestion: "Cold weather. Layer up with thermals, sweaters and a warm coat.",
        colors: &["Burgundy", "Camel", "Charcoal", "Navy", "Brown"],
        fabrics: &["Wool", "Fleece", "Thermal Knit", "Cashmere"],
        avoid: "Thin single-layer clothes.",
    },
    WeatherStyle {
        condition: WeatherCondition::Hot,
        suggestion: "Very hot today. Stick to loose, airy, light-coloured clothing.",
        colors: &["White", "Ivory", "Cream", "Peach", "Light Blue"],
        fabrics: &["Cotton", "Linen", "Rayon"],
        avoid: "Synthetic fabrics and dark heavy clothes.",
    },
];

/// Observed weather plus the advice derived from it
#[derive(Debug, Serialize)]
pub struct WeatherAdvice {
    pub code: Option<u16>,
    pub label: &'static str,
    pub temperature: Option<i32>,
    #[serde(flatten)]
    pub style: &'static WeatherStyle,
}

/// Label and condition for a WMO code; unknown codes read as mild
pub fn describe_code(code: u16) -> (&'static str, WeatherCondition) {
    WMO_CODES
        .iter()
        .find(|(known, _, _)| *known == code)
        .map(|&(_, label, condition)| (label, condition))
        .unwrap_or((UNKNOWN_LABEL, WeatherCondition::Mild))
}

/// Condition for the observed weather.
///
/// Temperatures past either threshold override the code. A moderate
/// temperature without a code reads as mild. `None` when nothing was observed.
pub fn resolve_condition(code: Option<u16>, temperature: Option<f64>) -> Option<WeatherCondition> {
    let from_code = code.map(|code| describe_code(code).1);

    match temperature.map(round_celsius) {
        Some(t) if t >= HOT_THRESHOLD_C => Some(WeatherCondition::Hot),
        Some(t) if t <= COLD_THRESHOLD_C => Some(WeatherCondition::Cold),
        Some(_) => Some(from_code.unwrap_or(WeatherCondition::Mild)),
        None => from_code,
    }
}

pub fn style_for(condition: WeatherCondition) -> &'static WeatherStyle {
    STYLES
        .iter()
        .find(|style| style.condition == condition)
        .unwrap_or(&STYLES[1])
}

/// Full advice for observed weather, or `None` when nothing was observed
pub fn advise(code: Option<u16>, temperature: Option<f64>) -> Option<WeatherAdvice> {
    let condition = resolve_condition(code, temperature)?;

    Some(WeatherAdvice {
        code,
        label: code.map_or(UNKNOWN_LABEL, |code| describe_code(code).0),
        temperature: temperature.map(round_celsius),
        style: style_for(condition),
    })
}

fn round_celsius(temperature: f64) -> i32 {
    temperature.round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_code() {
        assert_eq!(describe_code(0), ("Clear Sky", WeatherCondition::Sunny));
        assert_eq!(describe_code(63), ("Moderate Rain", WeatherCondition::Rainy));
        assert_eq!(describe_code(73), ("Moderate Snow", WeatherCondition::Cold));
        assert_eq!(describe_code(99), ("Unknown", WeatherCondition::Mild));
    }

    #[test]
    fn test_temperature_overrides_code() {
        assert_eq!(resolve_condition(Some(63), Some(36.0)), Some(WeatherCondition::Hot));
        assert_eq!(resolve_condition(Some(0), Some(10.0)), Some(WeatherCondition::Cold));
        assert_eq!(resolve_condition(Some(0), Some(34.4)), Some(WeatherCondition::Sunny));
        assert_eq!(resolve_condition(Some(0), Some(34.6)), Some(WeatherCondition::Hot));
        assert_eq!(resolve_condition(Some(2), Some(10.6)), Some(WeatherCondition::Mild));
    }

    #[test]
    fn test_partial_observations() {
        assert_eq!(resolve_condition(Some(95), None), Some(WeatherCondition::Rainy));
        assert_eq!(resolve_condition(None, Some(22.0)), Some(WeatherCondition::Mild));
        assert_eq!(resolve_condition(None, Some(-3.0)), Some(WeatherCondition::Cold));
        assert_eq!(resolve_condition(None, None), None);
    }

    #[test]
    fn test_every_condition_has_a_style() {
        for &condition in WeatherCondition::ALL {
            let style = style_for(condition);
            assert_eq!(style.condition, condition);
            assert!(!style.colors.is_empty());
            assert!(!style.fabrics.is_empty());
        }
    }

    #[test]
    fn test_advise() {
        let advice = advise(Some(61), Some(24.3)).unwrap();
        assert_eq!(advice.label, "Slight Rain");
        assert_eq!(advice.temperature, Some(24));
        assert_eq!(advice.style.condition, WeatherCondition::Rainy);

        let json = serde_json::to_value(&advice).unwrap();
        assert_eq!(json["condition"], "rainy");
        assert_eq!(json["fabrics"][0], "Nylon");

        assert!(advise(None, None).is_none());
    }
}
