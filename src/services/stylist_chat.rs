//! Rule-based styling assistant
//!
//! Messages are matched against keyword patterns in a fixed priority order and
//! answered with canned advice. The first matching intent wins.

use chrono::{Local, Timelike};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Suggested follow-up prompts shown with greetings and the fallback reply
pub const QUICK_REPLIES: &[&str] = &[
    "What to wear today?",
    "Outfit under ₹1000",
    "Office look ideas",
    "Wedding party outfit",
    "Rainy day fashion",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    DailyOutfit,
    Budget,
    Weather,
    Office,
    Interview,
    Wedding,
    College,
    Date,
    Wardrobe,
    TryOn,
    Premium,
    Dashboard,
    Help,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatReply {
    pub intent: Intent,
    pub reply: String,
    /// API path that serves related data, if any
    pub link: Option<&'static str>,
    pub quick_replies: Vec<&'static str>,
}

impl ChatReply {
    fn new(intent: Intent, reply: impl Into<String>, link: Option<&'static str>) -> Self {
        Self {
            intent,
            reply: reply.into(),
            link,
            quick_replies: Vec::new(),
        }
    }

    fn with_quick_replies(mut self) -> Self {
        self.quick_replies = QUICK_REPLIES.to_vec();
        self
    }
}

fn pattern(source: &str) -> Regex {
    Regex::new(source).expect("chat intent patterns are valid")
}

static GREETING: Lazy<Regex> = Lazy::new(|| pattern(r"^(hi|hello|hey|namaste|hii+)\b"));
static DAILY: Lazy<Regex> = Lazy::new(|| pattern(r"today|daily|morning|roz|what.*(wear|outfit)"));
static BUDGET: Lazy<Regex> =
    Lazy::new(|| pattern(r"₹|rs\.?|rupee|budget|cheap|affordable|low.cost|under\s*\d+"));
static AMOUNT: Lazy<Regex> = Lazy::new(|| pattern(r"\d[\d,]*"));
static WEATHER: Lazy<Regex> =
    Lazy::new(|| pattern(r"rain|rainy|wet|monsoon|sunny|hot|cold|winter|summer|weather"));
static OFFICE: Lazy<Regex> = Lazy::new(|| pattern(r"office|work|professional|formal"));
static INTERVIEW: Lazy<Regex> = Lazy::new(|| pattern(r"interview"));
static WEDDING: Lazy<Regex> = Lazy::new(|| pattern(r"wedding|shaadi|marriage|party|function"));
static COLLEGE: Lazy<Regex> = Lazy::new(|| pattern(r"college|student|casual"));
static DATE: Lazy<Regex> = Lazy::new(|| pattern(r"date|romantic|love"));
static WARDROBE: Lazy<Regex> = Lazy::new(|| pattern(r"wardrobe|clothes|my clothes|upload"));
static TRY_ON: Lazy<Regex> = Lazy::new(|| pattern(r"try.?on|virtual|preview|see how"));
static PREMIUM: Lazy<Regex> = Lazy::new(|| pattern(r"premium|subscribe|upgrade|paid|membership"));
static DASHBOARD: Lazy<Regex> = Lazy::new(|| pattern(r"dashboard|profile|my account|stats"));

/// Answers a chat message using the current local hour
pub fn respond(message: &str) -> ChatReply {
    respond_at(message, Local::now().hour())
}

/// Answers a chat message; `hour` (0-23) only affects the daily-outfit reply
pub fn respond_at(message: &str, hour: u32) -> ChatReply {
    let m = message.trim().to_lowercase();

    if GREETING.is_match(&m) {
        return ChatReply::new(
            Intent::Greeting,
            "Namaste! I'm your style assistant. Ask me about outfit ideas, budget tips, \
             occasion fashion or weather-based suggestions.",
            None,
        )
        .with_quick_replies();
    }

    if DAILY.is_match(&m) {
        let part = match hour {
            0..=11 => "morning",
            12..=16 => "afternoon",
            _ => "evening",
        };
        return ChatReply::new(
            Intent::DailyOutfit,
            format!(
                "For a great {} look today, try:\n\
                 Casual: cotton shirt + slim chinos + white sneakers\n\
                 Smart: Oxford shirt + dark jeans + loafers\n\
                 Ethnic: kurta + patiala or slim trousers + juttis",
                part
            ),
            Some("/api/v1/occasions"),
        );
    }

    if BUDGET.is_match(&m) {
        return budget_reply(&m);
    }

    if WEATHER.is_match(&m) {
        return ChatReply::new(
            Intent::Weather,
            "Weather outfit tips:\n\
             Rainy: dark waterproof jacket, chinos, closed shoes\n\
             Sunny or hot: white cotton tee, linen trousers, sandals\n\
             Cold: layered sweater + jacket + warm boots",
            Some("/api/v1/weather-style"),
        );
    }

    if OFFICE.is_match(&m) {
        return ChatReply::new(
            Intent::Office,
            "Office-ready looks:\n\
             Men: formal shirt + trousers + leather belt + Oxford shoes\n\
             Women: blazer + bootcut trousers + pointed pumps\n\
             Colours: navy, charcoal, white, grey",
            Some("/api/v1/occasions/office"),
        );
    }

    if INTERVIEW.is_match(&m) {
        return ChatReply::new(
            Intent::Interview,
            "Interview outfit:\n\
             Stick to formal, ironed clothes. First impressions matter.\n\
             Men: formal shirt + trousers + clean shoes\n\
             Women: formal salwar suit, saree or western blazer set\n\
             Avoid flashy jewellery, casual footwear and strong perfume.",
            Some("/api/v1/occasions/interview"),
        );
    }

    if WEDDING.is_match(&m) {
        return ChatReply::new(
            Intent::Wedding,
            "Wedding or party outfit:\n\
             Men: sherwani, bandhgala suit or Indo-western kurta\n\
             Women: lehenga, Anarkali, saree or gown\n\
             Accessories: statement jewellery, embroidered dupatta, mojris",
            Some("/api/v1/occasions/wedding"),
        );
    }

    if COLLEGE.is_match(&m) {
        return ChatReply::new(
            Intent::College,
            "College casual:\n\
             Graphic tee + ripped jeans + sneakers\n\
             Oversized hoodie + joggers + chunky shoes\n\
             Kurti + palazzo + flats for ethnic-casual",
            Some("/api/v1/occasions/college"),
        );
    }

    if DATE.is_match(&m) {
        return ChatReply::new(
            Intent::Date,
            "Date night outfit:\n\
             Men: dark jeans + fitted shirt + clean sneakers or loafers\n\
             Women: wrap dress, midi skirt with crop top, or an elegant co-ord set\n\
             Finish with subtle jewellery and a nice fragrance.",
            Some("/api/v1/occasions/date"),
        );
    }

    if WARDROBE.is_match(&m) {
        return ChatReply::new(
            Intent::Wardrobe,
            "Upload a photo of your clothes and I'll suggest outfits that match your style.",
            Some("/predict"),
        );
    }

    if TRY_ON.is_match(&m) {
        return ChatReply::new(
            Intent::TryOn,
            "Virtual try-on lets you preview a selected outfit over your own photo.",
            None,
        );
    }

    if PREMIUM.is_match(&m) {
        return ChatReply::new(
            Intent::Premium,
            "Premium will unlock unlimited styling and exclusive outfit collections. \
             It is coming soon, nothing to pay yet.",
            None,
        );
    }

    if DASHBOARD.is_match(&m) {
        return ChatReply::new(
            Intent::Dashboard,
            "Your dashboard shows your wardrobe summary, live weather with a style tip \
             and saved outfits.",
            None,
        );
    }

    ChatReply::new(
        Intent::Help,
        "I can help with outfit ideas for any occasion, budget outfits (₹500 to ₹3000+), \
         weather-based tips, wardrobe scanning and virtual try-on.",
        None,
    )
    .with_quick_replies()
}

/// First number in the message, ignoring thousands separators
fn mentioned_amount(message: &str) -> Option<u32> {
    AMOUNT
        .find(message)
        .and_then(|found| found.as_str().replace(',', "").parse().ok())
        .filter(|&amount| amount > 0)
}

fn budget_reply(message: &str) -> ChatReply {
    match mentioned_amount(message) {
        Some(amount) if amount <= 500 => ChatReply::new(
            Intent::Budget,
            "Under ₹500 looks:\n\
             Plain tee + joggers combo (around ₹299)\n\
             Kurta + leggings set (₹350 to ₹450)\n\
             Basic denim + solid tee (around ₹499)",
            Some("/api/v1/budget-outfits?tier=500"),
        ),
        Some(amount) if amount <= 1000 => ChatReply::new(
            Intent::Budget,
            "Under ₹1000 looks:\n\
             Casual shirt + chino combo (around ₹699)\n\
             Anarkali suit set (around ₹799)\n\
             Denim jacket + inner tee (around ₹899)",
            Some("/api/v1/budget-outfits?tier=1000"),
        ),
        _ => ChatReply::new(
            Intent::Budget,
            "Smart budgeting! Filter looks by ₹500, ₹1000 or ₹3000 to get curated outfit \
             combos with direct shopping links.",
            Some("/api/v1/budget-outfits"),
        ),
    }
}
