use serde::Serialize;

use crate::{
    models::{Gender, WeatherCondition},
    services::weather::{self, WeatherStyle},
};

/// A suggested look for one gender
#[derive(Debug, Serialize)]
pub struct Look {
    pub outfit: &'static str,
    pub colors: &'static [&'static str],
    pub footwear: &'static str,
    pub brands: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct BudgetGuide {
    pub label: &'static str,
    pub tier: &'static str,
}

/// Styling advice for one occasion
#[derive(Debug)]
pub struct OccasionGuide {
    pub key: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub mens: Look,
    pub womens: Look,
    pub accessories: &'static [&'static str],
    pub budget: BudgetGuide,
    pub weather_hot: &'static str,
    pub weather_rain: &'static str,
    pub weather_cold: &'static str,
    pub tip: &'static str,
}

/// Advice resolved for a gender and, optionally, the current weather
#[derive(Debug, Serialize)]
pub struct OccasionAdvice {
    pub occasion: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub gender: Gender,
    pub look: &'static Look,
    pub accessories: &'static [&'static str],
    pub budget: &'static BudgetGuide,
    pub weather_tip: Option<&'static str>,
    pub weather_style: Option<&'static WeatherStyle>,
    pub style_tip: &'static str,
}

pub static OCCASIONS: &[OccasionGuide] = &[
    OccasionGuide {
        key: "college",
        label: "College",
        description: "Fresh and comfortable for campus life",
        mens: Look {
            outfit: "Graphic tee + slim-fit jeans + white sneakers",
            colors: &["White", "Denim Blue", "Olive", "Charcoal"],
            footwear: "White canvas sneakers or casual trainers",
            brands: &["H&M", "Zara", "Uniqlo", "Roadster"],
        },
        womens: Look {
            outfit: "Oversized top + high-waist jeans + chunky sneakers",
            colors: &["Pastel Pink", "Sky Blue", "White", "Mint"],
            footwear: "Chunky sneakers or strappy flats",
            brands: &["Zara", "H&M", "Forever 21", "FabAlley"],
        },
        accessories: &["Backpack or tote bag", "Minimal stud earrings", "Digital watch", "Casual sunglasses"],
        budget: BudgetGuide { label: "₹800 – ₹2000", tier: "low-medium" },
        weather_hot: "Stick to cotton tees and breathable denim. Skip the hoodie.",
        weather_rain: "Carry a compact umbrella and pick dark bottoms that hide splashes.",
        weather_cold: "Add a hoodie, denim jacket or light bomber over the outfit.",
        tip: "Comfort comes first on campus. Iron-free fabrics save the morning rush.",
    },
    OccasionGuide {
        key: "office",
        label: "Office",
        description: "Professional, confident and polished",
        mens: Look {
            outfit: "Tucked formal shirt + slim trousers + leather belt",
            colors: &["White", "Light Blue", "Navy", "Grey", "Charcoal"],
            footwear: "Black or brown leather Oxfords or loafers",
            brands: &["Van Heusen", "Arrow", "Peter England", "Blackberrys"],
        },
        womens: Look {
            outfit: "Blazer + formal trousers or pencil skirt + blouse",
            colors: &["Navy", "Charcoal", "White", "Beige", "Burgundy"],
            footwear: "Block heels or classic pumps",
            brands: &["AND", "W", "Allen Solly Women", "Van Heusen Woman"],
        },
        accessories: &["Professional watch", "Leather laptop bag", "Minimal jewellery", "Belt matching the shoes"],
        budget: BudgetGuide { label: "₹1500 – ₹4000", tier: "medium-high" },
        weather_hot: "Use moisture-wicking shirts and light linen blazers on hot days.",
        weather_rain: "Keep a waterproof trench handy and avoid suede shoes.",
        weather_cold: "Layer a fine-knit sweater or structured blazer over the shirt.",
        tip: "Pressed, wrinkle-free clothes make the strongest professional impression.",
    },
    OccasionGuide {
        key: "interview",
        label: "Interview",
        description: "Make a powerful first impression",
        mens: Look {
            outfit: "White formal shirt + dark trousers + optional tie",
            colors: &["White", "Navy", "Charcoal", "Light Grey"],
            footwear: "Polished black Oxford or Derby shoes",
            brands: &["Arrow", "Van Heusen", "Raymond", "Louis Philippe"],
        },
        womens: Look {
            outfit: "Formal salwar suit or blazer over blouse + formal trousers",
            colors: &["Navy", "Charcoal", "White", "Taupe", "Muted Teal"],
            footwear: "Closed-toe block heels or formal flats",
            brands: &["AND", "Biba", "W", "Anouk"],
        },
        accessories: &["Minimal watch", "Simple stud earrings", "Professional bag", "Tidy leather belt"],
        budget: BudgetGuide { label: "₹2000 – ₹5000", tier: "medium-high" },
        weather_hot: "Choose a light, breathable shirt and carry a handkerchief.",
        weather_rain: "Wear waterproof shoes or pack a spare pair. Avoid colours that bleed.",
        weather_cold: "Add a formal overcoat or blazer that stays polished, not bulky.",
        tip: "Skip flashy accessories and strong fragrance. Confidence is the best accessory.",
    },
    OccasionGuide {
        key: "wedding",
        label: "Wedding",
        description: "Elegant, festive and celebratory",
        mens: Look {
            outfit: "Sherwani, bandhgala suit or embroidered kurta + churidar",
            colors: &["Ivory", "Gold", "Navy", "Maroon", "Champagne Beige"],
            footwear: "Embroidered mojris or formal leather shoes",
            brands: &["Manyavar", "Fabindia", "Meena Bazaar"],
        },
        womens: Look {
            outfit: "Embroidered lehenga, Anarkali suit or Banarasi saree",
            colors: &["Red", "Magenta", "Royal Blue", "Gold", "Emerald Green"],
            footwear: "Embellished sandals, wedges or traditional mojris",
            brands: &["Anita Dongre", "Biba", "W", "Fabindia", "Nykaa Fashion"],
        },
        accessories: &["Statement jewellery set", "Potli or clutch bag", "Coordinated dupatta", "Statement hair accessories"],
        budget: BudgetGuide { label: "₹3000 – ₹15000+", tier: "high" },
        weather_hot: "Choose breathable georgette or chiffon and avoid heavy velvet.",
        weather_rain: "Check the venue first and avoid trailing hemlines outdoors.",
        weather_cold: "Velvet or brocade works well. Add an embroidered pashmina.",
        tip: "Book the outfit weeks ahead for alterations and never debut new footwear on the day.",
    },
    OccasionGuide {
        key: "casual",
        label: "Casual",
        description: "Relaxed everyday style for any outing",
        mens: Look {
            outfit: "Plain tee or polo + chinos or joggers + casual sneakers",
            colors: &["Navy", "White", "Olive", "Grey Marl", "Mustard"],
            footwear: "Casual sneakers or slip-ons",
            brands: &["H&M", "Zara", "Uniqlo", "Roadster", "Bewakoof"],
        },
        womens: Look {
            outfit: "Crop tee + high-waist jeans or midi skirt + flats or sneakers",
            colors: &["Pastel", "White", "Denim Blue", "Terracotta", "Sage Green"],
            footwear: "White sneakers, strappy flats or block sandals",
            brands: &["Zara", "H&M", "FabAlley", "Vero Moda", "Koovs"],
        },
        accessories: &["Crossbody bag or tote", "Sunglasses", "Minimal bracelet or watch", "Optional cap or beanie"],
        budget: BudgetGuide { label: "₹500 – ₹1500", tier: "low-medium" },
        weather_hot: "Cotton tees, linen shorts and sandals keep things breezy.",
        weather_rain: "Dark bottoms, waterproof footwear and a compact umbrella. Skip linen.",
        weather_cold: "Layer a t-shirt, denim shirt and light jacket.",
        tip: "Casual never means sloppy. Fit matters even in a tee and jeans.",
    },
    OccasionGuide {
        key: "date",
        label: "Date Night",
        description: "Charming, confident and stylish",
        mens: Look {
            outfit: "Fitted solid shirt + dark slim jeans + clean sneakers or loafers",
            colors: &["Black", "Navy", "Burgundy", "White", "Dusty Blue"],
            footwear: "Clean white sneakers, suede loafers or Chelsea boots",
            brands: &["Zara", "H&M", "Jack & Jones", "Selected Homme"],
        },
        womens: Look {
            outfit: "Wrap midi dress, flowy co-ord set or fitted blazer + skirt",
            colors: &["Red", "Black", "Dusty Rose", "Emerald", "Nude Beige"],
            footwear: "Strappy heels, block heels or ankle boots",
            brands: &["Zara", "Vero Moda", "ONLY", "FabAlley", "Nykaa Fashion"],
        },
        accessories: &["Elegant watch or bracelet", "Subtle perfume", "Small clutch or sling bag", "Delicate necklace"],
        budget: BudgetGuide { label: "₹1500 – ₹4000", tier: "medium" },
        weather_hot: "Light chiffon or cotton, no heavy layering.",
        weather_rain: "Dark outfits are safer. Go for closed-toe heels or boots.",
        weather_cold: "A faux-leather or suede jacket adds warmth. Pair with booties.",
        tip: "Dress one step above the venue's dress code.",
    },
];

/// Looks up an occasion by key, ignoring case
pub fn find(key: &str) -> Option<&'static OccasionGuide> {
    let key = key.trim();
    OCCASIONS
        .iter()
        .find(|guide| guide.key.eq_ignore_ascii_case(key))
}

/// Keys of every known occasion, in display order
pub fn occasion_keys() -> Vec<&'static str> {
    OCCASIONS.iter().map(|guide| guide.key).collect()
}

impl OccasionGuide {
    /// The look for a gender; anything other than womens gets the mens look
    pub fn look_for(&'static self, gender: Gender) -> &'static Look {
        match gender {
            Gender::Womens => &self.womens,
            Gender::Mens | Gender::Unisex => &self.mens,
        }
    }

    /// Weather tip for a condition; mild weather falls back to the hot-day tip
    pub fn weather_tip(&self, condition: WeatherCondition) -> &'static str {
        match condition {
            WeatherCondition::Hot | WeatherCondition::Sunny | WeatherCondition::Mild => {
                self.weather_hot
            }
            WeatherCondition::Rainy => self.weather_rain,
            WeatherCondition::Cold => self.weather_cold,
        }
    }

    pub fn advise(&'static self, gender: Gender, weather: Option<WeatherCondition>) -> OccasionAdvice {
        let gender = match gender {
            Gender::Womens => Gender::Womens,
            Gender::Mens | Gender::Unisex => Gender::Mens,
        };

        OccasionAdvice {
            occasion: self.key,
            label: self.label,
            description: self.description,
            gender,
            look: self.look_for(gender),
            accessories: self.accessories,
            budget: &self.budget,
            weather_tip: weather.map(|condition| self.weather_tip(condition)),
            weather_style: weather.map(weather::style_for),
            style_tip: self.tip,
        }
    }
}
