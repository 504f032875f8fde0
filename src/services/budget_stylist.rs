use serde::Serialize;

use crate::{
    models::{BudgetTier, Gender, RetailerLinks},
    services::enrichment::retailer_links,
};

/// A curated look that fits within one or more spending bands
#[derive(Debug, Serialize)]
pub struct BudgetLook {
    pub name: &'static str,
    pub gender: Gender,
    pub tiers: &'static [BudgetTier],
    pub occasion: &'static str,
    pub items: &'static [&'static str],
    pub price_estimate: &'static str,
    pub tip: &'static str,
    pub colors: &'static [&'static str],
    #[serde(skip)]
    pub search_query: &'static str,
}

#[derive(Debug, Serialize)]
pub struct BudgetOutfit {
    #[serde(flatten)]
    pub look: &'static BudgetLook,
    pub shopping_links: RetailerLinks,
}

pub static BUDGET_LOOKS: &[BudgetLook] = &[
    BudgetLook {
        name: "Classic College Casual",
        gender: Gender::Unisex,
        tiers: &[BudgetTier::Under500],
        occasion: "Casual / College",
        items: &["Solid cotton round-neck tee", "Jogger / trackpant", "White canvas sneakers"],
        price_estimate: "₹350 – ₹499",
        tip: "Tee and jogger sets are often available under ₹299. Grab two to rotate.",
        colors: &["White", "Navy", "Grey", "Black"],
        search_query: "cotton tee jogger combo",
    },
    BudgetLook {
        name: "Budget Ethnic Kurti Set",
        gender: Gender::Womens,
        tiers: &[BudgetTier::Under500],
        occasion: "Casual / Daily",
        items: &["Printed cotton kurti", "Leggings / churidar", "Flats (kolhapuri or slippers)"],
        price_estimate: "₹380 – ₹480",
        tip: "Block-print kurtis feel ethnic and fresh without spending much.",
        colors: &["Coral", "Sky Blue", "Mint", "Mustard"],
        search_query: "cotton kurti leggings combo",
    },
    BudgetLook {
        name: "Smart Casual Day Out",
        gender: Gender::Mens,
        tiers: &[BudgetTier::Under1000],
        occasion: "Casual / Outing",
        items: &["Oxford button-down shirt", "Slim chino trousers", "White sneakers or loafers"],
        price_estimate: "₹750 – ₹999",
        tip: "Value chinos under ₹599 are easy to find and pair with almost anything.",
        colors: &["Khaki", "Navy", "Olive", "Beige"],
        search_query: "slim chino shirt combo men",
    },
    BudgetLook {
        name: "Trendy Co-Ord Set",
        gender: Gender::Womens,
        tiers: &[BudgetTier::Under1000],
        occasion: "Casual / Brunch",
        items: &["Crop top + wide-leg palazzo co-ord", "Strappy flat sandals", "Mini sling bag"],
        price_estimate: "₹799 – ₹999",
        tip: "Co-ords look expensive but plenty of good sets sell for under ₹800.",
        colors: &["Lavender", "Peach", "White", "Sage Green"],
        search_query: "women coord set palazzo",
    },
    BudgetLook {
        name: "Formal Office Wardrobe",
        gender: Gender::Mens,
        tiers: &[BudgetTier::Under3000],
        occasion: "Office / Formal",
        items: &[
            "Van Heusen / Arrow formal shirt",
            "Slim formal trousers",
            "Leather Oxford shoes",
            "Premium leather belt",
        ],
        price_estimate: "₹2200 – ₹3000",
        tip: "Two or three quality formal shirts outlast many cheaper ones.",
        colors: &["White", "Light Blue", "Grey", "Lavender"],
        search_query: "van heusen formal shirt",
    },
    BudgetLook {
        name: "Festive Anarkali Look",
        gender: Gender::Womens,
        tiers: &[BudgetTier::Under3000],
        occasion: "Wedding / Puja / Festival",
        items: &[
            "Embroidered Anarkali suit",
            "Chooridar / cigarette pants",
            "Embellished heels or mojris",
            "Dupatta with border",
        ],
        price_estimate: "₹1800 – ₹2999",
        tip: "Festive collections from Biba and W regularly land under ₹2500.",
        colors: &["Magenta", "Royal Blue", "Teal", "Gold", "Maroon"],
        search_query: "anarkali suit embroidered",
    },
    BudgetLook {
        name: "Premium Smart Casual",
        gender: Gender::Unisex,
        tiers: &[BudgetTier::Custom],
        occasion: "Outing / Date / Travel",
        items: &[
            "Premium denim jeans",
            "Linen/cotton casual shirt or top",
            "Branded sneakers",
            "Stylish belt or sling bag",
        ],
        price_estimate: "₹3500+",
        tip: "Spend on fit, not just brand. A well-fitted mid-range piece beats an ill-fitting designer item.",
        colors: &["Indigo Blue", "Off-White", "Olive", "Charcoal"],
        search_query: "premium denim casual outfit",
    },
];

impl BudgetLook {
    fn in_tier(&self, tier: BudgetTier) -> bool {
        self.tiers.contains(&tier)
    }

    /// Whether the look suits a custom spend of `amount` rupees
    fn fits_amount(&self, amount: u32) -> bool {
        match amount {
            0..=500 => self.in_tier(BudgetTier::Under500),
            501..=1000 => self.in_tier(BudgetTier::Under1000) || self.in_tier(BudgetTier::Under500),
            1001..=3000 => self.in_tier(BudgetTier::Under3000) || self.in_tier(BudgetTier::Under1000),
            _ => true,
        }
    }
}

/// Looks matching a spending band and gender, in curated order
///
/// `None` for tier or gender means no filtering on that axis. A custom tier
/// with a positive amount selects by amount range instead of by tag.
/// Gender filtering always keeps unisex looks.
pub fn budget_outfits(
    tier: Option<BudgetTier>,
    gender: Option<Gender>,
    custom_amount: Option<u32>,
) -> Vec<BudgetOutfit> {
    let amount = custom_amount.filter(|&amount| amount > 0);

    let outfits: Vec<BudgetOutfit> = BUDGET_LOOKS
        .iter()
        .filter(|look| match (tier, amount) {
            (None, _) => true,
            (Some(BudgetTier::Custom), Some(amount)) => look.fits_amount(amount),
            (Some(tier), _) => look.in_tier(tier),
        })
        .filter(|look| match gender {
            None => true,
            Some(gender) => look.gender == gender || look.gender == Gender::Unisex,
        })
        .map(|look| BudgetOutfit {
            look,
            shopping_links: retailer_links(look.search_query),
        })
        .collect();

    tracing::debug!(
        tier = ?tier,
        gender = ?gender,
        custom_amount = ?amount,
        matches = outfits.len(),
        "Budget outfits filtered"
    );

    outfits
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(outfits: &[BudgetOutfit]) -> Vec<&'static str> {
        outfits.iter().map(|o| o.look.name).collect()
    }

    #[test]
    fn test_no_filters_returns_everything() {
        assert_eq!(budget_outfits(None, None, None).len(), BUDGET_LOOKS.len());
    }

    #[test]
    fn test_tier_filter() {
        assert_eq!(
            names(&budget_outfits(Some(BudgetTier::Under500), None, None)),
            vec!["Classic College Casual", "Budget Ethnic Kurti Set"]
        );
        assert_eq!(
            names(&budget_outfits(Some(BudgetTier::Custom), None, None)),
            vec!["Premium Smart Casual"]
        );
    }

    #[test]
    fn test_gender_filter_keeps_unisex() {
        let outfits = budget_outfits(Some(BudgetTier::Under500), Some(Gender::Mens), None);
        assert_eq!(names(&outfits), vec!["Classic College Casual"]);

        let outfits = budget_outfits(None, Some(Gender::Womens), None);
        assert!(outfits
            .iter()
            .all(|o| matches!(o.look.gender, Gender::Womens | Gender::Unisex)));
        assert_eq!(outfits.len(), 5);
    }

    #[test]
    fn test_custom_amount_ranges() {
        let low = budget_outfits(Some(BudgetTier::Custom), None, Some(400));
        assert_eq!(
            names(&low),
            vec!["Classic College Casual", "Budget Ethnic Kurti Set"]
        );

        let mid = budget_outfits(Some(BudgetTier::Custom), None, Some(1000));
        assert_eq!(mid.len(), 4);

        let upper = budget_outfits(Some(BudgetTier::Custom), None, Some(2500));
        assert_eq!(
            names(&upper),
            vec![
                "Smart Casual Day Out",
                "Trendy Co-Ord Set",
                "Formal Office Wardrobe",
                "Festive Anarkali Look"
            ]
        );

        let high = budget_outfits(Some(BudgetTier::Custom), None, Some(5000));
        assert_eq!(high.len(), BUDGET_LOOKS.len());
    }

    #[test]
    fn test_zero_amount_falls_back_to_custom_tag() {
        let outfits = budget_outfits(Some(BudgetTier::Custom), None, Some(0));
        assert_eq!(names(&outfits), vec!["Premium Smart Casual"]);
    }

    #[test]
    fn test_amount_ignored_for_fixed_tiers() {
        let outfits = budget_outfits(Some(BudgetTier::Under3000), None, Some(400));
        assert_eq!(outfits.len(), 2);
    }

    #[test]
    fn test_links_use_search_query() {
        let outfits = budget_outfits(Some(BudgetTier::Under3000), Some(Gender::Mens), None);
        assert_eq!(
            outfits[0].shopping_links.amazon,
            "https://www.amazon.in/s?k=van+heusen+formal+shirt"
        );
    }

    #[test]
    fn test_serialized_shape() {
        let outfits = budget_outfits(Some(BudgetTier::Custom), None, None);
        let json = serde_json::to_value(&outfits[0]).unwrap();

        assert_eq!(json["name"], "Premium Smart Casual");
        assert_eq!(json["gender"], "unisex");
        assert_eq!(json["tiers"][0], "custom");
        assert!(json["shopping_links"]["meesho"].is_string());
        assert!(json.get("search_query").is_none());
    }
}
