use crate::{
    models::{HardConstraints, Outfit, RecommendationCriteria, Season, SoftPreferences},
    services::catalog::Catalog,
};

/// Number of outfits returned per recommendation
pub const RESULT_LIMIT: usize = 3;

/// Selects up to [`RESULT_LIMIT`] outfits for the given criteria
///
/// A missing season preference resolves to the current calendar season.
pub fn select_outfits<'a>(catalog: &'a Catalog, criteria: &RecommendationCriteria) -> Vec<&'a Outfit> {
    select_outfits_with_season(catalog, criteria, Season::current())
}

/// Selects outfits, using `default_season` when the request has no season preference
///
/// The pipeline is:
/// 1. Hard filter on occasion, climate, age group and gender compatibility
/// 2. Backfill with occasion- and gender-compatible outfits up to the limit
/// 3. Soft filters (color, budget, brand, style tag, season), each skipped if
///    it would leave nothing
/// 4. Backfill again after soft filtering
/// 5. Truncate to the limit
///
/// Candidate order is always catalog order of the survivors followed by
/// backfilled outfits in catalog order. There is no scoring.
pub fn select_outfits_with_season<'a>(
    catalog: &'a Catalog,
    criteria: &RecommendationCriteria,
    default_season: Season,
) -> Vec<&'a Outfit> {
    let hard = &criteria.hard;

    let mut candidates: Vec<&Outfit> = catalog
        .outfits()
        .iter()
        .filter(|outfit| matches_hard_constraints(outfit, hard))
        .collect();
    let hard_matches = candidates.len();

    // Climate and age group are relaxed; occasion and gender never are.
    let compatible = |outfit: &Outfit| {
        outfit.occasion == hard.occasion && outfit.gender.is_compatible_with(hard.clothing_style)
    };

    backfill(&mut candidates, catalog, &compatible);
    let before_soft = candidates.len();

    let mut candidates = apply_soft_preferences(candidates, &criteria.soft, default_season);
    let after_soft = candidates.len();

    backfill(&mut candidates, catalog, &compatible);
    candidates.truncate(RESULT_LIMIT);

    tracing::debug!(
        occasion = %hard.occasion,
        climate = %hard.climate,
        clothing_style = %hard.clothing_style,
        age_group = %hard.age_group,
        hard_matches,
        before_soft,
        after_soft,
        selected = candidates.len(),
        "Outfit selection completed"
    );

    candidates
}

/// Keeps only candidates satisfying `predicate`, unless that would leave none,
/// in which case the candidates are returned unchanged.
pub fn narrow_or_keep<'a, P>(candidates: Vec<&'a Outfit>, predicate: P) -> Vec<&'a Outfit>
where
    P: Fn(&Outfit) -> bool,
{
    let narrowed: Vec<&Outfit> = candidates
        .iter()
        .copied()
        .filter(|&outfit| predicate(outfit))
        .collect();

    if narrowed.is_empty() {
        candidates
    } else {
        narrowed
    }
}

fn matches_hard_constraints(outfit: &Outfit, hard: &HardConstraints) -> bool {
    outfit.occasion == hard.occasion
        && outfit.climate.contains(&hard.climate)
        && outfit.age_group.contains(&hard.age_group)
        && outfit.gender.is_compatible_with(hard.clothing_style)
}

/// Appends catalog outfits accepted by `eligible` until the limit is reached,
/// skipping outfits already selected.
fn backfill<'a, F>(candidates: &mut Vec<&'a Outfit>, catalog: &'a Catalog, eligible: &F)
where
    F: Fn(&Outfit) -> bool,
{
    for outfit in catalog.outfits() {
        if candidates.len() >= RESULT_LIMIT {
            break;
        }
        if eligible(outfit) && !candidates.iter().any(|c| c.id == outfit.id) {
            candidates.push(outfit);
        }
    }
}

fn apply_soft_preferences<'a>(
    candidates: Vec<&'a Outfit>,
    soft: &SoftPreferences,
    default_season: Season,
) -> Vec<&'a Outfit> {
    let season = soft.season.unwrap_or(default_season);

    let candidates = soft_step("color", candidates, !soft.colors.is_empty(), |outfit| {
        overlaps(&outfit.colors, &soft.colors)
    });
    let candidates = soft_step("budget", candidates, soft.budget.is_some(), |outfit| {
        Some(outfit.budget) == soft.budget
    });
    let candidates = soft_step("brand", candidates, !soft.brands.is_empty(), |outfit| {
        overlaps(&outfit.brands, &soft.brands)
    });
    let candidates = soft_step("style_tag", candidates, !soft.style_tags.is_empty(), |outfit| {
        overlaps(&outfit.style_tags, &soft.style_tags)
    });
    soft_step("season", candidates, true, |outfit| {
        outfit.season.contains(&season)
    })
}

fn soft_step<'a, P>(
    name: &'static str,
    candidates: Vec<&'a Outfit>,
    active: bool,
    predicate: P,
) -> Vec<&'a Outfit>
where
    P: Fn(&Outfit) -> bool,
{
    if !active {
        return candidates;
    }

    let narrowed = narrow_or_keep(candidates, &predicate);
    if narrowed.first().is_some_and(|&outfit| !predicate(outfit)) {
        tracing::debug!(filter = name, "Soft filter would remove every candidate, skipped");
    }
    narrowed
}

/// Case-insensitive "any value in common" test, folding non-ASCII letters too
fn overlaps(values: &[String], wanted: &[String]) -> bool {
    let wanted: Vec<String> = wanted.iter().map(|w| w.to_lowercase()).collect();
    values
        .iter()
        .any(|value| wanted.contains(&value.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AgeGroup, Budget, Climate, Gender, Occasion};

    fn catalog() -> Catalog {
        Catalog::embedded().unwrap()
    }

    fn criteria(
        occasion: Occasion,
        climate: Climate,
        clothing_style: Gender,
        age_group: AgeGroup,
    ) -> RecommendationCriteria {
        RecommendationCriteria {
            hard: HardConstraints {
                occasion,
                climate,
                clothing_style,
                age_group,
            },
            soft: SoftPreferences::default(),
        }
    }

    fn names(outfits: &[&Outfit]) -> Vec<String> {
        outfits.iter().map(|o| o.name.clone()).collect()
    }

    #[test]
    fn test_narrow_or_keep_narrows() {
        let catalog = catalog();
        let all: Vec<&Outfit> = catalog.outfits().iter().collect();

        let formal = narrow_or_keep(all, |o| o.occasion == Occasion::Formal);
        assert_eq!(formal.len(), 9);
        assert!(formal.iter().all(|o| o.occasion == Occasion::Formal));
    }

    #[test]
    fn test_narrow_or_keep_keeps_when_everything_would_be_removed() {
        let catalog = catalog();
        let some: Vec<&Outfit> = catalog.outfits().iter().take(4).collect();

        let kept = narrow_or_keep(some.clone(), |_| false);
        assert_eq!(names(&kept), names(&some));
    }

    #[test]
    fn test_business_formal_suit_for_cold_mens_adult() {
        let catalog = catalog();
        let request = criteria(Occasion::Formal, Climate::Cold, Gender::Mens, AgeGroup::Adult);

        for season in Season::ALL {
            let selected = select_outfits_with_season(&catalog, &request, *season);
            assert_eq!(selected.len(), 3, "season {}", season);
            assert_eq!(selected[0].name, "Business Formal Suit", "season {}", season);
        }
    }

    #[test]
    fn test_backfill_relaxes_climate_in_catalog_order() {
        let catalog = catalog();
        let request = criteria(Occasion::Formal, Climate::Cold, Gender::Mens, AgeGroup::Adult);

        let selected = select_outfits_with_season(&catalog, &request, Season::Summer);
        assert_eq!(
            names(&selected),
            vec![
                "Business Formal Suit",
                "Lightweight Summer Suit",
                "Smart Business Casual"
            ]
        );
    }

    #[test]
    fn test_final_backfill_after_season_filter() {
        let catalog = catalog();
        let request = criteria(Occasion::Formal, Climate::Cold, Gender::Mens, AgeGroup::Adult);

        // Winter drops the summer suit, which is then re-added behind the survivors
        let selected = select_outfits_with_season(&catalog, &request, Season::Winter);
        assert_eq!(
            names(&selected),
            vec![
                "Business Formal Suit",
                "Smart Business Casual",
                "Lightweight Summer Suit"
            ]
        );
    }

    #[test]
    fn test_low_budget_hot_casual_includes_both_basics() {
        let catalog = catalog();
        let mut request = criteria(Occasion::Casual, Climate::Hot, Gender::Unisex, AgeGroup::Young);
        request.soft.budget = Some(Budget::Low);

        for season in Season::ALL {
            let selected = names(&select_outfits_with_season(&catalog, &request, *season));
            assert_eq!(selected.len(), 3, "season {}", season);
            assert!(selected.contains(&"Summer Breezy Outfit".to_string()), "season {}", season);
            assert!(selected.contains(&"Basic Unisex Casual".to_string()), "season {}", season);
        }
    }

    #[test]
    fn test_unmatched_budget_leaves_candidates_unchanged() {
        let catalog = catalog();
        let request = criteria(Occasion::Formal, Climate::Cold, Gender::Mens, AgeGroup::Adult);
        let mut with_budget = request.clone();
        with_budget.soft.budget = Some(Budget::Low);

        let baseline = select_outfits_with_season(&catalog, &request, Season::Summer);
        let filtered = select_outfits_with_season(&catalog, &with_budget, Season::Summer);
        assert_eq!(names(&filtered), names(&baseline));
    }

    #[test]
    fn test_color_preference_is_case_insensitive() {
        let catalog = catalog();
        let mut request = criteria(Occasion::Casual, Climate::Hot, Gender::Unisex, AgeGroup::Young);
        request.soft.colors = vec!["neon green".to_string()];

        let selected = select_outfits_with_season(&catalog, &request, Season::Summer);
        assert_eq!(
            names(&selected),
            vec!["Athleisure Comfort", "Summer Breezy Outfit", "Basic Unisex Casual"]
        );
    }

    #[test]
    fn test_overlaps_folds_unicode_case() {
        let values = vec!["Écru".to_string(), "Navy".to_string()];
        assert!(overlaps(&values, &["ÉCRU".to_string()]));
        assert!(overlaps(&values, &["navy".to_string()]));
        assert!(!overlaps(&values, &["ecru".to_string()]));
    }

    #[test]
    fn test_brand_preference_matches_any_overlap() {
        let catalog = catalog();
        let mut request = criteria(Occasion::Casual, Climate::Hot, Gender::Unisex, AgeGroup::Young);
        request.soft.brands = vec!["Gucci".to_string(), "UNIQLO".to_string()];

        let selected = select_outfits_with_season(&catalog, &request, Season::Summer);
        assert_eq!(selected[0].name, "Summer Breezy Outfit");
        assert_eq!(selected[1].name, "Basic Unisex Casual");
    }

    #[test]
    fn test_style_tag_preference() {
        let catalog = catalog();
        let mut request = criteria(Occasion::Casual, Climate::Hot, Gender::Womens, AgeGroup::Young);
        request.soft.style_tags = vec!["Boho".to_string()];

        let selected = select_outfits_with_season(&catalog, &request, Season::Summer);
        assert_eq!(selected[0].name, "Boho Festival Dress");
        assert_eq!(selected.len(), 3);
    }

    #[test]
    fn test_unknown_preferences_are_all_skipped() {
        let catalog = catalog();
        let request = criteria(Occasion::Casual, Climate::Cold, Gender::Mens, AgeGroup::Young);
        let mut with_prefs = request.clone();
        with_prefs.soft.colors = vec!["Fuchsia".to_string()];
        with_prefs.soft.brands = vec!["Unknown Label".to_string()];
        with_prefs.soft.style_tags = vec!["avant-garde".to_string()];

        assert_eq!(
            names(&select_outfits_with_season(&catalog, &with_prefs, Season::Winter)),
            names(&select_outfits_with_season(&catalog, &request, Season::Winter))
        );
    }

    #[test]
    fn test_mens_request_never_returns_womens_outfits() {
        let catalog = catalog();
        let mut request = criteria(Occasion::Casual, Climate::Cold, Gender::Mens, AgeGroup::Senior);
        request.soft.colors = vec!["Burgundy".to_string()];

        let selected = select_outfits_with_season(&catalog, &request, Season::Winter);
        assert_eq!(selected.len(), 3);
        assert!(selected.iter().all(|o| o.gender != Gender::Womens));
    }

    #[test]
    fn test_empty_catalog_returns_nothing() {
        let catalog = Catalog::new(vec![]).unwrap();
        let request = RecommendationCriteria::default();
        assert!(select_outfits_with_season(&catalog, &request, Season::Spring).is_empty());
    }

    #[test]
    fn test_no_occasion_match_returns_nothing() {
        let full = catalog();
        let casual_only: Vec<Outfit> = full
            .outfits()
            .iter()
            .filter(|o| o.occasion == Occasion::Casual)
            .cloned()
            .collect();
        let catalog = Catalog::new(casual_only).unwrap();
        let request = criteria(Occasion::Formal, Climate::Cold, Gender::Mens, AgeGroup::Adult);

        assert!(select_outfits_with_season(&catalog, &request, Season::Fall).is_empty());
    }

    #[test]
    fn test_small_catalog_returns_what_exists() {
        let full = catalog();
        let two: Vec<Outfit> = full.outfits().iter().take(2).cloned().collect();
        let catalog = Catalog::new(two).unwrap();
        let request = criteria(Occasion::Casual, Climate::Cold, Gender::Mens, AgeGroup::Senior);

        assert_eq!(select_outfits_with_season(&catalog, &request, Season::Fall).len(), 2);
    }

    #[test]
    fn test_selection_is_deterministic() {
        let catalog = catalog();
        let mut request = criteria(Occasion::Formal, Climate::Moderate, Gender::Womens, AgeGroup::Adult);
        request.soft.colors = vec!["black".to_string()];

        let first = names(&select_outfits_with_season(&catalog, &request, Season::Fall));
        let second = names(&select_outfits_with_season(&catalog, &request, Season::Fall));
        assert_eq!(first, second);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn any_criteria() -> impl Strategy<Value = (RecommendationCriteria, Season)> {
            (
                0..Occasion::ALL.len(),
                0..Climate::ALL.len(),
                0..Gender::ALL.len(),
                0..AgeGroup::ALL.len(),
                proptest::option::of(0..Budget::ALL.len()),
                0..Season::ALL.len(),
                proptest::sample::subsequence(vec!["Navy", "black", "White", "Camel", "Teal"], 0..3),
            )
                .prop_map(|(o, c, g, a, b, s, colors)| {
                    let criteria = RecommendationCriteria {
                        hard: HardConstraints {
                            occasion: Occasion::ALL[o],
                            climate: Climate::ALL[c],
                            clothing_style: Gender::ALL[g],
                            age_group: AgeGroup::ALL[a],
                        },
                        soft: SoftPreferences {
                            colors: colors.into_iter().map(String::from).collect(),
                            budget: b.map(|i| Budget::ALL[i]),
                            ..SoftPreferences::default()
                        },
                    };
                    (criteria, Season::ALL[s])
                })
        }

        proptest! {
            #[test]
            fn always_three_matching_outfits((request, season) in any_criteria()) {
                let catalog = Catalog::embedded().unwrap();
                let selected = select_outfits_with_season(&catalog, &request, season);

                prop_assert_eq!(selected.len(), RESULT_LIMIT);
                for outfit in &selected {
                    prop_assert_eq!(outfit.occasion, request.hard.occasion);
                    prop_assert!(outfit.gender.is_compatible_with(request.hard.clothing_style));
                }
            }

            #[test]
            fn no_duplicates_and_deterministic((request, season) in any_criteria()) {
                let catalog = Catalog::embedded().unwrap();
                let first = names(&select_outfits_with_season(&catalog, &request, season));
                let second = names(&select_outfits_with_season(&catalog, &request, season));

                let mut unique = first.clone();
                unique.sort();
                unique.dedup();
                prop_assert_eq!(unique.len(), first.len());
                prop_assert_eq!(first, second);
            }
        }
    }
}
