use url::form_urlencoded;

use crate::{
    models::{EnrichedOutfit, Outfit, RetailerLinks, ShoppingLink},
    services::ratings::{average_rating, RatingsStore},
};

const AMAZON_SEARCH_URL: &str = "https://www.amazon.in/s?k=";
const FLIPKART_SEARCH_URL: &str = "https://www.flipkart.com/search?q=";
const MEESHO_SEARCH_URL: &str = "https://www.meesho.com/search?q=";

/// Form-encodes text for use as a search query value (spaces become `+`)
pub fn encode_query(text: &str) -> String {
    form_urlencoded::byte_serialize(text.as_bytes()).collect()
}

/// Search URLs for `query` at every retail partner
pub fn retailer_links(query: &str) -> RetailerLinks {
    let encoded = encode_query(query);
    RetailerLinks {
        amazon: format!("{}{}", AMAZON_SEARCH_URL, encoded),
        flipkart: format!("{}{}", FLIPKART_SEARCH_URL, encoded),
        meesho: format!("{}{}", MEESHO_SEARCH_URL, encoded),
    }
}

/// One shopping link entry per item, in item order
pub fn shopping_links(items: &[String]) -> Vec<ShoppingLink> {
    items
        .iter()
        .map(|item| ShoppingLink {
            item: item.clone(),
            links: retailer_links(item),
        })
        .collect()
}

/// Copies an outfit and attaches shopping links and its average rating
///
/// A failing ratings lookup is logged and reported as no rating rather than
/// failing the whole recommendation.
pub async fn enrich_outfit(outfit: &Outfit, ratings: &dyn RatingsStore) -> EnrichedOutfit {
    let average_rating = match ratings.ratings(&outfit.id).await {
        Ok(values) => average_rating(&values),
        Err(e) => {
            tracing::warn!(
                outfit_id = %outfit.id,
                error = %e,
                "Ratings lookup failed, reporting no rating"
            );
            0.0
        }
    };

    EnrichedOutfit {
        outfit: outfit.clone(),
        shopping_links: shopping_links(&outfit.items),
        average_rating,
    }
}

/// Enriches each outfit, preserving order
pub async fn enrich_outfits(outfits: &[&Outfit], ratings: &dyn RatingsStore) -> Vec<EnrichedOutfit> {
    let mut enriched = Vec::with_capacity(outfits.len());
    for outfit in outfits {
        enriched.push(enrich_outfit(outfit, ratings).await);
    }
    enriched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::services::catalog::Catalog;
    use crate::services::ratings::MockRatingsStore;

    #[test]
    fn test_encode_query() {
        assert_eq!(encode_query("Slim chino trousers"), "Slim+chino+trousers");
        assert_eq!(encode_query("Levi's & co"), "Levi%27s+%26+co");
    }

    #[test]
    fn test_retailer_links() {
        let links = retailer_links("White canvas sneakers");
        assert_eq!(links.amazon, "https://www.amazon.in/s?k=White+canvas+sneakers");
        assert_eq!(
            links.flipkart,
            "https://www.flipkart.com/search?q=White+canvas+sneakers"
        );
        assert_eq!(links.meesho, "https://www.meesho.com/search?q=White+canvas+sneakers");
    }

    #[test]
    fn test_shopping_links_follow_item_order() {
        let catalog = Catalog::embedded().unwrap();
        let outfit = catalog.get("formal-business-suit").unwrap();

        let links = shopping_links(&outfit.items);
        assert_eq!(links.len(), outfit.items.len());
        for (link, item) in links.iter().zip(&outfit.items) {
            assert_eq!(&link.item, item);
            let encoded = encode_query(item);
            assert!(link.links.amazon.contains(&encoded));
            assert!(link.links.flipkart.contains(&encoded));
            assert!(link.links.meesho.contains(&encoded));
        }
    }

    #[test]
    fn test_enrich_outfit_uses_ratings() {
        let catalog = Catalog::embedded().unwrap();
        let outfit = catalog.get("casual-basic-unisex").unwrap();

        let mut store = MockRatingsStore::new();
        store
            .expect_ratings()
            .times(1)
            .returning(|_| Ok(vec![4, 5, 3]));

        let enriched = tokio_test::block_on(enrich_outfit(outfit, &store));
        assert_eq!(enriched.average_rating, 4.0);
        assert_eq!(enriched.outfit, *outfit);
        assert_eq!(enriched.shopping_links.len(), outfit.items.len());
    }

    #[test]
    fn test_enrich_outfit_without_ratings() {
        let catalog = Catalog::embedded().unwrap();
        let outfit = catalog.get("casual-basic-unisex").unwrap();

        let mut store = MockRatingsStore::new();
        store.expect_ratings().returning(|_| Ok(vec![]));

        let enriched = tokio_test::block_on(enrich_outfit(outfit, &store));
        assert_eq!(enriched.average_rating, 0.0);
    }

    #[test]
    fn test_enrich_outfit_tolerates_store_failure() {
        let catalog = Catalog::embedded().unwrap();
        let outfit = catalog.get("casual-athleisure").unwrap();

        let mut store = MockRatingsStore::new();
        store
            .expect_ratings()
            .returning(|_| Err(AppError::Internal("connection refused".to_string())));

        let enriched = tokio_test::block_on(enrich_outfit(outfit, &store));
        assert_eq!(enriched.average_rating, 0.0);
        assert_eq!(enriched.shopping_links.len(), 3);
    }

    #[test]
    fn test_enrich_outfits_preserves_order_and_catalog() {
        let catalog = Catalog::embedded().unwrap();
        let selected: Vec<&Outfit> = catalog.outfits().iter().rev().take(3).collect();

        let mut store = MockRatingsStore::new();
        store.expect_ratings().times(3).returning(|_| Ok(vec![5]));

        let enriched = tokio_test::block_on(enrich_outfits(&selected, &store));
        let ids: Vec<&str> = enriched.iter().map(|e| e.outfit.id.as_str()).collect();
        let expected: Vec<&str> = selected.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, expected);

        assert_eq!(catalog, Catalog::embedded().unwrap());
    }
}
