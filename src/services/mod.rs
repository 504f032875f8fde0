pub mod budget_stylist;
pub mod catalog;
pub mod enrichment;
pub mod filter;
pub mod occasion_guide;
pub mod ratings;
pub mod recommendations;
pub mod stylist_chat;
pub mod weather;

pub use catalog::Catalog;
pub use ratings::{FileRatingsStore, RatingsStore, RedisRatingsStore};
