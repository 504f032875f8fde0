use std::collections::HashSet;
use std::path::Path;

use crate::{
    error::{AppError, AppResult},
    models::Outfit,
};

const EMBEDDED_CATALOG: &str = include_str!("../../data/outfits.json");

/// Immutable outfit table, loaded once at startup
///
/// There is no mutation API: ratings live in the ratings store, never here.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    outfits: Vec<Outfit>,
}

impl Catalog {
    /// Builds a catalog, rejecting records that break the outfit invariants
    pub fn new(outfits: Vec<Outfit>) -> AppResult<Self> {
        let mut seen = HashSet::new();
        for outfit in &outfits {
            if outfit.id.trim().is_empty() {
                return Err(AppError::Catalog(format!(
                    "outfit '{}' has an empty id",
                    outfit.name
                )));
            }
            if !seen.insert(outfit.id.as_str()) {
                return Err(AppError::Catalog(format!("duplicate outfit id '{}'", outfit.id)));
            }
            if outfit.climate.is_empty() {
                return Err(AppError::Catalog(format!("outfit '{}' has no climate", outfit.id)));
            }
            if outfit.items.is_empty() {
                return Err(AppError::Catalog(format!("outfit '{}' has no items", outfit.id)));
            }
        }

        Ok(Self { outfits })
    }

    /// The reference catalog compiled into the binary
    pub fn embedded() -> AppResult<Self> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    pub fn from_json(json: &str) -> AppResult<Self> {
        let outfits: Vec<Outfit> = serde_json::from_str(json)?;
        Self::new(outfits)
    }

    pub async fn from_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let json = tokio::fs::read_to_string(path).await?;
        Self::from_json(&json)
    }

    /// Outfits in catalog order
    pub fn outfits(&self) -> &[Outfit] {
        &self.outfits
    }

    pub fn get(&self, id: &str) -> Option<&Outfit> {
        self.outfits.iter().find(|outfit| outfit.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.outfits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outfits.is_empty()
    }
}
