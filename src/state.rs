use std::sync::Arc;

use crate::{
    config::DEFAULT_MAX_UPLOAD_BYTES,
    services::{Catalog, RatingsStore},
};

/// Shared application state
///
/// The catalog is read-only after startup; all mutable data lives behind the
/// ratings store.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub ratings: Arc<dyn RatingsStore>,
    /// Request body cap for photo uploads, in bytes
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(catalog: Catalog, ratings: Arc<dyn RatingsStore>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            ratings,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }

    pub fn with_max_upload_bytes(mut self, max_upload_bytes: usize) -> Self {
        self.max_upload_bytes = max_upload_bytes;
        self
    }
}
