use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::sync::RwLock;

use super::RatingsStore;
use crate::error::AppResult;

/// Ratings persisted as one JSON object (`{"outfit-id": [4, 5]}`) on disk
///
/// The whole map is held in memory. Submissions take the write lock, append and
/// rewrite the file before releasing it, so writers inside this process never
/// interleave. The file is replaced by rename, so readers never observe a
/// partial write. Separate processes sharing the same file still race each
/// other; use the Redis store when running more than one instance.
pub struct FileRatingsStore {
    path: PathBuf,
    ratings: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl FileRatingsStore {
    /// Opens the store, starting empty when the file does not exist yet
    pub async fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();

        let ratings = match tokio::fs::read_to_string(&path).await {
            Ok(json) if json.trim().is_empty() => BTreeMap::new(),
            Ok(json) => serde_json::from_str(&json)?,
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };

        tracing::info!(
            path = %path.display(),
            rated_outfits = ratings.len(),
            "Ratings file loaded"
        );

        Ok(Self {
            path,
            ratings: RwLock::new(ratings),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, ratings: &BTreeMap<String, Vec<u8>>) -> AppResult<()> {
        let json = serde_json::to_vec_pretty(ratings)?;
        let staging = self.path.with_extension("tmp");

        tokio::fs::write(&staging, json).await?;
        tokio::fs::rename(&staging, &self.path).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl RatingsStore for FileRatingsStore {
    async fn ratings(&self, outfit_id: &str) -> AppResult<Vec<u8>> {
        let ratings = self.ratings.read().await;
        Ok(ratings.get(outfit_id).cloned().unwrap_or_default())
    }

    async fn submit(&self, outfit_id: &str, rating: u8) -> AppResult<()> {
        let mut ratings = self.ratings.write().await;
        ratings.entry(outfit_id.to_string()).or_default().push(rating);

        if let Err(e) = self.persist(&ratings).await {
            // Keep memory in sync with what is on disk
            if let Some(list) = ratings.get_mut(outfit_id) {
                list.pop();
                if list.is_empty() {
                    ratings.remove(outfit_id);
                }
            }
            tracing::error!(error = %e, path = %self.path.display(), "Failed to persist ratings");
            return Err(e);
        }

        tracing::debug!(outfit_id = %outfit_id, rating, "Rating stored");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "file"
    }
}
