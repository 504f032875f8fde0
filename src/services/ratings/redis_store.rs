use redis::{aio::ConnectionManager, AsyncCommands, Client};
use tokio::sync::OnceCell;

use super::RatingsStore;
use crate::error::AppResult;

const KEY_PREFIX: &str = "ratings:";

/// Ratings kept as one Redis list per outfit
///
/// Each submission is a single `RPUSH`, so concurrent writers from any number
/// of instances never lose a rating. All commands share one reconnecting
/// [`ConnectionManager`], opened on first use.
pub struct RedisRatingsStore {
    client: Client,
    manager: OnceCell<ConnectionManager>,
}

impl RedisRatingsStore {
    /// Creates a store for the given Redis URL
    ///
    /// No connection is made until the first read or write.
    pub fn new(redis_url: &str) -> AppResult<Self> {
        let client = Client::open(redis_url)?;
        Ok(Self {
            client,
            manager: OnceCell::new(),
        })
    }

    fn key(outfit_id: &str) -> String {
        format!("{}{}", KEY_PREFIX, outfit_id)
    }

    /// Handle to the shared connection; clones share the underlying socket
    async fn connection(&self) -> AppResult<ConnectionManager> {
        let manager = self
            .manager
            .get_or_try_init(|| async {
                tracing::info!("Opening Redis connection for ratings");
                ConnectionManager::new(self.client.clone()).await
            })
            .await?;
        Ok(manager.clone())
    }

    pub fn is_connected(&self) -> bool {
        self.manager.initialized()
    }
}

#[async_trait::async_trait]
impl RatingsStore for RedisRatingsStore {
    async fn ratings(&self, outfit_id: &str) -> AppResult<Vec<u8>> {
        let mut conn = self.connection().await?;
        let values: Vec<i64> = conn.lrange(Self::key(outfit_id), 0, -1).await?;

        Ok(values
            .into_iter()
            .filter_map(|value| u8::try_from(value).ok())
            .collect())
    }

    async fn submit(&self, outfit_id: &str, rating: u8) -> AppResult<()> {
        let mut conn = self.connection().await?;
        let total: i64 = conn.rpush(Self::key(outfit_id), i64::from(rating)).await?;

        tracing::debug!(outfit_id = %outfit_id, rating, total, "Rating stored");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "redis"
    }
}
