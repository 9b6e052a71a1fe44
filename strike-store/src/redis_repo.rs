use async_trait::async_trait;
use redis::{AsyncCommands, RedisResult};
use strike_core::{ConfirmationStore, CoreError, CoreResult};
use strike_shared::{BookingConfirmation, CONFIRMATION_KEY};
use tracing::info;

#[derive(Clone)]
pub struct RedisClient {
    client: redis::Client,
}

impl RedisClient {
    pub fn new(connection_string: &str) -> Result<Self, redis::RedisError> {
        let client = redis::Client::open(connection_string)?;
        Ok(Self { client })
    }

    // Hash operations for sessions: one hash per session id

    pub async fn hset_session_field(&self, session_id: &str, field: &str, value: &str) -> RedisResult<()> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.hset(session_key(session_id), field, value).await
    }

    pub async fn hget_session_field(&self, session_id: &str, field: &str) -> RedisResult<Option<String>> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.hget(session_key(session_id), field).await
    }

    pub async fn exp_session_key(&self, session_id: &str, ttl_seconds: u64) -> RedisResult<()> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.expire(session_key(session_id), ttl_seconds as i64).await
    }

    pub async fn del_session_key(&self, session_id: &str) -> RedisResult<()> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.del(session_key(session_id)).await
    }
}

fn session_key(session_id: &str) -> String {
    format!("session:{}", session_id)
}

/// Confirmation stored under `session:{id}` / `confirmation`, expiring with the session.
pub struct RedisConfirmationStore {
    redis: RedisClient,
    ttl_seconds: u64,
}

impl RedisConfirmationStore {
    pub fn new(redis: RedisClient, ttl_seconds: u64) -> Self {
        Self { redis, ttl_seconds }
    }
}

fn storage_error(e: impl std::fmt::Display) -> CoreError {
    CoreError::Storage(e.to_string())
}

#[async_trait]
impl ConfirmationStore for RedisConfirmationStore {
    async fn save(&self, session_id: &str, confirmation: &BookingConfirmation) -> CoreResult<()> {
        let payload = serde_json::to_string(confirmation).map_err(storage_error)?;

        self.redis
            .hset_session_field(session_id, CONFIRMATION_KEY, &payload)
            .await
            .map_err(storage_error)?;
        self.redis
            .exp_session_key(session_id, self.ttl_seconds)
            .await
            .map_err(storage_error)?;

        info!("Confirmation {} stored in session {}", confirmation.booking_id, session_id);
        Ok(())
    }

    async fn load(&self, session_id: &str) -> CoreResult<Option<BookingConfirmation>> {
        let raw = self
            .redis
            .hget_session_field(session_id, CONFIRMATION_KEY)
            .await
            .map_err(storage_error)?;

        raw.map(|s| serde_json::from_str(&s).map_err(storage_error)).transpose()
    }

    async fn clear(&self, session_id: &str) -> CoreResult<()> {
        self.redis.del_session_key(session_id).await.map_err(storage_error)
    }
}
