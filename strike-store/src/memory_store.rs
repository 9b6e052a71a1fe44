use async_trait::async_trait;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use strike_core::{ConfirmationStore, CoreResult};
use strike_shared::BookingConfirmation;
use tokio::sync::RwLock;
use tracing::debug;

struct Entry {
    confirmation: BookingConfirmation,
    expires_at: Instant,
}

/// Process-local session storage. Entries disappear once the session TTL has passed.
pub struct InMemoryConfirmationStore {
    entries: RwLock<HashMap<String, Entry>>,
    ttl: Duration,
}

impl InMemoryConfirmationStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Drop every expired session, returning how many were removed
    pub async fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, e| e.expires_at > now);
        before - entries.len()
    }
}

#[async_trait]
impl ConfirmationStore for InMemoryConfirmationStore {
    async fn save(&self, session_id: &str, confirmation: &BookingConfirmation) -> CoreResult<()> {
        let entry = Entry {
            confirmation: confirmation.clone(),
            expires_at: Instant::now() + self.ttl,
        };
        self.entries.write().await.insert(session_id.to_string(), entry);
        debug!("Stored confirmation for session {}", session_id);
        Ok(())
    }

    async fn load(&self, session_id: &str) -> CoreResult<Option<BookingConfirmation>> {
        let entries = self.entries.read().await;
        Ok(entries
            .get(session_id)
            .filter(|e| e.expires_at > Instant::now())
            .map(|e| e.confirmation.clone()))
    }

    async fn clear(&self, session_id: &str) -> CoreResult<()> {
        self.entries.write().await.remove(session_id);
        Ok(())
    }
}
