use std::collections::HashMap;
use std::time::{Duration, Instant};
use strike_core::BookingForm;
use tokio::sync::RwLock;
use uuid::Uuid;

struct OpenForm {
    form: BookingForm,
    expires_at: Instant,
}

/// Open booking forms, one per browser session. A form expires after `ttl`
/// without being touched.
pub struct SessionRegistry {
    forms: RwLock<HashMap<Uuid, OpenForm>>,
    ttl: Duration,
}

impl SessionRegistry {
    pub fn new(ttl: Duration) -> Self {
        Self {
            forms: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    pub async fn open(&self) -> Uuid {
        let id = Uuid::new_v4();
        let entry = OpenForm {
            form: BookingForm::new(),
            expires_at: Instant::now() + self.ttl,
        };
        self.forms.write().await.insert(id, entry);
        id
    }

    /// Run `f` on the live form of session `id` and push its expiry out.
    /// Returns `None` for unknown or expired sessions.
    pub async fn update<T>(&self, id: Uuid, f: impl FnOnce(&mut BookingForm) -> T) -> Option<T> {
        let now = Instant::now();
        let mut forms = self.forms.write().await;

        if forms.get(&id).is_some_and(|e| e.expires_at <= now) {
            forms.remove(&id);
            return None;
        }

        let entry = forms.get_mut(&id)?;
        entry.expires_at = now + self.ttl;
        Some(f(&mut entry.form))
    }

    /// Returns whether a form was open.
    pub async fn close(&self, id: Uuid) -> bool {
        self.forms.write().await.remove(&id).is_some()
    }

    pub async fn len(&self) -> usize {
        self.forms.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Drop every expired form, returning how many were removed
    pub async fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut forms = self.forms.write().await;
        let before = forms.len();
        forms.retain(|_, e| e.expires_at > now);
        before - forms.len()
    }
}
