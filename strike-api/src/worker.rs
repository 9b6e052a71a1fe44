use std::sync::Arc;
use strike_store::InMemoryConfirmationStore;
use tokio::time::{sleep, Duration};
use tracing::{debug, info};
use crate::registry::SessionRegistry;

/// Periodically drops open forms, and in-process confirmations, whose session has expired.
/// Redis expires its own confirmations, so `confirmations` is `None` on that backend.
pub async fn start_session_sweeper(
    sessions: Arc<SessionRegistry>,
    confirmations: Option<Arc<InMemoryConfirmationStore>>,
    every: Duration,
) {
    // A zero TTL would otherwise spin.
    let every = every.max(Duration::from_secs(1));
    info!("Session sweeper started, running every {:?}", every);

    loop {
        sleep(every).await;
        let forms = sessions.purge_expired().await;
        let stored = match &confirmations {
            Some(store) => store.purge_expired().await,
            None => 0,
        };
        if forms + stored > 0 {
            info!("Expired {} open form(s), {} stored confirmation(s)", forms, stored);
        } else {
            debug!("No expired sessions");
        }
    }
}
