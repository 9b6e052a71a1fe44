use std::sync::Arc;
use std::time::Duration;
use strike_catalog::PricingEngine;
use strike_core::{BookingGateway, ConfirmationStore, SubmissionCoordinator};
use strike_store::app_config::{Config, SessionBackend};
use strike_store::{HttpBookingGateway, InMemoryConfirmationStore, RedisClient, RedisConfirmationStore};
use crate::registry::SessionRegistry;
use crate::worker::start_session_sweeper;

#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionRegistry>,
    pub coordinator: SubmissionCoordinator,
    pub confirmations: Arc<dyn ConfirmationStore>,
    pub pricing: Arc<PricingEngine>,
}

impl AppState {
    pub fn new(
        gateway: Arc<dyn BookingGateway>,
        confirmations: Arc<dyn ConfirmationStore>,
        pricing: PricingEngine,
        session_ttl: Duration,
    ) -> Self {
        Self {
            sessions: Arc::new(SessionRegistry::new(session_ttl)),
            coordinator: SubmissionCoordinator::new(gateway, confirmations.clone()),
            confirmations,
            pricing: Arc::new(pricing),
        }
    }

    /// Must be called inside a Tokio runtime; spawns the session sweeper.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let gateway = HttpBookingGateway::new(&config.booking.endpoint, config.booking.timeout())?;

        let mut memory_store = None;
        let confirmations: Arc<dyn ConfirmationStore> = match config.session.backend {
            SessionBackend::Memory => {
                let store = Arc::new(InMemoryConfirmationStore::new(config.session.ttl()));
                memory_store = Some(store.clone());
                store
            }
            SessionBackend::Redis => {
                let url = config
                    .session
                    .redis_url
                    .as_deref()
                    .ok_or_else(|| anyhow::anyhow!("session.redis_url is required for the redis backend"))?;
                let redis = RedisClient::new(url)?;
                Arc::new(RedisConfirmationStore::new(redis, config.session.ttl_seconds))
            }
        };

        let state = Self::new(
            Arc::new(gateway),
            confirmations,
            PricingEngine::new(config.pricing.clone()),
            config.session.ttl(),
        );
        tokio::spawn(start_session_sweeper(state.sessions.clone(), memory_store, config.session.ttl()));

        Ok(state)
    }
}
