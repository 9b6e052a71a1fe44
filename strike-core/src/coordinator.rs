use std::sync::Arc;

use strike_shared::{BookingConfirmation, BookingRequest};
use tracing::{error, info};

use crate::form::BookingForm;
use crate::repository::{BookingGateway, ConfirmationStore};
use crate::CoreResult;

/// Sends a validated booking and hands the result to the confirmation view.
#[derive(Clone)]
pub struct SubmissionCoordinator {
    gateway: Arc<dyn BookingGateway>,
    store: Arc<dyn ConfirmationStore>,
}

impl SubmissionCoordinator {
    pub fn new(gateway: Arc<dyn BookingGateway>, store: Arc<dyn ConfirmationStore>) -> Self {
        Self { gateway, store }
    }

    /// One outbound request, no retry. The confirmation is only stored once
    /// the gateway has accepted the booking. From then on the booking exists,
    /// so a storage failure is logged and the confirmation is still returned.
    pub async fn dispatch(&self, session_id: &str, request: &BookingRequest) -> CoreResult<BookingConfirmation> {
        let confirmation = self.gateway.create_booking(request).await.map_err(|e| {
            error!("Booking request failed for session {}: {}", session_id, e);
            e
        })?;

        if let Err(e) = self.store.save(session_id, &confirmation).await {
            error!(
                "Booking {} created but its confirmation could not be stored for session {}: {}",
                confirmation.booking_id, session_id, e
            );
            return Ok(confirmation);
        }
        info!(
            "Booking {} confirmed for session {} ({} sek)",
            confirmation.booking_id, session_id, confirmation.price
        );

        Ok(confirmation)
    }

    /// Validate, send and record the outcome on `form`.
    pub async fn submit(&self, session_id: &str, form: &mut BookingForm) -> CoreResult<BookingConfirmation> {
        let request = form.begin_submit()?;
        let outcome = self.dispatch(session_id, &request).await;
        form.finish_submit(&outcome);
        outcome
    }
}
