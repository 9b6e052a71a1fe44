use async_trait::async_trait;
use strike_shared::{BookingConfirmation, BookingRequest};

use crate::CoreResult;

/// Remote collaborator that creates bookings
#[async_trait]
pub trait BookingGateway: Send + Sync {
    async fn create_booking(&self, request: &BookingRequest) -> CoreResult<BookingConfirmation>;
}

/// Session-scoped storage for the confirmation handed to the confirmation view
#[async_trait]
pub trait ConfirmationStore: Send + Sync {
    async fn save(&self, session_id: &str, confirmation: &BookingConfirmation) -> CoreResult<()>;

    async fn load(&self, session_id: &str) -> CoreResult<Option<BookingConfirmation>>;

    /// Session end
    async fn clear(&self, session_id: &str) -> CoreResult<()>;
}
