pub mod shoes;
pub mod draft;
pub mod validation;
pub mod form;
pub mod repository;
pub mod coordinator;
pub mod confirmation;

pub use confirmation::{ConfirmationDetails, ConfirmationView};
pub use coordinator::SubmissionCoordinator;
pub use draft::{DraftBooking, DraftField};
pub use form::{BookingForm, FormError};
pub use repository::{BookingGateway, ConfirmationStore};
pub use shoes::ShoeList;
pub use validation::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("No shoe entry at position {position} (list has {len})")]
    ShoeNotFound { position: usize, len: usize },
    #[error("A booking request is already in flight")]
    SubmissionInFlight,
    #[error("Booking gateway error: {0}")]
    Gateway(String),
    #[error("Session storage error: {0}")]
    Storage(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
