pub mod models;

pub use models::booking::{BookingConfirmation, BookingRequest, CONFIRMATION_KEY};
