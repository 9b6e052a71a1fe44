use serde::Serialize;
use strike_shared::{BookingConfirmation, BookingRequest};
use tracing::warn;

use crate::draft::{DraftBooking, DraftField};
use crate::validation::{self, ValidationError};
use crate::{CoreError, CoreResult};

pub const BOOKING_FAILED_MESSAGE: &str = "booking failed, try again.";

/// The single message a form displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    Validation(ValidationError),
    Submission,
}

impl FormError {
    pub fn message(&self) -> String {
        match self {
            FormError::Validation(e) => e.to_string(),
            FormError::Submission => BOOKING_FAILED_MESSAGE.to_string(),
        }
    }
}

/// State of an open booking form
#[derive(Debug, Clone, Default)]
pub struct BookingForm {
    draft: DraftBooking,
    error: Option<FormError>,
    in_flight: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct FormSnapshot {
    pub draft: DraftBooking,
    pub error: Option<String>,
    pub submitting: bool,
}

impl BookingForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &DraftBooking {
        &self.draft
    }

    pub fn error(&self) -> Option<&FormError> {
        self.error.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight
    }

    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            draft: self.draft.clone(),
            error: self.error.as_ref().map(FormError::message),
            submitting: self.in_flight,
        }
    }

    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft.set_field(field, value);
    }

    pub fn add_shoe(&mut self) -> usize {
        self.draft.shoes.add()
    }

    pub fn edit_shoe(&mut self, position: usize, size: impl Into<String>) -> CoreResult<()> {
        self.draft.shoes.edit(position, size)
    }

    pub fn remove_shoe(&mut self, position: usize) -> CoreResult<String> {
        self.draft.shoes.remove(position)
    }

    /// Validate the draft and, if it passes, mark the form in flight and
    /// return the payload to send. A failed rule is recorded as the form's error.
    pub fn begin_submit(&mut self) -> CoreResult<BookingRequest> {
        if self.in_flight {
            return Err(CoreError::SubmissionInFlight);
        }
        self.error = None;

        if let Err(e) = validation::validate(&self.draft) {
            warn!("Booking rejected: {}", e);
            self.error = Some(FormError::Validation(e));
            return Err(e.into());
        }

        self.in_flight = true;
        Ok(self.draft.to_request())
    }

    pub fn finish_submit(&mut self, outcome: &CoreResult<BookingConfirmation>) {
        self.in_flight = false;
        if outcome.is_err() {
            self.error = Some(FormError::Submission);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form(people: &str, lanes: &str, shoes: &[&str]) -> BookingForm {
        let mut form = BookingForm::new();
        form.set_field(DraftField::Date, "2025-12-20");
        form.set_field(DraftField::Time, "18:00");
        form.set_field(DraftField::PlayerCount, people);
        form.set_field(DraftField::LaneCount, lanes);
        for (i, size) in shoes.iter().enumerate() {
            form.add_shoe();
            form.edit_shoe(i, *size).unwrap();
        }
        form
    }

    #[test]
    fn test_empty_form_shows_completeness_error() {
        let mut form = BookingForm::new();

        let result = form.begin_submit();

        assert!(matches!(result, Err(CoreError::Validation(ValidationError::IncompleteFields))));
        assert_eq!(form.error().map(FormError::message).as_deref(), Some("all fields must be filled in."));
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_valid_form_goes_in_flight() {
        let mut form = filled_form("2", "1", &["38", "39"]);

        let req = form.begin_submit().unwrap();

        assert_eq!(req.when, "2025-12-20T18:00");
        assert!(form.is_submitting());
        assert!(form.error().is_none());
        assert!(matches!(form.begin_submit(), Err(CoreError::SubmissionInFlight)));
    }

    #[test]
    fn test_error_cleared_on_fresh_attempt() {
        let mut form = filled_form("3", "1", &["38", "39"]);
        assert!(form.begin_submit().is_err());
        assert_eq!(form.error(), Some(&FormError::Validation(ValidationError::ShoeCountMismatch)));

        form.add_shoe();
        form.edit_shoe(2, "40").unwrap();
        form.begin_submit().unwrap();

        assert!(form.error().is_none());
    }

    #[test]
    fn test_failed_submission_sets_distinct_error() {
        let mut form = filled_form("2", "1", &["38", "39"]);
        form.begin_submit().unwrap();

        form.finish_submit(&Err(CoreError::Gateway("connection refused".to_string())));

        assert!(!form.is_submitting());
        assert_eq!(form.error(), Some(&FormError::Submission));
        assert_eq!(form.snapshot().error.as_deref(), Some(BOOKING_FAILED_MESSAGE));
    }

    #[test]
    fn test_removed_shoe_not_in_payload() {
        let mut form = filled_form("3", "1", &["38", "39", "40"]);
        form.remove_shoe(1).unwrap();
        form.set_field(DraftField::PlayerCount, "2");

        let req = form.begin_submit().unwrap();

        assert_eq!(req.shoes, vec!["38".to_string(), "40".to_string()]);
    }
}
