use std::fmt;

use chrono::NaiveDateTime;
use serde::Serialize;
use strike_shared::BookingConfirmation;

use crate::repository::ConfirmationStore;
use crate::CoreResult;

pub const EMPTY_MESSAGE: &str = "No booking made!";

const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M";
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Read-only fields shown for a stored booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmationDetails {
    pub when: String,
    pub people: String,
    pub lanes: String,
    pub booking_number: String,
    pub total: String,
}

/// What the confirmation screen shows, fixed at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum ConfirmationView {
    Empty { message: String },
    Populated(ConfirmationDetails),
}

impl ConfirmationView {
    pub fn render(stored: Option<&BookingConfirmation>) -> Self {
        match stored {
            None => ConfirmationView::Empty { message: EMPTY_MESSAGE.to_string() },
            Some(c) => ConfirmationView::Populated(ConfirmationDetails {
                when: display_when(&c.when),
                people: c.people.to_string(),
                lanes: c.lanes.to_string(),
                booking_number: c.booking_id.clone(),
                total: format!("{} sek", c.price),
            }),
        }
    }

    pub async fn load(store: &dyn ConfirmationStore, session_id: &str) -> CoreResult<Self> {
        let stored = store.load(session_id).await?;
        Ok(Self::render(stored.as_ref()))
    }
}

/// `2025-12-20T18:00` -> `2025-12-20 18:00`
pub fn display_when(when: &str) -> String {
    match NaiveDateTime::parse_from_str(when, WIRE_FORMAT) {
        Ok(dt) => dt.format(DISPLAY_FORMAT).to_string(),
        Err(_) => when.replacen('T', " ", 1),
    }
}

impl fmt::Display for ConfirmationView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfirmationView::Empty { message } => write!(f, "{}", message),
            ConfirmationView::Populated(d) => {
                writeln!(f, "When: {}", d.when)?;
                writeln!(f, "Who: {}", d.people)?;
                writeln!(f, "Lanes: {}", d.lanes)?;
                writeln!(f, "Booking number: {}", d.booking_number)?;
                write!(f, "Total: {}", d.total)
            }
        }
    }
}
