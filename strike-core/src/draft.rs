use serde::{Deserialize, Serialize};
use strike_shared::BookingRequest;

use crate::shoes::ShoeList;

/// Top-level text fields of the booking form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DraftField {
    Date,
    Time,
    PlayerCount,
    LaneCount,
}

/// In-progress, unsaved booking as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftBooking {
    pub date: String,
    pub time: String,
    pub player_count: String,
    pub lane_count: String,
    pub shoes: ShoeList,
}

impl DraftBooking {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Date => &self.date,
            DraftField::Time => &self.time,
            DraftField::PlayerCount => &self.player_count,
            DraftField::LaneCount => &self.lane_count,
        }
    }

    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        let slot = match field {
            DraftField::Date => &mut self.date,
            DraftField::Time => &mut self.time,
            DraftField::PlayerCount => &mut self.player_count,
            DraftField::LaneCount => &mut self.lane_count,
        };
        *slot = value.into();
    }

    /// Payload for the booking endpoint, built verbatim from the draft.
    pub fn to_request(&self) -> BookingRequest {
        BookingRequest {
            when: format!("{}T{}", self.date, self.time),
            people: self.player_count.clone(),
            lanes: self.lane_count.clone(),
            shoes: self.shoes.to_vec(),
        }
    }
}
