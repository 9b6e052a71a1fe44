use serde::{Deserialize, Serialize};

/// Session storage key the confirmation is written under.
pub const CONFIRMATION_KEY: &str = "confirmation";

/// Body sent to the booking endpoint. Counts travel as the raw text the user typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    /// `YYYY-MM-DDTHH:MM`
    pub when: String,
    pub people: String,
    pub lanes: String,
    pub shoes: Vec<String>,
}

/// Result of a successful booking, handed from the form to the confirmation view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmation {
    pub when: String,
    #[serde(with = "lenient_count")]
    pub people: u32,
    #[serde(with = "lenient_count")]
    pub lanes: u32,
    pub booking_id: String,
    pub price: u32,
}

// The endpoint echoes people/lanes back as numbers, but older payloads
// carried them as strings.
mod lenient_count {
    use serde::{de, Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u32),
        Text(String),
    }

    pub fn serialize<S: Serializer>(value: &u32, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(*value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(n),
            Raw::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| de::Error::custom(format!("expected a count, got {:?}", s))),
        }
    }
}
