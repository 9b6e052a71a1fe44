use axum::{
    extract::{Json, State},
    http::StatusCode,
    routing::post,
    Router,
};
use strike_core::validation::parse_count;
use strike_shared::{BookingConfirmation, BookingRequest};
use tracing::info;
use uuid::Uuid;
use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/booking", post(create_booking))
}

/// POST /booking
/// Price and confirm a lane booking
async fn create_booking(
    State(state): State<AppState>,
    Json(req): Json<BookingRequest>,
) -> Result<(StatusCode, Json<BookingConfirmation>), AppError> {
    let people = parse_count(&req.people)
        .ok_or_else(|| AppError::ValidationError(format!("people must be a number, got {:?}", req.people)))?;
    let lanes = parse_count(&req.lanes)
        .ok_or_else(|| AppError::ValidationError(format!("lanes must be a number, got {:?}", req.lanes)))?;

    let price = state.pricing.quote(people, lanes);
    let booking_id = new_booking_id();

    info!("Booking {} created: {} players, {} lanes, {} shoes, {} sek", booking_id, people, lanes, req.shoes.len(), price);

    Ok((
        StatusCode::CREATED,
        Json(BookingConfirmation {
            when: req.when,
            people,
            lanes,
            booking_id,
            price,
        }),
    ))
}

fn new_booking_id() -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("STR-{}", id[..8].to_uppercase())
}
