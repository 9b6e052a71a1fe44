use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Router,
};
use serde::{Deserialize, Serialize};
use strike_core::form::FormSnapshot;
use strike_core::{BookingForm, ConfirmationView, DraftField};
use strike_shared::BookingConfirmation;
use tracing::{info, warn};
use uuid::Uuid;
use crate::error::AppError;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub session_id: Uuid,
}

/// Fields left out are not touched
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormUpdateRequest {
    pub date: Option<String>,
    pub time: Option<String>,
    pub player_count: Option<String>,
    pub lane_count: Option<String>,
}

impl FormUpdateRequest {
    fn apply(self, form: &mut BookingForm) {
        let updates = [
            (DraftField::Date, self.date),
            (DraftField::Time, self.time),
            (DraftField::PlayerCount, self.player_count),
            (DraftField::LaneCount, self.lane_count),
        ];
        for (field, value) in updates {
            if let Some(value) = value {
                form.set_field(field, value);
            }
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ShoeSizeRequest {
    pub size: String,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/sessions", post(create_session))
        .route("/v1/sessions/{id}", delete(end_session))
        .route("/v1/sessions/{id}/form", get(get_form).patch(update_form))
        .route("/v1/sessions/{id}/form/shoes", post(add_shoe))
        .route("/v1/sessions/{id}/form/shoes/{position}", put(edit_shoe).delete(remove_shoe))
        .route("/v1/sessions/{id}/form/submit", post(submit_form))
        .route("/v1/sessions/{id}/confirmation", get(get_confirmation))
}

/// Run `f` against the open form of session `id`, keeping the session alive.
async fn with_form<T>(
    state: &AppState,
    id: Uuid,
    f: impl FnOnce(&mut BookingForm) -> Result<T, AppError>,
) -> Result<T, AppError> {
    state
        .sessions
        .update(id, f)
        .await
        .unwrap_or_else(|| Err(session_not_found(id)))
}

fn session_not_found(id: Uuid) -> AppError {
    AppError::NotFoundError(format!("Session {} not found", id))
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /v1/sessions
async fn create_session(State(state): State<AppState>) -> (StatusCode, Json<SessionResponse>) {
    let session_id = state.sessions.open().await;
    info!("Session {} opened", session_id);
    (StatusCode::CREATED, Json(SessionResponse { session_id }))
}

/// DELETE /v1/sessions/:id
/// Session end: drop the form and the stored confirmation
async fn end_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let was_open = state.sessions.close(id).await;
    // An expired session may still have a confirmation the store has not dropped yet.
    state.confirmations.clear(&id.to_string()).await.map_err(AppError::core)?;

    if !was_open {
        return Err(session_not_found(id));
    }
    info!("Session {} ended", id);
    Ok(StatusCode::NO_CONTENT)
}

/// GET /v1/sessions/:id/form
async fn get_form(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<FormSnapshot>, AppError> {
    with_form(&state, id, |form| Ok(Json(form.snapshot()))).await
}

/// PATCH /v1/sessions/:id/form
async fn update_form(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<FormUpdateRequest>,
) -> Result<Json<FormSnapshot>, AppError> {
    with_form(&state, id, |form| {
        req.apply(form);
        Ok(Json(form.snapshot()))
    })
    .await
}

/// POST /v1/sessions/:id/form/shoes
async fn add_shoe(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<FormSnapshot>, AppError> {
    with_form(&state, id, |form| {
        form.add_shoe();
        Ok(Json(form.snapshot()))
    })
    .await
}

/// PUT /v1/sessions/:id/form/shoes/:position
async fn edit_shoe(
    State(state): State<AppState>,
    Path((id, position)): Path<(Uuid, usize)>,
    Json(req): Json<ShoeSizeRequest>,
) -> Result<Json<FormSnapshot>, AppError> {
    with_form(&state, id, |form| {
        form.edit_shoe(position, req.size).map_err(AppError::core)?;
        Ok(Json(form.snapshot()))
    })
    .await
}

/// DELETE /v1/sessions/:id/form/shoes/:position
async fn remove_shoe(
    State(state): State<AppState>,
    Path((id, position)): Path<(Uuid, usize)>,
) -> Result<Json<FormSnapshot>, AppError> {
    with_form(&state, id, |form| {
        form.remove_shoe(position).map_err(AppError::core)?;
        Ok(Json(form.snapshot()))
    })
    .await
}

/// POST /v1/sessions/:id/form/submit
/// Validate the draft, create the booking and store the confirmation
async fn submit_form(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<(StatusCode, Json<BookingConfirmation>), AppError> {
    let request = with_form(&state, id, |form| form.begin_submit().map_err(AppError::core)).await?;

    // Registry lock is released while the booking request is out.
    let outcome = state.coordinator.dispatch(&id.to_string(), &request).await;

    let still_open = state.sessions.update(id, |form| form.finish_submit(&outcome)).await.is_some();
    if !still_open {
        // The session ended while the request was out; its storage must stay empty.
        state.confirmations.clear(&id.to_string()).await.map_err(AppError::core)?;
        warn!("Session {} ended during submission, confirmation discarded", id);
        return Err(session_not_found(id));
    }

    let confirmation = outcome.map_err(AppError::core)?;
    Ok((StatusCode::CREATED, Json(confirmation)))
}

/// GET /v1/sessions/:id/confirmation
async fn get_confirmation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ConfirmationView>, AppError> {
    let view = ConfirmationView::load(state.confirmations.as_ref(), &id.to_string())
        .await
        .map_err(AppError::core)?;
    Ok(Json(view))
}
