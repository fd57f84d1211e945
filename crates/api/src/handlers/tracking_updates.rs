//! Handlers for the `/luggage/{id}/updates` resource.
//!
//! Tracking updates are append-only. Appending one also patches the parent
//! luggage row in the same transaction, so listings reflect the latest
//! observed location/status without a separate resync step.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use bagtrail_core::error::CoreError;
use bagtrail_core::status::LuggageStatus;
use bagtrail_core::types::DbId;
use bagtrail_core::validation::{
    validate_location, validate_optional_text, validate_status, MAX_TEXT_LEN,
};
use bagtrail_db::models::tracking_update::CreateTrackingUpdate;
use bagtrail_db::repositories::{LuggageRepo, TrackingUpdateRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /luggage/{id}/updates`.
#[derive(Debug, Deserialize)]
pub struct CreateUpdateRequest {
    pub location: String,
    /// Recognized values are `registered`, `in_transit`, `delivered`,
    /// `delayed`; anything else is stored as-is and classified as unknown
    /// on the way out.
    pub status: LuggageStatus,
    pub notes: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/luggage/{id}/updates
///
/// List the tracking history for a luggage item, most recent first.
/// An item with no updates yields an empty list, not an error.
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    // Distinguish "no updates yet" from "no such luggage".
    LuggageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Luggage",
            id,
        }))?;

    let updates = TrackingUpdateRepo::list_by_luggage(&state.pool, id).await?;
    Ok(Json(DataResponse { data: updates }))
}

/// POST /api/v1/luggage/{id}/updates
///
/// Append a tracking update. The write commits before the response is sent,
/// so a follow-up history fetch always observes the new entry.
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<CreateUpdateRequest>,
) -> AppResult<impl IntoResponse> {
    validate_location(&input.location).map_err(AppError::Core)?;
    validate_status(input.status.as_str()).map_err(AppError::Core)?;
    validate_optional_text("notes", input.notes.as_deref(), MAX_TEXT_LEN)
        .map_err(AppError::Core)?;

    let update = TrackingUpdateRepo::append(
        &state.pool,
        &CreateTrackingUpdate {
            luggage_id: id,
            location: input.location,
            status: input.status.as_str().to_string(),
            notes: input.notes,
        },
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "Luggage",
        id,
    }))?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: update })))
}
