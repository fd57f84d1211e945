//! Handlers for the `/luggage` resource.
//!
//! All routes require authentication; an unauthenticated request is
//! rejected with 401 before the handler body runs (the API equivalent of
//! the redirect-to-login in a browser client).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use bagtrail_core::error::CoreError;
use bagtrail_core::types::DbId;
use bagtrail_core::validation::{
    validate_location, validate_optional_text, validate_tag_number, MAX_TEXT_LEN,
};
use bagtrail_db::models::luggage::CreateLuggage;
use bagtrail_db::repositories::LuggageRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /luggage`.
///
/// Deliberately has no status field: the persisted status of a new item is
/// always `registered`, and the owner comes from the session, never the body.
#[derive(Debug, Deserialize)]
pub struct CreateLuggageRequest {
    pub tag_number: String,
    pub description: Option<String>,
    pub current_location: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/luggage
///
/// List all luggage owned by the session user, most recently created first.
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<impl IntoResponse> {
    let items = LuggageRepo::list_by_owner(&state.pool, user.user_id).await?;
    Ok(Json(DataResponse { data: items }))
}

/// POST /api/v1/luggage
///
/// Register a new luggage item for the session user.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateLuggageRequest>,
) -> AppResult<impl IntoResponse> {
    validate_tag_number(&input.tag_number).map_err(AppError::Core)?;
    validate_location(&input.current_location).map_err(AppError::Core)?;
    validate_optional_text("description", input.description.as_deref(), MAX_TEXT_LEN)
        .map_err(AppError::Core)?;

    let luggage = LuggageRepo::create(
        &state.pool,
        &CreateLuggage {
            user_id: user.user_id,
            tag_number: input.tag_number,
            description: input.description,
            current_location: input.current_location,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: luggage })))
}

/// GET /api/v1/luggage/{id}
///
/// Get a single luggage item by ID. Absence is the not-found state.
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let luggage = LuggageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Luggage",
            id,
        }))?;
    Ok(Json(DataResponse { data: luggage }))
}
