//! Luggage entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;

use bagtrail_core::types::{DbId, Timestamp};

/// A row from the `luggage` table.
///
/// `status` is stored as free text; `bagtrail_core::status::LuggageStatus`
/// classifies it at the edges.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Luggage {
    pub id: DbId,
    /// Owning user. Immutable after creation.
    pub user_id: DbId,
    pub tag_number: String,
    pub description: Option<String>,
    pub status: String,
    pub current_location: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for registering a new luggage item.
///
/// Carries no status field: every new item is persisted as `registered`.
#[derive(Debug, Clone)]
pub struct CreateLuggage {
    pub user_id: DbId,
    pub tag_number: String,
    pub description: Option<String>,
    pub current_location: String,
}
