//! Tracking update entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;

use bagtrail_core::types::{DbId, Timestamp};

/// A row from the `tracking_updates` table. Immutable once created.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TrackingUpdate {
    pub id: DbId,
    pub luggage_id: DbId,
    pub location: String,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for appending a tracking update to a luggage item.
#[derive(Debug, Clone)]
pub struct CreateTrackingUpdate {
    pub luggage_id: DbId,
    pub location: String,
    pub status: String,
    pub notes: Option<String>,
}
