//! Repository for the `tracking_updates` table.

use sqlx::PgPool;

use bagtrail_core::types::DbId;

use crate::models::tracking_update::{CreateTrackingUpdate, TrackingUpdate};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, luggage_id, location, status, notes, created_at";

/// Provides append/read operations for tracking updates.
///
/// Updates are append-only; there is no edit or delete.
pub struct TrackingUpdateRepo;

impl TrackingUpdateRepo {
    /// Append a tracking update and patch the parent luggage row's
    /// `status`/`current_location` in the same transaction, so the parent
    /// always reflects its latest update.
    ///
    /// Returns `None` (and writes nothing) if the luggage does not exist.
    pub async fn append(
        pool: &PgPool,
        input: &CreateTrackingUpdate,
    ) -> Result<Option<TrackingUpdate>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        // Patch the parent first: a missing luggage id aborts before the insert.
        let patched: Option<(DbId,)> = sqlx::query_as(
            "UPDATE luggage SET status = $2, current_location = $3
             WHERE id = $1
             RETURNING id",
        )
        .bind(input.luggage_id)
        .bind(&input.status)
        .bind(&input.location)
        .fetch_optional(&mut *tx)
        .await?;

        if patched.is_none() {
            // Dropping the transaction rolls it back.
            return Ok(None);
        }

        let query = format!(
            "INSERT INTO tracking_updates (luggage_id, location, status, notes)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let update = sqlx::query_as::<_, TrackingUpdate>(&query)
            .bind(input.luggage_id)
            .bind(&input.location)
            .bind(&input.status)
            .bind(&input.notes)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(update))
    }

    /// List all updates for a luggage item, most recent first.
    pub async fn list_by_luggage(
        pool: &PgPool,
        luggage_id: DbId,
    ) -> Result<Vec<TrackingUpdate>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tracking_updates
             WHERE luggage_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, TrackingUpdate>(&query)
            .bind(luggage_id)
            .fetch_all(pool)
            .await
    }
}
