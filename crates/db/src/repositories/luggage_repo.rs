//! Repository for the `luggage` table.

use sqlx::PgPool;

use bagtrail_core::status::LuggageStatus;
use bagtrail_core::types::DbId;

use crate::models::luggage::{CreateLuggage, Luggage};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, tag_number, description, status, \
                       current_location, created_at, updated_at";

/// Provides create/read operations for luggage items.
///
/// There is no update or delete: the parent row only changes when a
/// tracking update is appended (see `TrackingUpdateRepo::append`).
pub struct LuggageRepo;

impl LuggageRepo {
    /// Insert a new luggage item. Status is always `registered`.
    pub async fn create(pool: &PgPool, input: &CreateLuggage) -> Result<Luggage, sqlx::Error> {
        let query = format!(
            "INSERT INTO luggage (user_id, tag_number, description, status, current_location)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Luggage>(&query)
            .bind(input.user_id)
            .bind(&input.tag_number)
            .bind(&input.description)
            .bind(LuggageStatus::Registered.as_str())
            .bind(&input.current_location)
            .fetch_one(pool)
            .await
    }

    /// Find a luggage item by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Luggage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM luggage WHERE id = $1");
        sqlx::query_as::<_, Luggage>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all luggage owned by a user, most recently created first.
    pub async fn list_by_owner(pool: &PgPool, user_id: DbId) -> Result<Vec<Luggage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM luggage
             WHERE user_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Luggage>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
