//! Route definitions for luggage items and their tracking history.

use axum::routing::get;
use axum::Router;

use crate::handlers::{luggage, tracking_updates};
use crate::state::AppState;

/// Routes mounted at `/luggage`. All require authentication.
///
/// ```text
/// GET  /                 list (session user's items, newest first)
/// POST /                 create (status fixed to `registered`)
/// GET  /{id}             get one (404 = not-found state)
/// GET  /{id}/updates     tracking history, newest first
/// POST /{id}/updates     append update (also patches the parent row)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(luggage::list).post(luggage::create))
        .route("/{id}", get(luggage::get_by_id))
        .route(
            "/{id}/updates",
            get(tracking_updates::list).post(tracking_updates::create),
        )
}
