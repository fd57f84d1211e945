pub mod auth;
pub mod health;
pub mod luggage;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                   register (public)
/// /auth/login                      login (public)
/// /auth/refresh                    refresh (public)
/// /auth/logout                     logout (requires auth)
///
/// /luggage                         list, create
/// /luggage/{id}                    get
/// /luggage/{id}/updates            list history, append update
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (register, login, refresh, logout).
        .nest("/auth", auth::router())
        // Luggage items and their tracking history.
        .nest("/luggage", luggage::router())
}
