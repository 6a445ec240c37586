pub mod books;
pub mod health;
pub mod index;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// ```text
/// /                     capability listing
/// /health               liveness check
/// /books                list, create
/// /books/{id}           get, update, delete
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(index::router())
        .merge(health::router())
        .nest("/books", books::router())
}
