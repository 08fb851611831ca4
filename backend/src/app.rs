use axum::routing::get;
use axum::Router;

use crate::routes::{health, home, sentiment};
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    Router::<AppState>::new()
        .route("/", get(home::index))
        .nest("/health", health::router())
        .nest("/api/sentiment", sentiment::router())
        .with_state(state)
}
