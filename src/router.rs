use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{handlers, state::AppState};

/// Build the application router. The binary adds metrics and CORS on top.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::health_check))
        .route("/buscar-link", post(handlers::link::fetch_link))
        .route("/buscar-link/", post(handlers::link::fetch_link))
        .route("/openapi.json", get(handlers::openapi))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
