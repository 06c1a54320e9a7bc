//! Route definitions and router construction.

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use super::handlers;
use super::state::AppState;

/// Build the application router with all product routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/product", get(handlers::find_all).post(handlers::create))
        .route(
            "/product/{id}",
            get(handlers::find_one)
                .patch(handlers::update)
                .delete(handlers::remove),
        )
        .fallback(handlers::unmatched)
        .method_not_allowed_fallback(handlers::unmatched)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
