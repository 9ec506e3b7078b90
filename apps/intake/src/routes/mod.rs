pub mod health;

use axum::{
    routing::get,
    Router,
};

use crate::intake::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Intake page
        .route(
            "/",
            get(handlers::handle_page).post(handlers::handle_form_submit),
        )
        // JSON mirror of the page
        .route(
            "/api/intake",
            get(handlers::handle_get_view).post(handlers::handle_json_submit),
        )
        .with_state(state)
}
