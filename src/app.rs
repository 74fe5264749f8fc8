use crate::handlers;
use crate::state::AppState;
use axum::{routing::{delete, get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/readings/add", post(handlers::add_reading_form))
        .route(
            "/api/readings",
            get(handlers::get_readings)
                .post(handlers::add_reading)
                .delete(handlers::clear_readings),
        )
        .route("/api/readings/:id", delete(handlers::delete_reading))
        .route("/api/categories", get(handlers::get_categories))
        .route(
            "/api/insight",
            get(handlers::get_insight)
                .post(handlers::request_insight)
                .delete(handlers::dismiss_insight),
        )
        .with_state(state)
}
