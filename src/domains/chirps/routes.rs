// Chirps domain routes
use axum::{routing::{get, post}, Router};
use crate::domains::chirps::handlers::chirp_handler;
use crate::shared::services::AppState;

/// Create chirps router
pub fn create_chirps_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(chirp_handler::list_chirps).post(chirp_handler::create_chirp),
        )
        .route(
            "/:chirp_id",
            get(chirp_handler::get_chirp).delete(chirp_handler::delete_chirp),
        )
}

/// `/api/validate_chirp`
pub fn create_validate_chirp_router() -> Router<AppState> {
    Router::new().route("/validate_chirp", post(chirp_handler::validate_chirp))
}
