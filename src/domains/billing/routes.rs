// Billing domain routes
use axum::{routing::post, Router};
use crate::domains::billing::handlers::webhook_handler;
use crate::shared::services::AppState;

pub fn create_billing_router() -> Router<AppState> {
    Router::new().route("/webhooks", post(webhook_handler::polka_webhook))
}
