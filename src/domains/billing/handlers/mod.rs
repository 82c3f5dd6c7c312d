// Billing domain handlers
pub mod webhook_handler;

pub use webhook_handler::*;
