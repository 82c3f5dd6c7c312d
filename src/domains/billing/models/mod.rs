// Billing domain models
pub mod webhook;

pub use webhook::*;
