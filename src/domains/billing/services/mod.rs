// Billing domain services
pub mod billing_service;

pub use billing_service::*;
