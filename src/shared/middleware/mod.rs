// Shared middleware
pub mod auth;
pub mod json_body;
pub mod metrics;

pub use auth::*;
pub use json_body::*;
pub use metrics::*;
