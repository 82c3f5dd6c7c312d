// Admin domain module
pub mod handlers;
pub mod routes;
pub mod services;

pub use handlers::*;
pub use routes::*;
pub use services::*;
