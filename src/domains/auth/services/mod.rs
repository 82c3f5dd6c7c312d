// Auth domain services
pub mod auth_service;
pub mod credentials;
pub mod guard;
pub mod jwt_service;
pub mod password_service;
pub mod refresh_token_service;
pub mod state;

pub use auth_service::*;
pub use credentials::*;
pub use guard::*;
pub use jwt_service::*;
pub use password_service::*;
pub use refresh_token_service::*;
pub use state::*;
