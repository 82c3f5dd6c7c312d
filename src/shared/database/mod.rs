// Database module
pub mod connection;
pub mod memory;
pub mod repositories;
pub mod store;

pub use connection::*;
pub use memory::*;
pub use repositories::*;
pub use store::*;
