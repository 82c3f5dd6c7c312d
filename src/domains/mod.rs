// Domains module
pub mod admin;
pub mod auth;
pub mod billing;
pub mod chirps;
