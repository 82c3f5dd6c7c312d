// Chirpy server library
pub mod domains;
pub mod routes;
pub mod shared;
