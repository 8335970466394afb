//! API Middleware
//!
//! Authentication and request correlation middleware for the REST API.

pub mod auth;
pub mod request_id;

pub use auth::JwtAuth;
