//! HTTP Handlers
//!
//! One module per resource, each exposing a `router()` merged in main.

pub mod auth;
pub mod celebrations;
pub mod classes;
pub mod events;
pub mod goals;
pub mod users;
