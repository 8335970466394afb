//! Organizer API
//!
//! A personal-organization backend (users, celebrations, events, goals,
//! classes) with Google OAuth login and JWT sessions, following
//! Clean/Hexagonal Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
