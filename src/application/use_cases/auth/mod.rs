//! Authentication Use Cases
//!
//! The admission decision for protected routes, login completion after the
//! OAuth redirect, logout, and the session teardown that follows an expired
//! credential.

mod authorize_request;
mod complete_login;
mod end_expired_session;
mod logout;

pub use authorize_request::AuthorizeRequestUseCase;
pub use complete_login::{CompleteLoginUseCase, LoginOutcome};
pub use end_expired_session::EndExpiredSessionUseCase;
pub use logout::LogoutUseCase;
