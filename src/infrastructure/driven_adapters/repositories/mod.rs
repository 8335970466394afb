//! Postgres Repositories
//!
//! SQLx-backed implementations of the domain gateway traits.

pub mod celebrations;
pub mod classes;
pub mod events;
pub mod goals;
pub mod revoked_tokens;
pub mod sessions;
pub mod users;

pub use celebrations::PostgresCelebrationRepository;
pub use classes::PostgresClassRepository;
pub use events::PostgresEventRepository;
pub use goals::PostgresGoalRepository;
pub use revoked_tokens::PostgresRevokedTokenRepository;
pub use sessions::PostgresSessionRepository;
pub use users::PostgresUserRepository;
