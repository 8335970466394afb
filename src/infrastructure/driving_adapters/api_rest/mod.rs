//! REST API Module
//!
//! Contains HTTP handlers, DTOs, middleware, and the validation chain for
//! the REST API.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod validation;

use std::sync::Arc;

use crate::application::use_cases::auth::{
    AuthorizeRequestUseCase, CompleteLoginUseCase, EndExpiredSessionUseCase, LogoutUseCase,
};
use crate::application::use_cases::celebrations::{
    CreateCelebrationUseCase, DeleteCelebrationUseCase, GetCelebrationByIdUseCase,
    GetCelebrationsByUserUseCase, UpdateCelebrationUseCase,
};
use crate::application::use_cases::classes::{
    CreateClassUseCase, CreateClassesUseCase, DeleteClassUseCase, GetClassByIdUseCase,
    GetClassesByUserUseCase, UpdateClassUseCase,
};
use crate::application::use_cases::events::{
    CreateEventUseCase, DeleteEventUseCase, GetAllEventsUseCase, GetEventByIdUseCase,
    UpdateEventUseCase,
};
use crate::application::use_cases::goals::{
    CreateGoalUseCase, DeleteGoalUseCase, GetGoalByIdUseCase, GetGoalsByUserUseCase,
    UpdateGoalUseCase,
};
use crate::application::use_cases::users::{
    CreateUserUseCase, DeleteUserUseCase, GetAllUsersUseCase, GetUserByIdUseCase,
    UpdateUserUseCase,
};
use crate::domain::gateways::OAuthProvider;
use crate::infrastructure::driven_adapters::config::AppConfig;

/// Authentication use cases shared across handlers and middleware
#[derive(Clone)]
pub struct AuthUseCases {
    pub oauth: Arc<dyn OAuthProvider>,
    pub authorize: Arc<AuthorizeRequestUseCase>,
    pub complete_login: Arc<CompleteLoginUseCase>,
    pub logout: Arc<LogoutUseCase>,
    pub end_expired_session: Arc<EndExpiredSessionUseCase>,
}

/// User use cases
#[derive(Clone)]
pub struct UserUseCases {
    pub create: Arc<CreateUserUseCase>,
    pub get_all: Arc<GetAllUsersUseCase>,
    pub get_by_id: Arc<GetUserByIdUseCase>,
    pub update: Arc<UpdateUserUseCase>,
    pub delete: Arc<DeleteUserUseCase>,
}

/// Celebration use cases
#[derive(Clone)]
pub struct CelebrationUseCases {
    pub create: Arc<CreateCelebrationUseCase>,
    pub get_by_user: Arc<GetCelebrationsByUserUseCase>,
    pub get_by_id: Arc<GetCelebrationByIdUseCase>,
    pub update: Arc<UpdateCelebrationUseCase>,
    pub delete: Arc<DeleteCelebrationUseCase>,
}

/// Event use cases
#[derive(Clone)]
pub struct EventUseCases {
    pub create: Arc<CreateEventUseCase>,
    pub get_all: Arc<GetAllEventsUseCase>,
    pub get_by_id: Arc<GetEventByIdUseCase>,
    pub update: Arc<UpdateEventUseCase>,
    pub delete: Arc<DeleteEventUseCase>,
}

/// Goal use cases
#[derive(Clone)]
pub struct GoalUseCases {
    pub create: Arc<CreateGoalUseCase>,
    pub get_by_id: Arc<GetGoalByIdUseCase>,
    pub get_by_user: Arc<GetGoalsByUserUseCase>,
    pub update: Arc<UpdateGoalUseCase>,
    pub delete: Arc<DeleteGoalUseCase>,
}

/// Class use cases
#[derive(Clone)]
pub struct ClassUseCases {
    pub create: Arc<CreateClassUseCase>,
    pub create_many: Arc<CreateClassesUseCase>,
    pub get_by_id: Arc<GetClassByIdUseCase>,
    pub get_by_user: Arc<GetClassesByUserUseCase>,
    pub update: Arc<UpdateClassUseCase>,
    pub delete: Arc<DeleteClassUseCase>,
}

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub auth: AuthUseCases,
    pub users: UserUseCases,
    pub celebrations: CelebrationUseCases,
    pub events: EventUseCases,
    pub goals: GoalUseCases,
    pub classes: ClassUseCases,
}

/// Assemble the API router: every resource's routes plus the middleware the
/// authentication gate needs. Outer layers (tracing, CORS) are added by the
/// binary.
#[must_use]
pub fn app_router(state: AppState) -> axum::Router {
    axum::Router::new()
        .route("/", axum::routing::get(welcome))
        .merge(handlers::auth::router())
        .merge(handlers::users::router())
        .merge(handlers::celebrations::router())
        .merge(handlers::events::router())
        .merge(handlers::goals::router())
        .merge(handlers::classes::router())
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::add_auth_extensions,
        ))
        .layer(axum::middleware::from_fn(
            middleware::request_id::request_id_middleware,
        ))
        .with_state(state)
}

async fn welcome() -> &'static str {
    "Welcome to the organizer API!"
}
