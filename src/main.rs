//! Organizer API - Main Entry Point

use std::sync::Arc;

use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use organizer_api::application::use_cases::auth::{
    AuthorizeRequestUseCase, CompleteLoginUseCase, EndExpiredSessionUseCase, LogoutUseCase,
};
use organizer_api::application::use_cases::celebrations::{
    CreateCelebrationUseCase, DeleteCelebrationUseCase, GetCelebrationByIdUseCase,
    GetCelebrationsByUserUseCase, UpdateCelebrationUseCase,
};
use organizer_api::application::use_cases::classes::{
    CreateClassUseCase, CreateClassesUseCase, DeleteClassUseCase, GetClassByIdUseCase,
    GetClassesByUserUseCase, UpdateClassUseCase,
};
use organizer_api::application::use_cases::events::{
    CreateEventUseCase, DeleteEventUseCase, GetAllEventsUseCase, GetEventByIdUseCase,
    UpdateEventUseCase,
};
use organizer_api::application::use_cases::goals::{
    CreateGoalUseCase, DeleteGoalUseCase, GetGoalByIdUseCase, GetGoalsByUserUseCase,
    UpdateGoalUseCase,
};
use organizer_api::application::use_cases::users::{
    CreateUserUseCase, DeleteUserUseCase, GetAllUsersUseCase, GetUserByIdUseCase,
    UpdateUserUseCase,
};
use organizer_api::infrastructure::driven_adapters::config::AppConfig;
use organizer_api::infrastructure::driven_adapters::database;
use organizer_api::infrastructure::driven_adapters::repositories::{
    PostgresCelebrationRepository, PostgresClassRepository, PostgresEventRepository,
    PostgresGoalRepository, PostgresRevokedTokenRepository, PostgresSessionRepository,
    PostgresUserRepository,
};
use organizer_api::infrastructure::driven_adapters::{GoogleOAuthClient, JwtService};
use organizer_api::infrastructure::driving_adapters::api_rest::{
    app_router, AppState, AuthUseCases, CelebrationUseCases, ClassUseCases, EventUseCases,
    GoalUseCases, UserUseCases,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "organizer_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;
    tracing::info!("Configuration loaded successfully");

    // Create database connection pool
    let pool = database::create_pool(&config.database).await?;
    tracing::info!("Database connection pool created");

    // Run migrations
    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Database migrations completed");

    // Create repositories
    let users = Arc::new(PostgresUserRepository::new(pool.clone()));
    let celebrations = Arc::new(PostgresCelebrationRepository::new(pool.clone()));
    let events = Arc::new(PostgresEventRepository::new(pool.clone()));
    let goals = Arc::new(PostgresGoalRepository::new(pool.clone()));
    let classes = Arc::new(PostgresClassRepository::new(pool.clone()));
    let revoked_tokens = Arc::new(PostgresRevokedTokenRepository::new(pool.clone()));
    let sessions = Arc::new(PostgresSessionRepository::new(pool));

    // Create auth collaborators
    let jwt = Arc::new(JwtService::new(&config.jwt));
    let oauth = Arc::new(GoogleOAuthClient::new(config.google.clone()));

    // Create application state
    let app_state = AppState {
        config: Arc::new(config.clone()),
        auth: AuthUseCases {
            oauth: oauth.clone(),
            authorize: Arc::new(AuthorizeRequestUseCase::new(
                revoked_tokens.clone(),
                jwt.clone(),
            )),
            complete_login: Arc::new(CompleteLoginUseCase::new(
                oauth,
                sessions.clone(),
                jwt.clone(),
            )),
            logout: Arc::new(LogoutUseCase::new(sessions.clone(), revoked_tokens)),
            end_expired_session: Arc::new(EndExpiredSessionUseCase::new(sessions)),
        },
        users: UserUseCases {
            create: Arc::new(CreateUserUseCase::new(users.clone())),
            get_all: Arc::new(GetAllUsersUseCase::new(users.clone())),
            get_by_id: Arc::new(GetUserByIdUseCase::new(users.clone())),
            update: Arc::new(UpdateUserUseCase::new(users.clone())),
            delete: Arc::new(DeleteUserUseCase::new(users)),
        },
        celebrations: CelebrationUseCases {
            create: Arc::new(CreateCelebrationUseCase::new(celebrations.clone())),
            get_by_user: Arc::new(GetCelebrationsByUserUseCase::new(celebrations.clone())),
            get_by_id: Arc::new(GetCelebrationByIdUseCase::new(celebrations.clone())),
            update: Arc::new(UpdateCelebrationUseCase::new(celebrations.clone())),
            delete: Arc::new(DeleteCelebrationUseCase::new(celebrations)),
        },
        events: EventUseCases {
            create: Arc::new(CreateEventUseCase::new(events.clone())),
            get_all: Arc::new(GetAllEventsUseCase::new(events.clone())),
            get_by_id: Arc::new(GetEventByIdUseCase::new(events.clone())),
            update: Arc::new(UpdateEventUseCase::new(events.clone())),
            delete: Arc::new(DeleteEventUseCase::new(events)),
        },
        goals: GoalUseCases {
            create: Arc::new(CreateGoalUseCase::new(goals.clone())),
            get_by_id: Arc::new(GetGoalByIdUseCase::new(goals.clone())),
            get_by_user: Arc::new(GetGoalsByUserUseCase::new(goals.clone())),
            update: Arc::new(UpdateGoalUseCase::new(goals.clone())),
            delete: Arc::new(DeleteGoalUseCase::new(goals)),
        },
        classes: ClassUseCases {
            create: Arc::new(CreateClassUseCase::new(classes.clone())),
            create_many: Arc::new(CreateClassesUseCase::new(classes.clone())),
            get_by_id: Arc::new(GetClassByIdUseCase::new(classes.clone())),
            get_by_user: Arc::new(GetClassesByUserUseCase::new(classes.clone())),
            update: Arc::new(UpdateClassUseCase::new(classes.clone())),
            delete: Arc::new(DeleteClassUseCase::new(classes)),
        },
    };

    // Build router
    let app = app_router(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
