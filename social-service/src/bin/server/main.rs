use std::sync::Arc;

use auth::CredentialManager;
use social_service::config::Config;
use social_service::domain::authentication::service::Authenticator;
use social_service::domain::post::service::PostService;
use social_service::domain::user::service::UserService;
use social_service::inbound::http::router::create_router;
use social_service::outbound::repositories::SqlitePostRepository;
use social_service::outbound::repositories::SqliteUserRepository;
use social_service::outbound::repositories::MIGRATOR;
use sqlx::sqlite::SqlitePoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "social_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "social-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        database_url = %config.database.url,
        http_port = config.server.http_port,
        jwt = ?config.jwt,
        "Configuration loaded"
    );

    let token_config = config.jwt.token_config()?;

    let pool = SqlitePoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "sqlite",
        "Database connection pool created"
    );

    MIGRATOR.run(&pool).await?;
    tracing::info!(database = "sqlite", "Database migrations completed");

    let credentials = Arc::new(CredentialManager::new(token_config));
    let user_repository = Arc::new(SqliteUserRepository::new(pool.clone()));
    let post_repository = Arc::new(SqlitePostRepository::new(pool));

    let user_service = Arc::new(UserService::new(
        Arc::clone(&user_repository),
        Arc::clone(&credentials),
    ));
    let authenticator = Arc::new(Authenticator::new(user_repository, credentials));
    let post_service = Arc::new(PostService::new(post_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(user_service, authenticator, post_service);
    axum::serve(http_listener, http_application).await?;

    tracing::info!("Server exited");
    Ok(())
}
