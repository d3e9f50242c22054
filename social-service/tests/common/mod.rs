#![allow(dead_code)]

use std::sync::Arc;

use auth::CredentialManager;
use auth::JwtHandler;
use auth::TokenConfig;
use social_service::domain::authentication::service::Authenticator;
use social_service::domain::post::service::PostService;
use social_service::domain::user::service::UserService;
use social_service::inbound::http::router::create_router;
use social_service::outbound::repositories::SqlitePostRepository;
use social_service::outbound::repositories::SqliteUserRepository;
use social_service::outbound::repositories::MIGRATOR;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

pub const TEST_SECRET: &str = "test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Services wired against a fresh in-memory database
pub struct TestServices {
    pub pool: SqlitePool,
    pub credentials: Arc<CredentialManager>,
    pub user_repository: Arc<SqliteUserRepository>,
    pub user_service: Arc<UserService<SqliteUserRepository>>,
    pub authenticator: Arc<Authenticator<SqliteUserRepository>>,
    pub post_service: Arc<PostService<SqlitePostRepository>>,
}

impl TestServices {
    pub async fn new(ttl_minutes: i64) -> Self {
        let pool = test_pool().await;

        let token_config = TokenConfig::new(TEST_SECRET)
            .expect("Failed to build token config")
            .with_ttl_minutes(ttl_minutes)
            .expect("Token lifetime out of range");
        let credentials = Arc::new(CredentialManager::new(token_config));

        let user_repository = Arc::new(SqliteUserRepository::new(pool.clone()));
        let post_repository = Arc::new(SqlitePostRepository::new(pool.clone()));

        Self {
            pool,
            credentials: Arc::clone(&credentials),
            user_service: Arc::new(UserService::new(
                Arc::clone(&user_repository),
                Arc::clone(&credentials),
            )),
            authenticator: Arc::new(Authenticator::new(
                Arc::clone(&user_repository),
                credentials,
            )),
            post_service: Arc::new(PostService::new(post_repository)),
            user_repository,
        }
    }

    /// Handler for minting tokens the service never issued itself
    pub fn jwt_handler(&self) -> JwtHandler {
        let config = TokenConfig::new(TEST_SECRET).expect("Failed to build token config");
        JwtHandler::new(config.secret(), config.algorithm())
    }
}

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub services: TestServices,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application with the default 30 minute token lifetime
    pub async fn spawn() -> Self {
        Self::spawn_with_ttl(auth::DEFAULT_TTL_MINUTES).await
    }

    /// Spawn the application in a background task with the given token lifetime
    pub async fn spawn_with_ttl(ttl_minutes: i64) -> Self {
        let services = TestServices::new(ttl_minutes).await;

        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let router = create_router(
            Arc::clone(&services.user_service),
            Arc::clone(&services.authenticator),
            Arc::clone(&services.post_service),
        );

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            services,
            api_client: reqwest::Client::new(),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    pub async fn register(&self, email: &str, password: &str) -> reqwest::Response {
        self.post("/api/register")
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Register a user and return a fresh access token for it
    pub async fn register_and_login(&self, email: &str, password: &str) -> String {
        self.register(email, password).await;

        let response = self
            .post("/api/token")
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");
        let body: serde_json::Value = response.json().await.expect("Failed to parse response");

        body["data"]["access_token"]
            .as_str()
            .expect("Missing access token")
            .to_string()
    }
}

/// Single connection keeps the in-memory database alive for the whole test
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    MIGRATOR.run(&pool).await.expect("Failed to run migrations");

    pool
}
