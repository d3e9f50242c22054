use std::env;

use auth::TokenConfig;
use auth::TokenConfigError;
use auth::DEFAULT_TTL_MINUTES;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
    #[serde(default = "default_expiration_minutes")]
    pub expiration_minutes: i64,
}

fn default_max_connections() -> u32 {
    5
}

fn default_algorithm() -> String {
    "HS256".to_string()
}

fn default_expiration_minutes() -> i64 {
    DEFAULT_TTL_MINUTES
}

impl JwtConfig {
    /// Build the token settings handed to the credential manager.
    ///
    /// # Errors
    /// * `EmptySecret` - No signing secret configured
    /// * `UnsupportedAlgorithm` - Algorithm is not an HMAC variant
    /// * `InvalidTtl` - Expiration does not fit in a duration
    pub fn token_config(&self) -> Result<TokenConfig, TokenConfigError> {
        Ok(TokenConfig::new(self.secret.as_bytes())?
            .with_algorithm(&self.algorithm)?
            .with_ttl_minutes(self.expiration_minutes)?)
    }
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .field("expiration_minutes", &self.expiration_minutes)
            .finish()
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, JWT__SECRET, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Unprefixed, so JWT__SECRET=... overrides jwt.secret
            .add_source(Environment::default().separator("__"))
            .build()?;

        configuration.try_deserialize()
    }
}
