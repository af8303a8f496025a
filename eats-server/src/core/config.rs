use crate::auth::JwtConfig;

/// Server configuration
///
/// Every field can be overridden through the environment:
///
/// | Env var | Default | Meaning |
/// |---------|---------|---------|
/// | DATA_DIR | ./data | database directory |
/// | HTTP_PORT | 3000 | HTTP service port |
/// | ENVIRONMENT | development | development \| staging \| production |
/// | JWT_SECRET | (generated in dev) | token signing secret |
/// | JWT_EXPIRATION_MINUTES | 1440 | token lifetime |
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the SQLite database
    pub data_dir: String,
    /// HTTP API service port
    pub http_port: u16,
    /// Runtime environment label
    pub environment: String,
    /// JWT configuration
    pub jwt: JwtConfig,
}

impl Config {
    /// Load configuration from environment variables, with defaults.
    pub fn from_env() -> Self {
        Self {
            data_dir: std::env::var("DATA_DIR").unwrap_or_else(|_| "./data".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            jwt: JwtConfig::default(),
        }
    }

    pub fn db_path(&self) -> String {
        format!("{}/eats.db", self.data_dir)
    }
}
