//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file when present).

use serde::Deserialize;
use std::env;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
    pub storage: StorageConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "production" | "prod" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" | "dev" => Some(Self::Development),
            _ => None,
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_body_limit_mb")]
    pub body_limit_mb: usize,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Request body cap in bytes
    #[must_use]
    pub fn body_limit_bytes(&self) -> usize {
        self.body_limit_mb * 1024 * 1024
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
    #[serde(default)]
    pub run_migrations: bool,
    /// PEM-encoded root certificate for the Supabase pooler
    #[serde(default)]
    pub ca_cert: Option<String>,
}

/// JWT configuration
#[derive(Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    /// Token lifetime in seconds
    #[serde(default = "default_token_expiry")]
    pub expires_in_secs: i64,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("expires_in_secs", &self.expires_in_secs)
            .finish()
    }
}

/// Per-IP rate limiting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_rate_limit_window")]
    pub window_secs: u64,
    /// Requests allowed per window on `/api/*`
    #[serde(default = "default_rate_limit_max")]
    pub max_requests: u32,
    /// Requests allowed per window on `/api/auth/*`
    #[serde(default = "default_auth_rate_limit_max")]
    pub auth_max_requests: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            window_secs: default_rate_limit_window(),
            max_requests: default_rate_limit_max(),
            auth_max_requests: default_auth_rate_limit_max(),
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    /// Origins allowed when `CORS_ALLOWED_ORIGINS` is not set
    #[must_use]
    pub fn defaults_for(env: Environment) -> Self {
        let origins: &[&str] = if env.is_production() {
            &[
                "https://vi-life-diagnostics.vercel.app",
                "https://www.vlifediagnostics.com",
            ]
        } else {
            &["http://localhost:3001", "http://127.0.0.1:3001"]
        };

        Self {
            allowed_origins: origins.iter().map(ToString::to_string).collect(),
        }
    }
}

/// File storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_upload_dir")]
    pub upload_dir: String,
}

// Default value functions
fn default_app_name() -> String {
    "vilife-lab-api".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3001
}

fn default_body_limit_mb() -> usize {
    10
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_acquire_timeout() -> u64 {
    10
}

fn default_idle_timeout() -> u64 {
    300
}

fn default_token_expiry() -> i64 {
    604_800 // 7 days
}

fn default_rate_limit_window() -> u64 {
    900 // 15 minutes
}

fn default_rate_limit_max() -> u32 {
    100
}

fn default_auth_rate_limit_max() -> u32 {
    5
}

fn default_upload_dir() -> String {
    "./uploads".to_string()
}

/// Parse a duration such as `3600`, `45s`, `30m`, `24h` or `7d` into seconds
#[must_use]
pub fn parse_duration_secs(value: &str) -> Option<i64> {
    let value = value.trim();
    let (digits, multiplier) = match value.chars().last()? {
        's' => (&value[..value.len() - 1], 1),
        'm' => (&value[..value.len() - 1], 60),
        'h' => (&value[..value.len() - 1], 3_600),
        'd' => (&value[..value.len() - 1], 86_400),
        c if c.is_ascii_digit() => (value, 1),
        _ => return None,
    };

    let amount: i64 = digits.trim().parse().ok()?;
    if amount <= 0 {
        return None;
    }
    amount.checked_mul(multiplier)
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing or malformed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    ///
    /// # Errors
    /// Returns an error if required variables are missing or malformed
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let env = get("APP_ENV")
            .or_else(|| get("NODE_ENV"))
            .and_then(|s| Environment::parse(&s))
            .unwrap_or_default();

        let secret = get("JWT_SECRET").ok_or(ConfigError::MissingVar("JWT_SECRET"))?;
        let expires_in_secs = match get("JWT_EXPIRES_IN") {
            Some(raw) => parse_duration_secs(&raw)
                .ok_or(ConfigError::InvalidValue("JWT_EXPIRES_IN", raw))?,
            None => default_token_expiry(),
        };

        let cors = get("CORS_ALLOWED_ORIGINS").map_or_else(
            || CorsConfig::defaults_for(env),
            |s| CorsConfig {
                allowed_origins: s
                    .split(',')
                    .map(str::trim)
                    .filter(|o| !o.is_empty())
                    .map(String::from)
                    .collect(),
            },
        );

        Ok(Self {
            app: AppSettings {
                name: get("APP_NAME").unwrap_or_else(default_app_name),
                env,
            },
            api: ServerConfig {
                host: get("API_HOST").unwrap_or_else(default_host),
                port: parse_or("PORT", get("PORT"), default_port)?,
                body_limit_mb: parse_or("BODY_LIMIT_MB", get("BODY_LIMIT_MB"), default_body_limit_mb)?,
            },
            database: DatabaseConfig {
                url: get("DATABASE_URL").ok_or(ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: parse_or(
                    "DATABASE_MAX_CONNECTIONS",
                    get("DATABASE_MAX_CONNECTIONS"),
                    default_max_connections,
                )?,
                min_connections: parse_or(
                    "DATABASE_MIN_CONNECTIONS",
                    get("DATABASE_MIN_CONNECTIONS"),
                    default_min_connections,
                )?,
                acquire_timeout_secs: parse_or(
                    "DATABASE_ACQUIRE_TIMEOUT_SECS",
                    get("DATABASE_ACQUIRE_TIMEOUT_SECS"),
                    default_acquire_timeout,
                )?,
                idle_timeout_secs: parse_or(
                    "DATABASE_IDLE_TIMEOUT_SECS",
                    get("DATABASE_IDLE_TIMEOUT_SECS"),
                    default_idle_timeout,
                )?,
                run_migrations: get("DATABASE_RUN_MIGRATIONS")
                    .is_some_and(|s| matches!(s.to_lowercase().as_str(), "1" | "true" | "yes")),
                ca_cert: get("SUPABASE_CA_CERT"),
            },
            jwt: JwtConfig {
                secret,
                expires_in_secs,
            },
            rate_limit: RateLimitConfig {
                window_secs: parse_or(
                    "RATE_LIMIT_WINDOW_SECS",
                    get("RATE_LIMIT_WINDOW_SECS"),
                    default_rate_limit_window,
                )?,
                max_requests: parse_or("RATE_LIMIT_MAX", get("RATE_LIMIT_MAX"), default_rate_limit_max)?,
                auth_max_requests: parse_or(
                    "AUTH_RATE_LIMIT_MAX",
                    get("AUTH_RATE_LIMIT_MAX"),
                    default_auth_rate_limit_max,
                )?,
            },
            cors,
            storage: StorageConfig {
                upload_dir: get("UPLOAD_DIR").unwrap_or_else(default_upload_dir),
            },
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    key: &'static str,
    raw: Option<String>,
    default: fn() -> T,
) -> Result<T, ConfigError> {
    match raw {
        Some(s) => s
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key, s)),
        None => Ok(default()),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
