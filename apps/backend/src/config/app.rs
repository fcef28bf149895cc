//! Process configuration, read once at startup.
//!
//! Handlers never read the environment; everything they need arrives
//! through `AppState`.

use std::collections::HashMap;
use std::env;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::warn;

/// Development-only signing key used when `JWT_SECRET` is unset.
///
/// Refused when the environment is `Production`.
pub const DEFAULT_JWT_SECRET: &str = "ships-backend-development-signing-key-change-me";

pub const DEFAULT_JWT_ISSUER: &str = "AE.Ships.Api";
pub const DEFAULT_JWT_AUDIENCE: &str = "AE.Ships.Client";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: String, value: String },

    #[error("JWT_SECRET must be set when APP_ENVIRONMENT is Production")]
    DefaultSecretInProduction,
}

/// Deployment environment name, reported by the health endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Staging,
    Production,
    Testing,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "Development",
            Environment::Staging => "Staging",
            Environment::Production => "Production",
            Environment::Testing => "Testing",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "staging" => Ok(Environment::Staging),
            "production" | "prod" => Ok(Environment::Production),
            "testing" | "test" => Ok(Environment::Testing),
            _ => Err(ConfigError::InvalidValue {
                name: "APP_ENVIRONMENT".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub environment: Environment,
    pub jwt_secret: String,
    pub jwt_issuer: String,
    pub jwt_audience: String,
    /// True when `jwt_secret` is [`DEFAULT_JWT_SECRET`].
    pub using_default_secret: bool,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&env::vars().collect())
    }

    /// Load configuration from a map (for testing)
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let host = vars
            .get("BACKEND_HOST")
            .cloned()
            .unwrap_or_else(|| "0.0.0.0".to_string());

        let port = match vars.get("BACKEND_PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                name: "BACKEND_PORT".to_string(),
                value: raw.clone(),
            })?,
            None => 8080,
        };

        let database_url = vars
            .get("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?
            .clone();

        let environment = match vars.get("APP_ENVIRONMENT") {
            Some(raw) => raw.parse()?,
            None => Environment::Development,
        };

        let (jwt_secret, using_default_secret) =
            match vars.get("JWT_SECRET").filter(|v| !v.is_empty()) {
                Some(secret) => (secret.clone(), false),
                None if environment == Environment::Production => {
                    return Err(ConfigError::DefaultSecretInProduction)
                }
                None => {
                    warn!(
                        environment = %environment,
                        "JWT_SECRET not set; using the built-in development signing key"
                    );
                    (DEFAULT_JWT_SECRET.to_string(), true)
                }
            };

        let jwt_issuer = vars
            .get("JWT_ISSUER")
            .cloned()
            .unwrap_or_else(|| DEFAULT_JWT_ISSUER.to_string());
        let jwt_audience = vars
            .get("JWT_AUDIENCE")
            .cloned()
            .unwrap_or_else(|| DEFAULT_JWT_AUDIENCE.to_string());

        Ok(AppConfig {
            host,
            port,
            database_url,
            environment,
            jwt_secret,
            jwt_issuer,
            jwt_audience,
            using_default_secret,
        })
    }

    /// Configuration for tests that never open a database.
    pub fn for_tests() -> Self {
        AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            database_url: "postgres://unused/unused".to_string(),
            environment: Environment::Testing,
            jwt_secret: "test_secret_key_for_testing_purposes_only".to_string(),
            jwt_issuer: DEFAULT_JWT_ISSUER.to_string(),
            jwt_audience: DEFAULT_JWT_AUDIENCE.to_string(),
            using_default_secret: false,
        }
    }
}
