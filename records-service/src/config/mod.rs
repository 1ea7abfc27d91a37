use secrecy::{ExposeSecret, Secret};
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

pub const SERVICE_NAME: &str = "records-service";

#[derive(Debug, Clone)]
pub struct RecordsConfig {
    pub common: core_config::Config,
    pub environment: Environment,
    pub log_level: String,
    pub otlp_endpoint: Option<String>,
    pub mongodb: MongoConfig,
    pub security: SecurityConfig,
    pub swagger_enabled: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Dev,
    Prod,
}

#[derive(Debug, Clone)]
pub struct MongoConfig {
    pub uri: Secret<String>,
    pub database: String,
    pub create_indexes: bool,
}

#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// Empty means any origin.
    pub allowed_origins: Vec<String>,
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dev" | "development" => Ok(Environment::Dev),
            "prod" | "production" => Ok(Environment::Prod),
            _ => Err(format!("Invalid environment: {}", s)),
        }
    }
}

impl MongoConfig {
    pub fn uri(&self) -> &str {
        self.uri.expose_secret()
    }
}

impl RecordsConfig {
    pub fn load() -> Result<Self, AppError> {
        // Handles .env and the APP__ prefix.
        let common = core_config::Config::load()?;

        let environment: Environment = env::var("ENVIRONMENT")
            .unwrap_or_else(|_| "dev".to_string())
            .parse()
            .map_err(|e: String| AppError::ConfigError(anyhow::anyhow!(e)))?;
        let is_prod = environment == Environment::Prod;

        Ok(RecordsConfig {
            common,
            log_level: get_env("LOG_LEVEL", Some("info"), false)?,
            otlp_endpoint: env::var("OTLP_ENDPOINT").ok().filter(|s| !s.is_empty()),
            mongodb: MongoConfig {
                uri: Secret::new(get_env(
                    "MONGODB_URI",
                    Some("mongodb://localhost:27017"),
                    is_prod,
                )?),
                database: get_env("MONGODB_DATABASE", Some("hospital"), false)?,
                create_indexes: parse_bool("MONGODB_CREATE_INDEXES", false)?,
            },
            security: SecurityConfig {
                allowed_origins: parse_list(&env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default()),
            },
            swagger_enabled: parse_bool("SWAGGER_ENABLED", !is_prod)?,
            environment,
        })
    }
}

fn get_env(key: &str, default: Option<&str>, required: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) if required => Err(AppError::ConfigError(anyhow::anyhow!(
            "{} is required in production but not set",
            key
        ))),
        Err(_) => default.map(str::to_string).ok_or_else(|| {
            AppError::ConfigError(anyhow::anyhow!("{} is required but not set", key))
        }),
    }
}

fn parse_bool(key: &str, default: bool) -> Result<bool, AppError> {
    match env::var(key) {
        Ok(val) => val.trim().parse().map_err(|_| {
            AppError::ConfigError(anyhow::anyhow!("{} must be true or false, got {}", key, val))
        }),
        Err(_) => Ok(default),
    }
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
