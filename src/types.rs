use crate::utils::{
    auth::TokenService,
    database::{self, Database},
};
use async_trait::async_trait;
use std::{env, time::Duration};

#[derive(Clone, Debug, PartialEq)]
pub enum AppEnvironment {
    Production,
    Development,
}

impl AppEnvironment {
    pub fn from(raw_environment: String) -> Self {
        match raw_environment.as_ref() {
            "production" => Self::Production,
            _ => Self::Development,
        }
    }
}

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u16,
}

#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub db: Database,
    pub tokens: TokenService,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub timeout: Duration,
    pub max_connections: u32,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u16,
}

#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub secret_key: String,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database: DatabaseConfig,
    pub app: AppConfig,
    pub auth: AuthConfig,
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),
    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or(ConfigError::Missing(name))
}

fn parsed_or<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { name, value }),
        Err(_) => Ok(default),
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = required("DATABASE_URL")?;
        let secret_key = required("SECRET_KEY")?;
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = parsed_or::<u16>("PORT", 8080)?;
        let environment = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());
        let timeout_secs = parsed_or::<u64>(
            "DATABASE_TIMEOUT_SECS",
            database::DEFAULT_TIMEOUT.as_secs(),
        )?;
        let max_connections = parsed_or::<u32>("DATABASE_MAX_CONNECTIONS", 4)?;

        Ok(Self {
            database: DatabaseConfig {
                url: database_url,
                timeout: Duration::from_secs(timeout_secs),
                max_connections,
            },
            app: AppConfig {
                host,
                environment: AppEnvironment::from(environment),
                port,
            },
            auth: AuthConfig { secret_key },
        })
    }
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Result<Context, database::Error>;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Result<Context, database::Error> {
        let db = database::connect(&self.database).await?;

        Ok(Context {
            app: AppContext {
                host: self.app.host,
                environment: self.app.environment,
                port: self.app.port,
            },
            db,
            tokens: TokenService::new(self.auth.secret_key),
        })
    }
}

impl Context {
    /// A context over the in-memory store, used by the test-suite.
    pub fn in_memory(secret_key: &str) -> Self {
        Self {
            app: AppContext {
                host: "127.0.0.1".to_string(),
                environment: AppEnvironment::Development,
                port: 0,
            },
            db: Database::in_memory(),
            tokens: TokenService::new(secret_key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_environments_default_to_development() {
        assert_eq!(
            AppEnvironment::from("production".to_string()),
            AppEnvironment::Production
        );
        assert_eq!(
            AppEnvironment::from("staging".to_string()),
            AppEnvironment::Development
        );
    }
}
