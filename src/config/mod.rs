//! Configuration module for the team admin backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use crate::errors::AppError;
use crate::seed::{DEFAULT_SEED_COUNT, MAX_SEED_COUNT};

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    pub log_format: LogFormat,
    /// Simulated backend latency applied to every store mutation
    pub api_delay: Duration,
    /// Simulated latency of the code uniqueness check
    pub code_check_delay: Duration,
    /// Number of generated teams the store starts with
    pub seed_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
            api_delay: Duration::from_millis(500),
            code_check_delay: Duration::from_millis(100),
            seed_count: DEFAULT_SEED_COUNT,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        let bind_addr = parse_var("TEAMS_BIND_ADDR")?.unwrap_or(defaults.bind_addr);

        let log_level = env::var("TEAMS_LOG_LEVEL").unwrap_or(defaults.log_level);

        let log_format = match env::var("TEAMS_LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("text") | Err(_) => LogFormat::Text,
            Ok(other) => {
                return Err(AppError::Config(format!(
                    "Invalid TEAMS_LOG_FORMAT '{}': expected 'text' or 'json'",
                    other
                )))
            }
        };

        let api_delay = parse_var::<u64>("TEAMS_API_DELAY_MS")?
            .map(Duration::from_millis)
            .unwrap_or(defaults.api_delay);

        let code_check_delay = parse_var::<u64>("TEAMS_CODE_CHECK_DELAY_MS")?
            .map(Duration::from_millis)
            .unwrap_or(defaults.code_check_delay);

        let seed_count = parse_var("TEAMS_SEED_COUNT")?.unwrap_or(defaults.seed_count);
        if seed_count > MAX_SEED_COUNT {
            return Err(AppError::Config(format!(
                "TEAMS_SEED_COUNT must be at most {}, got {}",
                MAX_SEED_COUNT, seed_count
            )));
        }

        Ok(Self {
            bind_addr,
            log_level,
            log_format,
            api_delay,
            code_check_delay,
            seed_count,
        })
    }
}

fn parse_var<T: FromStr>(name: &str) -> Result<Option<T>, AppError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| AppError::Config(format!("Invalid {} format: '{}'", name, raw))),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Both cases share process env, so they run in one test.
    #[test]
    fn test_env_config() {
        for var in [
            "TEAMS_BIND_ADDR",
            "TEAMS_LOG_LEVEL",
            "TEAMS_LOG_FORMAT",
            "TEAMS_API_DELAY_MS",
            "TEAMS_CODE_CHECK_DELAY_MS",
            "TEAMS_SEED_COUNT",
        ] {
            env::remove_var(var);
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Text);
        assert_eq!(config.api_delay, Duration::from_millis(500));
        assert_eq!(config.code_check_delay, Duration::from_millis(100));
        assert_eq!(config.seed_count, 520);

        env::set_var("TEAMS_API_DELAY_MS", "0");
        env::set_var("TEAMS_LOG_FORMAT", "json");
        let config = Config::from_env().unwrap();
        assert!(config.api_delay.is_zero());
        assert_eq!(config.log_format, LogFormat::Json);

        env::set_var("TEAMS_SEED_COUNT", "999");
        assert_eq!(Config::from_env().unwrap().seed_count, 999);

        env::set_var("TEAMS_SEED_COUNT", "1000");
        let err = Config::from_env().unwrap_err();
        assert_eq!(
            err,
            AppError::Config("TEAMS_SEED_COUNT must be at most 999, got 1000".to_string())
        );

        env::set_var("TEAMS_SEED_COUNT", "many");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, AppError::Config(_)));

        env::remove_var("TEAMS_API_DELAY_MS");
        env::remove_var("TEAMS_LOG_FORMAT");
        env::remove_var("TEAMS_SEED_COUNT");
    }
}
