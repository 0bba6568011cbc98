use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::workflows::irrigation::DeltaCombination;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the advisor service and CLI.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub reference: ReferenceDataConfig,
    pub advisor: AdvisorConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::parse(&var_or("APP_ENV", "development"));

        let host = var_or("APP_HOST", "127.0.0.1");
        let port = var_or("APP_PORT", "3000")
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = var_or("APP_LOG_LEVEL", "info");

        let reference = ReferenceDataConfig {
            scheme_catalog: path_var("FARM_SCHEME_CATALOG"),
            scheme_directory: path_var("FARM_SCHEME_DIRECTORY"),
            crop_schedules: path_var("FARM_CROP_SCHEDULES"),
        };

        let raw_threshold = var_or("FARM_QUALIFYING_PERCENTAGE", "60");
        let qualifying_percentage = raw_threshold
            .trim()
            .parse::<u8>()
            .ok()
            .filter(|value| *value <= 100)
            .ok_or(ConfigError::InvalidThreshold(raw_threshold))?;

        let raw_combination = var_or("FARM_WEATHER_DELTAS", "accumulate");
        let delta_combination = match raw_combination.trim().to_ascii_lowercase().as_str() {
            "accumulate" | "sum" => DeltaCombination::Accumulate,
            "last_rule_wins" | "last-rule-wins" | "override" => DeltaCombination::LastRuleWins,
            _ => return Err(ConfigError::UnknownDeltaCombination(raw_combination)),
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            reference,
            advisor: AdvisorConfig {
                qualifying_percentage,
                delta_combination,
            },
        })
    }
}

fn var_or(key: &str, fallback: &str) -> String {
    env::var(key).unwrap_or_else(|_| fallback.to_string())
}

fn path_var(key: &str) -> Option<PathBuf> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Optional reference data files. Unset paths fall back to the built-in tables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceDataConfig {
    /// JSON array of scheme definitions used for eligibility scoring.
    pub scheme_catalog: Option<PathBuf>,
    /// JSON array of descriptive listings used for scheme search.
    pub scheme_directory: Option<PathBuf>,
    /// CSV crop schedule table.
    pub crop_schedules: Option<PathBuf>,
}

/// Tunables for the two advisory engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvisorConfig {
    pub qualifying_percentage: u8,
    pub delta_combination: DeltaCombination,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            qualifying_percentage: 60,
            delta_combination: DeltaCombination::Accumulate,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidThreshold(String),
    UnknownDeltaCombination(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidThreshold(value) => write!(
                f,
                "FARM_QUALIFYING_PERCENTAGE must be a whole number from 0 to 100, got '{}'",
                value
            ),
            ConfigError::UnknownDeltaCombination(value) => write!(
                f,
                "FARM_WEATHER_DELTAS must be 'accumulate' or 'last_rule_wins', got '{}'",
                value
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidThreshold(_)
            | ConfigError::UnknownDeltaCombination(_) => None,
        }
    }
}
