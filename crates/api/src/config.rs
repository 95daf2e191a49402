//! Runtime configuration (environment variables).

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::str::FromStr;

use thiserror::Error;

/// Address the server binds outside of test mode.
pub const DEFAULT_BIND_ADDR: SocketAddr = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 8080));

/// Environment variable selecting the runtime environment.
pub const ENVIRONMENT_VAR: &str = "API_ENVIRONMENT";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown environment `{0}` (expected Production, Development or Testing)")]
    UnknownEnvironment(String),
}

/// Runtime environment.
///
/// `Testing` skips binding a socket; requests are driven in-process instead
/// (see [`crate::testing::TestClient`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Production,
    Development,
    Testing,
}

impl Environment {
    pub fn is_testing(&self) -> bool {
        *self == Environment::Testing
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Production => "Production",
            Environment::Development => "Development",
            Environment::Testing => "Testing",
        }
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" => Ok(Environment::Production),
            "development" => Ok(Environment::Development),
            "testing" => Ok(Environment::Testing),
            _ => Err(ConfigError::UnknownEnvironment(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub environment: Environment,
    pub bind_addr: SocketAddr,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            bind_addr: DEFAULT_BIND_ADDR,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source (used by `from_env` and tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let environment = match lookup(ENVIRONMENT_VAR) {
            Some(raw) if !raw.trim().is_empty() => raw.parse()?,
            _ => Environment::default(),
        };

        Ok(Self {
            environment,
            ..Self::default()
        })
    }

    pub fn testing() -> Self {
        Self {
            environment: Environment::Testing,
            ..Self::default()
        }
    }
}
