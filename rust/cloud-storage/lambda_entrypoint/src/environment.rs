use std::{fmt::Display, str::FromStr};
use thiserror::Error;

const ENVIRONMENT_VAR: &str = "ENVIRONMENT";

/// The environment the lambda is deployed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Production environment
    Production,
    /// Dev and or staging environment
    Develop,
    /// Running on a developer machine
    Local,
}

/// Represents a value which cannot be converted into an [Environment]
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Could not convert {0} into an environment value")]
pub struct UnknownEnvironment(String);

impl Environment {
    /// read `ENVIRONMENT`, falling back to [Environment::Production] when it is absent or unknown
    pub fn from_env_or_prod() -> Self {
        Self::from_var(std::env::var(ENVIRONMENT_VAR).ok().as_deref())
    }

    fn from_var(value: Option<&str>) -> Self {
        value
            .and_then(|v| Self::from_str(v).ok())
            .unwrap_or(Environment::Production)
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Production => write!(f, "prod"),
            Environment::Develop => write!(f, "dev"),
            Environment::Local => write!(f, "local"),
        }
    }
}

impl FromStr for Environment {
    type Err = UnknownEnvironment;

    fn from_str(environment: &str) -> Result<Self, UnknownEnvironment> {
        match environment {
            "prod" => Ok(Environment::Production),
            "dev" => Ok(Environment::Develop),
            "local" => Ok(Environment::Local),
            s => Err(UnknownEnvironment(s.to_string())),
        }
    }
}
