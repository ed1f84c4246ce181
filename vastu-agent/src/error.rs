//! Error types for VastuAgent

use thiserror::Error;

/// VastuAgent error type
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Invalid direction index: {0} (expected 0..=3)")]
    InvalidDirection(i32),

    #[error("Displacement ({dx}, {dy}) is not a unit axis step")]
    InvalidDisplacement { dx: i32, dy: i32 },

    #[error("Invalid percept: {0}")]
    InvalidPercept(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for AgentError {
    fn from(e: toml::de::Error) -> Self {
        AgentError::Config(e.to_string())
    }
}

impl From<toml::ser::Error> for AgentError {
    fn from(e: toml::ser::Error) -> Self {
        AgentError::Config(e.to_string())
    }
}

impl From<std::io::Error> for AgentError {
    fn from(e: std::io::Error) -> Self {
        AgentError::Config(format!("Failed to read config file: {}", e))
    }
}

pub type Result<T> = std::result::Result<T, AgentError>;
