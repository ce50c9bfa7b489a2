//! Node Error Types

use thiserror::Error;

/// Errors while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Source could not be read or deserialized
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// Values parsed but are unusable
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Errors that stop the node
#[derive(Debug, Error)]
pub enum NodeError {
    /// Configuration error at startup
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Global subscriber could not be installed
    #[error("Logging setup failed: {0}")]
    Logging(String),

    /// Signal handling failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A process-lifetime task ended
    #[error("Task {0} exited unexpectedly")]
    TaskExited(&'static str),
}
