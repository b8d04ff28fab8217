use thiserror::Error;

/// Errors raised by repositories, the product service, and the actor plumbing around it.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(i64),
    #[error("Failed to read product data from {path}: {message}")]
    Load { path: String, message: String },
    #[error("Malformed product data: {0}")]
    Parse(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required configuration key: {0}")]
    Missing(String),
    #[error("Invalid configuration value: {0}")]
    Invalid(String),
    #[error("Unknown repository qualifier: {0}")]
    UnknownRepository(String),
    #[error("Configuration error: {0}")]
    Extract(#[from] Box<figment::Error>),
}
