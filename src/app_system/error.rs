use thiserror::Error;
use crate::error::{ConfigError, ProductError};

/// Top-level failure of the application: startup, a product operation, or task management.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Product(#[from] ProductError),
    #[error("Actor task failed: {0}")]
    Task(String),
}
