use thiserror::Error;

/// CLI-layer errors.
///
/// The core crates are total functions with no failure modes; everything
/// that can go wrong lives at this boundary (reading files, parsing JSON,
/// loading configuration).
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Failed to read meal plan file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid meal plan file: {0}")]
    InvalidPlan(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}
