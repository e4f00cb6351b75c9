use std::result::Result as StdResult;

use tally_config::ConfigError;
use tally_domain::ValidationError;
use tally_store::StoreError;
use thiserror::Error;

/// Unified error type for the service and storage layers.
#[derive(Error, Debug)]
pub enum TallyError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },
    #[error("Persistence error: {0}")]
    StorageError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type Result<T> = StdResult<T, TallyError>;

/// User-facing CLI error wrapper.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] TallyError),
    #[error("Invalid input: {0}")]
    Input(String),
    #[error("Command failed: {0}")]
    Command(String),
}

impl From<StoreError> for TallyError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Validation(inner) => TallyError::Validation(inner),
            StoreError::NotFound { entity, id } => TallyError::NotFound { entity, id },
            StoreError::Database(inner) => TallyError::StorageError(inner.to_string()),
            StoreError::Io(inner) => TallyError::StorageError(inner.to_string()),
        }
    }
}

impl From<ConfigError> for TallyError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Io(io) => TallyError::StorageError(io.to_string()),
            other => TallyError::ConfigError(other.to_string()),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::from(TallyError::from(err))
    }
}

impl From<StoreError> for CliError {
    fn from(err: StoreError) -> Self {
        CliError::from(TallyError::from(err))
    }
}
