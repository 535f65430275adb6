use thiserror::Error;

use crate::project::StoreError;
use crate::sizing::SizingError;

#[derive(Debug, Error)]
pub enum SmartCircuitError {
    #[error(transparent)]
    Sizing(#[from] SizingError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<SmartCircuitError> for String {
    fn from(err: SmartCircuitError) -> Self {
        err.to_string()
    }
}
