use std::io;

use thiserror::Error;

use data_error::ServeError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid directory mapping: {0}")]
    InvalidDirsMapping(String),

    #[error(transparent)]
    IoError(#[from] io::Error),

    #[error(transparent)]
    JsonError(#[from] serde_json::Error),

    #[error(transparent)]
    ServeError(#[from] ServeError),
}
