use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServeError>;

#[derive(Error, Debug)]
pub enum ServeError {
    #[error("scan failed: {0}")]
    Scan(#[from] walkdir::Error),
    #[error("rename failed: {0}")]
    Rename(#[source] std::io::Error),
    #[error("no file with id: {0}")]
    NotFound(String),
    #[error("path error: {0}")]
    Path(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
