use thiserror::Error;

pub type Result<T> = std::result::Result<T, DeskError>;

#[derive(Debug, Error)]
pub enum DeskError {
    #[error("Parsing error: {0}")]
    SerdeParse(#[from] serde_json::error::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("XDG error: {0}")]
    XdgBaseDirError(#[from] xdg::BaseDirectoriesError),
    #[error("Stream error")]
    StreamError,
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
    #[error("Unknown application kind: {0}")]
    UnknownAppKind(String),
}
