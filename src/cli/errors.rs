use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Input directory does not exist: {dir}")]
    MissingDirectory { dir: String },

    #[error("Extension must not be empty or start with a dot, got: {extension:?}")]
    InvalidExtension { extension: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Library(#[from] cloudbake::Error),
}
