use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Session error: {message}")]
    Session { message: String },

    #[error("Unsupported receipt file: {file_name}")]
    UnsupportedReceipt { file_name: String },

    #[error("Invalid display date: {value}")]
    InvalidDate { value: String },

    /// Remote-store rejection. The message is carried verbatim so callers and
    /// views can surface it unchanged (e.g. `Erreur 404`).
    #[error("{message}")]
    Store { message: String },

    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
