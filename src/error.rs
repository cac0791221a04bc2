use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("not found")]
    NotFound,

    #[error("invalid code: {0}")]
    InvalidCode(String),
}

pub type Result<T> = std::result::Result<T, Error>;
