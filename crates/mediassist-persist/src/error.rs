use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersistError {
    #[cfg(feature = "mongodb")]
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),
    
    #[error("Invalid reminder time '{0}': expected HH:MM")]
    InvalidTime(String),
    
    #[error("Missing field: {0}")]
    MissingField(&'static str),
    
    #[error("Connection error: {0}")]
    Connection(String),
}

pub type Result<T> = std::result::Result<T, PersistError>;
