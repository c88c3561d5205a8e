use thiserror::Error;

#[derive(Error, Debug)]
pub enum FieldError {
    #[error("Invalid field label: {0:?}")]
    InvalidLabel(String),

    #[error("Dictionary is locked; cannot add field: {0}")]
    Locked(String),

    #[error("Unknown sort parameter: {0}")]
    UnknownSortParm(String),

    #[error("Unknown identifier rule: {0}")]
    UnknownIdRule(String),

    #[error("Configuration error: {0}")]
    Config(#[from] confique::Error),
}

pub type Result<T> = std::result::Result<T, FieldError>;
