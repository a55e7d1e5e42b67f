use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid time of day: {0}")]
    InvalidTime(String),

    #[error("Invalid working window: {0}")]
    InvalidWindow(String),
}

pub type SlotResult<T> = Result<T, SlotError>;
