use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid payment method type: {0}")]
    UnknownPaymentMethod(String),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
