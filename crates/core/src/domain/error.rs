// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid unit name: {0:?}")]
    InvalidUnitName(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
