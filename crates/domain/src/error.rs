use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown experience level: {0}")]
    InvalidExperienceLevel(String),

    #[error("Unknown athlete status: {0}")]
    InvalidStatus(String),

    #[error("Hourly rate must be a number, got '{0}'")]
    InvalidHourlyRate(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
