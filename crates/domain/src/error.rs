use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Store failure. `key` is the company name or report UUID the
    /// operation was keyed on; never the query text or connection string.
    #[error("Persistence error for {sector} ({key}): {message}")]
    Persistence {
        sector: String,
        key: String,
        message: String,
    },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Division by zero: {0}")]
    DivisionByZero(String),

    #[error("Resource missing: {0}")]
    ResourceMissing(String),
}

impl DomainError {
    pub fn persistence(
        sector: impl Into<String>,
        key: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Persistence {
            sector: sector.into(),
            key: key.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DomainError>;
