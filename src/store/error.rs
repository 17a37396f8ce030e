//! Gateway failure taxonomy

use thiserror::Error;

/// Errors returned by an employee gateway
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The requested employee does not exist
    #[error("employee {0} not found")]
    NotFound(u32),

    /// The store rejected the submitted record
    #[error("store rejected the employee: {0}")]
    Validation(String),

    /// Connection, timeout or decoding failure
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("store answered with unexpected status {0}")]
    UnexpectedStatus(u16),
}

impl GatewayError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, GatewayError::NotFound(_))
    }
}
