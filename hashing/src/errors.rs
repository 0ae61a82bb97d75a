use thiserror::Error;

/// Error type for secret hashing operations.
#[derive(Debug, Clone, Error)]
pub enum HashError {
    #[error("Secret hashing failed: {0}")]
    HashingFailed(String),

    #[error("Invalid secret hash: {0}")]
    InvalidHash(String),
}
