//! Error types for the keystore.

use thiserror::Error;

/// Errors that can occur while persisting or reloading a keypair.
#[derive(Debug, Error)]
pub enum KeystoreError {
    /// No keypair record exists.
    #[error("keypair not found: {0}")]
    NotFound(String),

    /// A keypair record already exists and would be overwritten.
    #[error("keypair already exists: {0}")]
    AlreadyExists(String),

    /// The record is not the expected number of hex characters.
    #[error("invalid keypair record length: expected {expected} characters, got {actual}")]
    InvalidRecordLength { expected: usize, actual: usize },

    /// The record contains non-hex characters.
    #[error("invalid hex in keypair record: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// The stored public key was not derived from the stored seed.
    #[error("stored public key does not match the private key")]
    KeyMismatch,

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for keystore operations.
pub type Result<T> = std::result::Result<T, KeystoreError>;
