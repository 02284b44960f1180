//! Error types for DoltCoin Core.

use thiserror::Error;

/// Errors produced while encoding or decoding an address.
///
/// Every variant describes bad input. None of them are transient, so callers
/// should surface them rather than retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// The key handed to the encoder is not 32 bytes.
    #[error("invalid public key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    /// The address text is not valid padded Base32.
    #[error("malformed address encoding: {0}")]
    MalformedEncoding(String),

    /// The decoded address has the wrong number of bytes.
    #[error("invalid address length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// The version tag belongs to another address class.
    #[error("unsupported address version tag: {0:#04x}")]
    UnsupportedVersion(u8),

    /// The trailing checksum does not match the payload.
    #[error("checksum mismatch: expected {}, got {}", hex::encode(.expected), hex::encode(.actual))]
    ChecksumMismatch { expected: [u8; 2], actual: [u8; 2] },
}

impl From<data_encoding::DecodeError> for AddressError {
    fn from(e: data_encoding::DecodeError) -> Self {
        AddressError::MalformedEncoding(e.to_string())
    }
}

/// Result type for address operations.
pub type Result<T> = std::result::Result<T, AddressError>;
