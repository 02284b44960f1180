//! Error types for the wallet.

use doltcoin_core::AddressError;
use doltcoin_keystore::KeystoreError;
use thiserror::Error;

/// Errors that can occur during wallet operations.
#[derive(Debug, Error)]
pub enum WalletError {
    /// Address encoding or validation error.
    #[error("address error: {0}")]
    Address(#[from] AddressError),

    /// Keypair storage error.
    #[error("keystore error: {0}")]
    Keystore(#[from] KeystoreError),

    /// I/O error while prompting or printing.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for wallet operations.
pub type Result<T> = std::result::Result<T, WalletError>;
