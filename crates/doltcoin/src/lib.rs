//! # DoltCoin
//!
//! Derive a shareable DoltCoin address from a locally stored Ed25519 keypair.
//!
//! ## Overview
//!
//! - **Keypair lifecycle**: generate once, persist to `keypair.txt`, reload
//! - **Address derivation**: deterministic, pure, and reversible
//!
//! ## Usage
//!
//! ```rust,no_run
//! use doltcoin::{Wallet, WalletConfig};
//!
//! let wallet = Wallet::open(WalletConfig::default());
//! if let Some(report) = wallet.run(|| Ok(true)).unwrap() {
//!     println!("{}", report);
//! }
//! ```
//!
//! Addresses can be checked without any keypair:
//!
//! ```rust
//! let key = doltcoin::decode("DAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAB5FG").unwrap();
//! assert_eq!(key.as_bytes(), &[0u8; 32]);
//! ```
//!
//! ## Re-exports
//!
//! - `doltcoin::core` - Address codec and key types
//! - `doltcoin::keystore` - Keypair repositories

pub mod error;
pub mod wallet;

// Re-export component crates
pub use doltcoin_core as core;
pub use doltcoin_keystore as keystore;

pub use error::{Result, WalletError};
pub use wallet::{confirm, Wallet, WalletConfig, WalletReport};

// Re-export commonly used core types
pub use doltcoin_core::{
    checksum, decode, encode, validate, Address, AddressError, Keypair, PublicKey,
};
pub use doltcoin_keystore::{
    FileKeypairRepository, KeypairRepository, KeystoreError, LoadOutcome,
    MemoryKeypairRepository,
};
