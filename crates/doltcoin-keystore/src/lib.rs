//! # DoltCoin Keystore
//!
//! Keypair persistence for DoltCoin. Provides a trait-based interface for
//! creating, storing, and reloading the single keypair an address is derived
//! from, with a flat-file and an in-memory implementation.
//!
//! ## Key Types
//!
//! - [`KeypairRepository`] - The trait for keypair persistence
//! - [`FileKeypairRepository`] - Flat hex record on disk (`keypair.txt`)
//! - [`MemoryKeypairRepository`] - In-memory storage for tests
//! - [`KeypairRecord`] - The on-disk text format
//!
//! ## Usage
//!
//! ```rust,no_run
//! use doltcoin_keystore::{FileKeypairRepository, KeypairRepository};
//!
//! let repo = FileKeypairRepository::new("keypair.txt");
//! let keypair = if repo.exists().unwrap() {
//!     repo.load().unwrap()
//! } else {
//!     repo.create_and_store().unwrap()
//! };
//! println!("{}", keypair.address());
//! ```
//!
//! ## Design Notes
//!
//! - **No clobbering**: `create_and_store` refuses to replace an existing record
//! - **Verified reload**: a record whose public key does not match its seed is rejected
//! - **Atomic writes**: the file repository writes a temp file and renames it into place

pub mod error;
pub mod file;
pub mod memory;
pub mod record;
pub mod traits;

pub use error::{KeystoreError, Result};
pub use file::{FileKeypairRepository, DEFAULT_KEYPAIR_PATH};
pub use memory::MemoryKeypairRepository;
pub use record::{KeypairRecord, RECORD_HEX_LEN};
pub use traits::{load_or_create, KeypairRepository, LoadOutcome};
