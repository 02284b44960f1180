//! # DoltCoin Testkit
//!
//! Testing utilities for DoltCoin.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known keys with expected checksums and address text
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Helper structs for setting up test scenarios
//!
//! ## Golden Vectors
//!
//! ```rust
//! use doltcoin_testkit::vectors::verify_all_vectors;
//!
//! for (name, ok, address) in verify_all_vectors() {
//!     assert!(ok, "{} produced {}", name, address);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use doltcoin_testkit::generators::public_key;
//!
//! proptest! {
//!     #[test]
//!     fn address_roundtrips(pk in public_key()) {
//!         let text = doltcoin_core::encode_public_key(&pk);
//!         prop_assert_eq!(doltcoin_core::decode(&text), Ok(pk));
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use doltcoin_testkit::fixtures::TestFixture;
//!
//! let fixture = TestFixture::with_seed([7u8; 32]);
//! let text = fixture.address_text();
//! assert_eq!(text.len(), 56);
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{multi_party_fixtures, TestFixture};
pub use generators::{AddressParams, Corruption};
pub use vectors::{all_vectors, verify_all_vectors, GoldenVector};
