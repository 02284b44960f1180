//! # DoltCoin Core
//!
//! Pure primitives for DoltCoin: the address codec, its checksum, and the
//! Ed25519 key types addresses are derived from.
//!
//! This crate contains no I/O, no storage, no networking. It is pure computation
//! over fixed-size byte strings.
//!
//! ## Key Types
//!
//! - [`Address`] - A validated 35-byte address, rendered as Base32 text
//! - [`PublicKey`] - A 32-byte Ed25519 public key
//! - [`Keypair`] - An Ed25519 signing key and its public half
//! - [`AddressError`] - Why an address failed to encode or decode
//!
//! ## Address Layout
//!
//! ```text
//! +---------+----------------------+----------+
//! | 0x18    | public key (32)      | crc (2)  |
//! +---------+----------------------+----------+
//! ```
//!
//! The version tag is `3 << 3`. The checksum is the low 16 bits of CRC-32C
//! over the first 33 bytes, big-endian. See the `address` and `checksum` modules.

pub mod address;
pub mod checksum;
pub mod crypto;
pub mod error;

pub use address::{
    address_bytes, decode, decode_bytes, encode, encode_public_key, validate, Address,
    ADDRESS_LEN, ADDRESS_TEXT_LEN, PAYLOAD_LEN, VERSION_NUMBER, VERSION_TAG,
};
pub use checksum::{checksum, CHECKSUM_LEN};
pub use crypto::{Keypair, PublicKey, PUBLIC_KEY_LEN};
pub use error::{AddressError, Result};
