//! The address codec.
//!
//! An address is the 35-byte string `version_tag || public_key || checksum`,
//! shown to users as standard padded Base32 (RFC 4648 §6). Every step builds a
//! new fixed-size array; nothing is appended in place, so the caller's key
//! buffer is never shared with the output.

use data_encoding::BASE32;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::checksum::{checksum, CHECKSUM_LEN};
use crate::crypto::{PublicKey, PUBLIC_KEY_LEN};
use crate::error::{AddressError, Result};

/// Address format version number.
pub const VERSION_NUMBER: u8 = 3;

/// The version byte that leads every payload. The number lives in the high
/// five bits.
pub const VERSION_TAG: u8 = VERSION_NUMBER << 3;

/// Version tag plus public key.
pub const PAYLOAD_LEN: usize = 1 + PUBLIC_KEY_LEN;

/// Payload plus checksum.
pub const ADDRESS_LEN: usize = PAYLOAD_LEN + CHECKSUM_LEN;

/// Length of the Base32 text form. 35 bytes fill exactly 56 symbols, so no
/// padding characters appear.
pub const ADDRESS_TEXT_LEN: usize = 56;

/// Build the payload for `public_key`.
fn payload(public_key: &PublicKey) -> [u8; PAYLOAD_LEN] {
    let mut payload = [0u8; PAYLOAD_LEN];
    payload[0] = VERSION_TAG;
    payload[1..].copy_from_slice(public_key.as_bytes());
    payload
}

/// Build the canonical 35-byte address for `public_key`.
pub fn address_bytes(public_key: &PublicKey) -> [u8; ADDRESS_LEN] {
    let payload = payload(public_key);
    let mut bytes = [0u8; ADDRESS_LEN];
    bytes[..PAYLOAD_LEN].copy_from_slice(&payload);
    bytes[PAYLOAD_LEN..].copy_from_slice(&checksum(&payload));
    bytes
}

/// Encode a typed public key as address text.
pub fn encode_public_key(public_key: &PublicKey) -> String {
    BASE32.encode(&address_bytes(public_key))
}

/// Encode raw public key bytes as address text.
///
/// Fails with [`AddressError::InvalidKeyLength`] unless `public_key` is
/// exactly 32 bytes.
pub fn encode(public_key: &[u8]) -> Result<String> {
    let key = PublicKey::try_from(public_key)?;
    Ok(encode_public_key(&key))
}

/// Decode address text back into the public key it was derived from.
///
/// Checks run in order: Base32 well-formedness, length, version tag, then
/// checksum.
pub fn decode(address_text: &str) -> Result<PublicKey> {
    let bytes = BASE32.decode(address_text.as_bytes())?;
    decode_bytes(&bytes)
}

/// Validate raw address bytes and extract the public key.
///
/// The version tag is checked before the checksum so that an address from a
/// different class is reported as such rather than as corruption.
pub fn decode_bytes(bytes: &[u8]) -> Result<PublicKey> {
    let bytes: &[u8; ADDRESS_LEN] =
        bytes.try_into().map_err(|_| AddressError::InvalidLength {
            expected: ADDRESS_LEN,
            actual: bytes.len(),
        })?;

    let (payload, supplied) = bytes.split_at(PAYLOAD_LEN);

    if payload[0] != VERSION_TAG {
        return Err(AddressError::UnsupportedVersion(payload[0]));
    }

    let expected = checksum(payload);
    if supplied != &expected[..] {
        let mut actual = [0u8; CHECKSUM_LEN];
        actual.copy_from_slice(supplied);
        return Err(AddressError::ChecksumMismatch { expected, actual });
    }

    PublicKey::try_from(&payload[1..])
}

/// Check that `address_text` is a well-formed address.
pub fn validate(address_text: &str) -> Result<()> {
    decode(address_text).map(|_| ())
}

/// A validated address.
///
/// Holds the canonical 35 bytes. Displays as Base32 text and parses from it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    /// Derive the address for a public key.
    pub fn from_public_key(public_key: &PublicKey) -> Self {
        Self(address_bytes(public_key))
    }

    /// The public key this address was derived from.
    pub fn public_key(&self) -> PublicKey {
        let mut key = [0u8; PUBLIC_KEY_LEN];
        key.copy_from_slice(&self.0[1..PAYLOAD_LEN]);
        PublicKey(key)
    }

    /// The version tag (always [`VERSION_TAG`] for a constructed address).
    pub const fn version_tag(&self) -> u8 {
        self.0[0]
    }

    /// The trailing checksum.
    pub fn checksum(&self) -> [u8; CHECKSUM_LEN] {
        [self.0[PAYLOAD_LEN], self.0[PAYLOAD_LEN + 1]]
    }

    /// Get the canonical bytes.
    pub const fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    /// Render as Base32 text.
    pub fn to_text(&self) -> String {
        BASE32.encode(&self.0)
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({}...)", &self.to_text()[..12])
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self> {
        let key = decode(s)?;
        Ok(Self::from_public_key(&key))
    }
}

impl TryFrom<&[u8]> for Address {
    type Error = AddressError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        let key = decode_bytes(bytes)?;
        Ok(Self::from_public_key(&key))
    }
}

impl From<PublicKey> for Address {
    fn from(public_key: PublicKey) -> Self {
        Self::from_public_key(&public_key)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_text())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
