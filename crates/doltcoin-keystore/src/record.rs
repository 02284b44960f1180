//! The flat-text keypair record.
//!
//! A record is `hex(seed) || hex(public_key)`: 128 lowercase hex characters
//! with no separator. This is the 64-byte Ed25519 keypair (seed followed by
//! the public key it derives) written out as hex.

use std::fmt;
use std::str::FromStr;

use doltcoin_core::{Keypair, PublicKey};

use crate::error::{KeystoreError, Result};

/// Hex characters in a full record.
pub const RECORD_HEX_LEN: usize = 128;

/// A parsed and verified keypair record.
#[derive(Clone)]
pub struct KeypairRecord {
    keypair: Keypair,
}

impl KeypairRecord {
    /// Wrap a keypair for writing.
    pub fn new(keypair: Keypair) -> Self {
        Self { keypair }
    }

    /// Parse a record, checking that the public key half matches the seed.
    ///
    /// Leading and trailing whitespace is ignored so that a record saved by
    /// a text editor with a final newline still loads.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        if text.len() != RECORD_HEX_LEN {
            return Err(KeystoreError::InvalidRecordLength {
                expected: RECORD_HEX_LEN,
                actual: text.len(),
            });
        }

        let mut bytes = [0u8; RECORD_HEX_LEN / 2];
        hex::decode_to_slice(text, &mut bytes)?;

        let mut seed = [0u8; 32];
        seed.copy_from_slice(&bytes[..32]);
        let mut stored = [0u8; 32];
        stored.copy_from_slice(&bytes[32..]);
        let stored = PublicKey::from_bytes(stored);

        let keypair = Keypair::from_seed(&seed);
        if keypair.public_key() != stored {
            return Err(KeystoreError::KeyMismatch);
        }

        Ok(Self { keypair })
    }

    /// Render the record text.
    pub fn to_text(&self) -> String {
        hex::encode(self.keypair.keypair_bytes())
    }

    /// Borrow the keypair.
    pub fn keypair(&self) -> &Keypair {
        &self.keypair
    }

    /// Take the keypair.
    pub fn into_keypair(self) -> Keypair {
        self.keypair
    }
}

impl fmt::Debug for KeypairRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeypairRecord({:?})", self.keypair.public_key())
    }
}

impl FromStr for KeypairRecord {
    type Err = KeystoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
