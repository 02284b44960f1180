//! Proptest generators for property-based testing.

use proptest::prelude::*;

use doltcoin_core::{
    address_bytes, checksum, AddressError, Keypair, PublicKey, ADDRESS_LEN, PAYLOAD_LEN,
    VERSION_TAG,
};

/// Generate a random keypair.
pub fn keypair() -> impl Strategy<Value = Keypair> {
    any::<[u8; 32]>().prop_map(|seed| Keypair::from_seed(&seed))
}

/// Generate arbitrary public key bytes (not necessarily a curve point).
pub fn public_key() -> impl Strategy<Value = PublicKey> {
    any::<[u8; 32]>().prop_map(PublicKey::from_bytes)
}

/// Generate a public key derived from a real keypair.
pub fn ed25519_public_key() -> impl Strategy<Value = PublicKey> {
    keypair().prop_map(|kp| kp.public_key())
}

/// Generate valid address text.
pub fn address_text() -> impl Strategy<Value = String> {
    public_key().prop_map(|pk| pk.to_address_string())
}

/// Generate a version tag other than the supported one.
pub fn foreign_version_tag() -> impl Strategy<Value = u8> {
    any::<u8>().prop_filter("supported tag", |tag| *tag != VERSION_TAG)
}

/// A way of damaging canonical address bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Corruption {
    /// Leave the bytes alone.
    Intact,
    /// Replace the version tag.
    Version(u8),
    /// Flip one bit of the public key region (bit 8..264 of the payload).
    PayloadBit(usize),
    /// XOR a non-zero mask into one checksum byte.
    Checksum { index: usize, mask: u8 },
    /// Truncate or zero-extend to a length other than 35.
    Resize(usize),
}

/// Generate a corruption.
pub fn corruption() -> impl Strategy<Value = Corruption> {
    prop_oneof![
        Just(Corruption::Intact),
        foreign_version_tag().prop_map(Corruption::Version),
        (8usize..PAYLOAD_LEN * 8).prop_map(Corruption::PayloadBit),
        (0usize..2, 1u8..=u8::MAX).prop_map(|(index, mask)| Corruption::Checksum { index, mask }),
        (0usize..=2 * ADDRESS_LEN)
            .prop_filter("canonical length", |len| *len != ADDRESS_LEN)
            .prop_map(Corruption::Resize),
    ]
}

/// Parameters for generating (possibly damaged) address bytes.
#[derive(Debug, Clone)]
pub struct AddressParams {
    pub public_key: PublicKey,
    pub corruption: Corruption,
}

impl AddressParams {
    /// The address bytes after applying the corruption.
    pub fn bytes(&self) -> Vec<u8> {
        let mut bytes = address_bytes(&self.public_key).to_vec();
        match self.corruption {
            Corruption::Intact => {}
            Corruption::Version(tag) => bytes[0] = tag,
            Corruption::PayloadBit(bit) => bytes[bit / 8] ^= 0x80 >> (bit % 8),
            Corruption::Checksum { index, mask } => bytes[PAYLOAD_LEN + index] ^= mask,
            Corruption::Resize(len) => bytes.resize(len, 0),
        }
        bytes
    }

    /// What decoding [`Self::bytes`] must produce.
    pub fn expected(&self) -> Result<PublicKey, AddressError> {
        let bytes = self.bytes();
        let original = address_bytes(&self.public_key);
        let mut supplied = [0u8; 2];
        match self.corruption {
            Corruption::Intact => Ok(self.public_key),
            Corruption::Version(tag) => Err(AddressError::UnsupportedVersion(tag)),
            Corruption::PayloadBit(_) => {
                supplied.copy_from_slice(&original[PAYLOAD_LEN..]);
                Err(AddressError::ChecksumMismatch {
                    expected: checksum(&bytes[..PAYLOAD_LEN]),
                    actual: supplied,
                })
            }
            Corruption::Checksum { .. } => {
                supplied.copy_from_slice(&bytes[PAYLOAD_LEN..]);
                Err(AddressError::ChecksumMismatch {
                    expected: checksum(&original[..PAYLOAD_LEN]),
                    actual: supplied,
                })
            }
            Corruption::Resize(len) => Err(AddressError::InvalidLength {
                expected: ADDRESS_LEN,
                actual: len,
            }),
        }
    }
}

impl Arbitrary for AddressParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (public_key(), corruption())
            .prop_map(|(public_key, corruption)| AddressParams {
                public_key,
                corruption,
            })
            .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doltcoin_core::{decode, decode_bytes};

    proptest! {
        #[test]
        fn test_decode_matches_prediction(params: AddressParams) {
            prop_assert_eq!(decode_bytes(&params.bytes()), params.expected());
        }

        #[test]
        fn test_address_text_decodes(text in address_text()) {
            prop_assert!(decode(&text).is_ok());
        }

        #[test]
        fn test_real_keys_roundtrip(pk in ed25519_public_key()) {
            prop_assert_eq!(decode(&pk.to_address_string()), Ok(pk));
        }
    }
}
