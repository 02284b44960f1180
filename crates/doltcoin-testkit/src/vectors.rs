//! Golden test vectors for deterministic verification.
//!
//! These vectors pin the address layout, checksum, and text encoding so that
//! every implementation produces identical addresses.

use doltcoin_core::{address_bytes, encode_public_key, Keypair, PublicKey};

/// Where a vector's public key comes from.
#[derive(Debug, Clone, Copy)]
pub enum KeySource {
    /// Raw public key bytes.
    Raw([u8; 32]),
    /// Ed25519 seed; the public key is derived from it.
    Seed([u8; 32]),
}

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Key input.
    pub source: KeySource,
    /// Expected checksum (hex).
    pub expected_checksum: &'static str,
    /// Expected address text.
    pub expected_address: &'static str,
}

impl GoldenVector {
    /// The public key under test.
    pub fn public_key(&self) -> PublicKey {
        match self.source {
            KeySource::Raw(bytes) => PublicKey::from_bytes(bytes),
            KeySource::Seed(seed) => Keypair::from_seed(&seed).public_key(),
        }
    }
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "all-zero public key",
            source: KeySource::Raw([0x00; 32]),
            expected_checksum: "f4a6",
            expected_address: "DAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAB5FG",
        },
        GoldenVector {
            name: "all-ones public key",
            source: KeySource::Raw([0xff; 32]),
            expected_checksum: "694f",
            expected_address: "DD7777777777777777777777777777777777777777777777777762KP",
        },
        GoldenVector {
            name: "zero seed",
            source: KeySource::Seed([0x00; 32]),
            expected_checksum: "13ea",
            expected_address: "DA5WUJ54Z23KILLCUOUNAKTPBVZWKMQVO4O6EQ5GHLAERIMLLHNCSE7K",
        },
        GoldenVector {
            name: "seed 0x01",
            source: KeySource::Seed([0x01; 32]),
            expected_checksum: "6965",
            expected_address: "DCFIRY65OQE7DFP5KLNS2PF2LVZMUZYJX4OZIEQ36N2IQANUB5XVY2LF",
        },
        GoldenVector {
            name: "seed 0x42",
            source: KeySource::Seed([0x42; 32]),
            expected_checksum: "53d7",
            expected_address: "DAQVF6GRTN4R2JCFGJBOCXZOVNWLPT72PNVF5UYAS6LA4BUYQHNREU6X",
        },
    ]
}

/// Verify all golden vectors.
///
/// Returns `(name, matches, produced_address)` for each vector.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| {
            let pk = v.public_key();
            let address = encode_public_key(&pk);
            let checksum = hex::encode(&address_bytes(&pk)[33..]);
            let matches = address == v.expected_address && checksum == v.expected_checksum;
            (v.name.to_string(), matches, address)
        })
        .collect()
}
