//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use doltcoin_core::{Address, Keypair, PublicKey};
use doltcoin_keystore::MemoryKeypairRepository;

/// A test fixture with a keypair and a repository already holding it.
pub struct TestFixture {
    pub keypair: Keypair,
    pub repo: MemoryKeypairRepository,
}

impl TestFixture {
    /// Create a new test fixture with a random keypair.
    pub fn new() -> Self {
        Self::from_keypair(Keypair::generate())
    }

    /// Create with a deterministic keypair from seed.
    pub fn with_seed(seed: [u8; 32]) -> Self {
        Self::from_keypair(Keypair::from_seed(&seed))
    }

    fn from_keypair(keypair: Keypair) -> Self {
        Self {
            repo: MemoryKeypairRepository::with_keypair(keypair.clone()),
            keypair,
        }
    }

    /// Get the keypair's public key.
    pub fn public_key(&self) -> PublicKey {
        self.keypair.public_key()
    }

    /// The fixture's address.
    pub fn address(&self) -> Address {
        self.keypair.address()
    }

    /// The fixture's address as text.
    pub fn address_text(&self) -> String {
        self.address().to_string()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Create multiple test fixtures with distinct deterministic keys.
pub fn multi_party_fixtures(count: usize) -> Vec<TestFixture> {
    (0..count)
        .map(|i| {
            let mut seed = [0u8; 32];
            seed[0] = i as u8;
            TestFixture::with_seed(seed)
        })
        .collect()
}
