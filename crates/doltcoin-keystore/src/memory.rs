//! In-memory implementation of the KeypairRepository trait.
//!
//! This is primarily for testing. It has the same semantics as the file
//! repository but keeps the keypair in memory with no persistence.

use std::sync::RwLock;

use doltcoin_core::Keypair;

use crate::error::{KeystoreError, Result};
use crate::traits::KeypairRepository;

const LOCATION: &str = "<memory>";

/// In-memory keypair repository.
///
/// Thread-safe via RwLock.
pub struct MemoryKeypairRepository {
    inner: RwLock<Option<Keypair>>,
}

impl MemoryKeypairRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(None),
        }
    }

    /// Create a repository that already holds `keypair`.
    pub fn with_keypair(keypair: Keypair) -> Self {
        Self {
            inner: RwLock::new(Some(keypair)),
        }
    }
}

impl Default for MemoryKeypairRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl KeypairRepository for MemoryKeypairRepository {
    fn exists(&self) -> Result<bool> {
        let inner = self.inner.read().unwrap();
        Ok(inner.is_some())
    }

    fn load(&self) -> Result<Keypair> {
        let inner = self.inner.read().unwrap();
        inner
            .clone()
            .ok_or_else(|| KeystoreError::NotFound(LOCATION.to_string()))
    }

    fn create_and_store(&self) -> Result<Keypair> {
        let mut inner = self.inner.write().unwrap();
        if inner.is_some() {
            return Err(KeystoreError::AlreadyExists(LOCATION.to_string()));
        }
        let keypair = Keypair::generate();
        *inner = Some(keypair.clone());
        Ok(keypair)
    }
}
