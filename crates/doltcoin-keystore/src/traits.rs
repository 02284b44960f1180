//! KeypairRepository trait: the abstract interface for keypair persistence.
//!
//! The address codec never touches storage. Callers that need a persistent
//! identity go through this trait, which keeps the flat-file implementation
//! swappable for an in-memory one in tests.

use doltcoin_core::Keypair;

use crate::error::Result;

/// Result of [`load_or_create`].
#[derive(Debug, Clone)]
pub enum LoadOutcome {
    /// An existing keypair was loaded.
    Loaded(Keypair),
    /// No keypair existed; a new one was generated and stored.
    Created(Keypair),
    /// No keypair existed and the caller declined to create one.
    Declined,
}

impl LoadOutcome {
    /// The keypair, unless creation was declined.
    pub fn keypair(&self) -> Option<&Keypair> {
        match self {
            LoadOutcome::Loaded(kp) | LoadOutcome::Created(kp) => Some(kp),
            LoadOutcome::Declined => None,
        }
    }

    /// Take the keypair, unless creation was declined.
    pub fn into_keypair(self) -> Option<Keypair> {
        match self {
            LoadOutcome::Loaded(kp) | LoadOutcome::Created(kp) => Some(kp),
            LoadOutcome::Declined => None,
        }
    }
}

/// Storage for a single keypair.
///
/// # Design Notes
///
/// - **Single identity**: a repository holds at most one keypair.
/// - **No clobbering**: `create_and_store` fails with `AlreadyExists` if a
///   keypair is present; it never replaces one.
/// - **Verified reload**: `load` rejects data whose public key does not match
///   its private key.
pub trait KeypairRepository {
    /// Whether a keypair has been stored.
    fn exists(&self) -> Result<bool>;

    /// Load the stored keypair.
    ///
    /// Fails with `NotFound` if nothing has been stored.
    fn load(&self) -> Result<Keypair>;

    /// Generate a fresh keypair, store it, and return it.
    fn create_and_store(&self) -> Result<Keypair>;
}

/// Load the stored keypair, or create one if `confirm` agrees.
///
/// `confirm` is only called when nothing is stored.
pub fn load_or_create<R, F>(repo: &R, confirm: F) -> Result<LoadOutcome>
where
    R: KeypairRepository + ?Sized,
    F: FnOnce() -> Result<bool>,
{
    if repo.exists()? {
        return Ok(LoadOutcome::Loaded(repo.load()?));
    }

    if confirm()? {
        Ok(LoadOutcome::Created(repo.create_and_store()?))
    } else {
        Ok(LoadOutcome::Declined)
    }
}
