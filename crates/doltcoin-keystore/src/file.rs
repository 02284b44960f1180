//! Flat-file implementation of the KeypairRepository trait.
//!
//! The keypair lives in a single text file holding a [`KeypairRecord`].
//! Writes go to a uniquely named temp file in the same directory, which is
//! synced and then moved into place only if no record exists yet. A crash
//! never leaves a half-written record behind, and two creators racing for
//! the same path cannot both succeed.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use doltcoin_core::Keypair;
use tempfile::NamedTempFile;

use crate::error::{KeystoreError, Result};
use crate::record::KeypairRecord;
use crate::traits::KeypairRepository;

/// Default record location, relative to the working directory.
pub const DEFAULT_KEYPAIR_PATH: &str = "keypair.txt";

/// Keypair repository backed by a flat text file.
#[derive(Debug, Clone)]
pub struct FileKeypairRepository {
    path: PathBuf,
}

impl FileKeypairRepository {
    /// Use the record at `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The record path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn write_atomic(&self, contents: &[u8]) -> Result<()> {
        let dir = match self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(dir) => {
                fs::create_dir_all(dir)?;
                dir
            }
            None => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tmp.as_file()
                .set_permissions(fs::Permissions::from_mode(0o600))?;
        }
        tmp.write_all(contents)?;
        tmp.as_file().sync_all()?;

        tmp.persist_noclobber(&self.path).map_err(|e| {
            if e.error.kind() == ErrorKind::AlreadyExists {
                KeystoreError::AlreadyExists(self.location())
            } else {
                KeystoreError::Io(e.error)
            }
        })?;

        // Persist the link itself.
        #[cfg(unix)]
        {
            if let Ok(dirf) = fs::File::open(dir) {
                let _ = dirf.sync_all();
            }
        }
        Ok(())
    }
}

impl Default for FileKeypairRepository {
    fn default() -> Self {
        Self::new(DEFAULT_KEYPAIR_PATH)
    }
}

impl KeypairRepository for FileKeypairRepository {
    fn exists(&self) -> Result<bool> {
        Ok(self.path.try_exists()?)
    }

    fn load(&self) -> Result<Keypair> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(KeystoreError::NotFound(self.location()));
            }
            Err(e) => return Err(e.into()),
        };

        let record = KeypairRecord::parse(&text)?;
        tracing::debug!(path = %self.path.display(), public_key = %record.keypair().public_key(), "loaded keypair");
        Ok(record.into_keypair())
    }

    fn create_and_store(&self) -> Result<Keypair> {
        // Fast path only; the final move refuses to replace a record either way.
        if self.exists()? {
            return Err(KeystoreError::AlreadyExists(self.location()));
        }

        let keypair = Keypair::generate();
        let record = KeypairRecord::new(keypair);
        self.write_atomic(record.to_text().as_bytes())?;

        tracing::info!(path = %self.path.display(), "created keypair");
        Ok(record.into_keypair())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let repo = FileKeypairRepository::new(dir.path().join("keypair.txt"));
        assert!(!repo.exists().unwrap());
        assert!(matches!(repo.load(), Err(KeystoreError::NotFound(_))));
    }

    #[test]
    fn test_create_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("keypair.txt");
        let repo = FileKeypairRepository::new(&path);

        let created = repo.create_and_store().unwrap();
        assert!(repo.exists().unwrap());

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.len(), 128);
        assert_eq!(contents, hex::encode(created.keypair_bytes()));

        let loaded = repo.load().unwrap();
        assert_eq!(loaded.public_key(), created.public_key());
        assert_eq!(loaded.seed(), created.seed());

        // No temp file left behind
        let entries: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("keypair.txt")]);
    }

    #[test]
    fn test_create_in_missing_directory() {
        let dir = tempdir().unwrap();
        let repo = FileKeypairRepository::new(dir.path().join("nested").join("keypair.txt"));
        repo.create_and_store().unwrap();
        assert!(repo.exists().unwrap());
    }

    #[test]
    fn test_create_refuses_to_clobber() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("keypair.txt");
        let repo = FileKeypairRepository::new(&path);

        let first = repo.create_and_store().unwrap();
        assert!(matches!(
            repo.create_and_store(),
            Err(KeystoreError::AlreadyExists(_))
        ));
        assert_eq!(repo.load().unwrap().public_key(), first.public_key());
    }

    #[test]
    fn test_concurrent_create_reports_stored_key() {
        use std::sync::{Arc, Barrier};
        use std::thread;

        for _ in 0..50 {
            let dir = tempdir().unwrap();
            let repo = FileKeypairRepository::new(dir.path().join("keypair.txt"));
            let barrier = Arc::new(Barrier::new(2));

            let handles: Vec<_> = (0..2)
                .map(|_| {
                    let repo = repo.clone();
                    let barrier = Arc::clone(&barrier);
                    thread::spawn(move || {
                        barrier.wait();
                        repo.create_and_store()
                    })
                })
                .collect();
            let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

            let stored = repo.load().unwrap();
            let mut created = 0;
            for result in results {
                match result {
                    Ok(keypair) => {
                        assert_eq!(keypair.public_key(), stored.public_key());
                        assert_eq!(keypair.seed(), stored.seed());
                        created += 1;
                    }
                    Err(KeystoreError::AlreadyExists(_)) => {}
                    Err(e) => panic!("unexpected error: {e}"),
                }
            }
            assert_eq!(created, 1);
        }
    }

    #[test]
    fn test_create_leaves_sibling_files_alone() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("keypair.txt");
        let sibling = dir.path().join("keypair.tmp");
        fs::write(&sibling, "unrelated").unwrap();

        FileKeypairRepository::new(&path).create_and_store().unwrap();

        assert_eq!(fs::read_to_string(&sibling).unwrap(), "unrelated");
        assert_eq!(fs::read_to_string(&path).unwrap().len(), 128);
    }

    #[test]
    fn test_load_hand_written_record() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("keypair.txt");
        let keypair = Keypair::from_seed(&[0x42; 32]);
        fs::write(&path, format!("{}\n", hex::encode(keypair.keypair_bytes()))).unwrap();

        let repo = FileKeypairRepository::new(&path);
        assert_eq!(repo.load().unwrap().public_key(), keypair.public_key());
    }

    #[test]
    fn test_load_corrupt_record() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("keypair.txt");
        fs::write(&path, "not a keypair").unwrap();

        let repo = FileKeypairRepository::new(&path);
        assert!(repo.exists().unwrap());
        assert!(matches!(
            repo.load(),
            Err(KeystoreError::InvalidRecordLength { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_record_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let path = dir.path().join("keypair.txt");
        FileKeypairRepository::new(&path).create_and_store().unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_default_path() {
        let repo = FileKeypairRepository::default();
        assert_eq!(repo.path(), Path::new("keypair.txt"));
    }
}
