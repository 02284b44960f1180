//! The Wallet: keypair lifecycle plus address derivation.
//!
//! Ties a [`KeypairRepository`] to the address codec. The wallet owns no
//! terminal; confirmation is injected so the flow can run unattended.

use std::fmt;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use doltcoin_core::{Address, Keypair, PublicKey};
use doltcoin_keystore::{
    load_or_create, FileKeypairRepository, KeypairRepository, LoadOutcome, DEFAULT_KEYPAIR_PATH,
};
use serde::Serialize;

use crate::error::Result;

/// Configuration for the Wallet.
#[derive(Debug, Clone)]
pub struct WalletConfig {
    /// Where the keypair record lives.
    pub keypair_path: PathBuf,
    /// Create a missing keypair without asking.
    pub assume_yes: bool,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            keypair_path: PathBuf::from(DEFAULT_KEYPAIR_PATH),
            assume_yes: false,
        }
    }
}

/// What the wallet shows for a keypair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WalletReport {
    /// The derived address.
    pub address: Address,
    /// The 32-byte private seed, hex encoded.
    pub private_key: String,
    /// The public key, hex encoded.
    pub public_key: PublicKey,
}

impl WalletReport {
    /// Build the report for `keypair`.
    pub fn new(keypair: &Keypair) -> Self {
        Self {
            address: keypair.address(),
            private_key: hex::encode(keypair.seed()),
            public_key: keypair.public_key(),
        }
    }
}

impl fmt::Display for WalletReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DoltCoin address: {}", self.address)?;
        writeln!(f, "Private key: {}", self.private_key)?;
        write!(f, "Public key: {}", self.public_key)
    }
}

/// The main Wallet struct.
pub struct Wallet<R: KeypairRepository> {
    /// The keypair storage backend.
    repo: R,
    /// Configuration.
    config: WalletConfig,
}

impl Wallet<FileKeypairRepository> {
    /// Open a wallet backed by the record at `config.keypair_path`.
    pub fn open(config: WalletConfig) -> Self {
        let repo = FileKeypairRepository::new(&config.keypair_path);
        Self::new(repo, config)
    }
}

impl<R: KeypairRepository> Wallet<R> {
    /// Create a wallet over any repository.
    pub fn new(repo: R, config: WalletConfig) -> Self {
        Self { repo, config }
    }

    /// Get the repository reference.
    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Get the configuration.
    pub fn config(&self) -> &WalletConfig {
        &self.config
    }

    /// Load the keypair, creating it if `confirm` agrees, and report it.
    ///
    /// Returns `None` if no keypair exists and creation was declined.
    /// `confirm` is skipped when `assume_yes` is set.
    pub fn run<F>(&self, confirm: F) -> Result<Option<WalletReport>>
    where
        F: FnOnce() -> std::io::Result<bool>,
    {
        // Prompt here rather than inside the repository so a failed read of
        // the answer surfaces as a terminal error, not a keystore one.
        let create = self.config.assume_yes || self.repo.exists()? || confirm()?;
        let outcome = load_or_create(&self.repo, || Ok(create))?;

        match &outcome {
            LoadOutcome::Loaded(kp) => {
                tracing::debug!(public_key = %kp.public_key(), "using stored keypair");
            }
            LoadOutcome::Created(kp) => {
                tracing::info!(public_key = %kp.public_key(), "generated new keypair");
            }
            LoadOutcome::Declined => {
                tracing::debug!("keypair creation declined");
            }
        }

        Ok(outcome.keypair().map(WalletReport::new))
    }
}

/// Ask a yes/no `question` on `output` and read the answer from `input`.
///
/// Only `y` (any case, surrounding whitespace ignored) counts as yes. End of
/// input counts as no.
pub fn confirm<I, O>(mut input: I, mut output: O, question: &str) -> std::io::Result<bool>
where
    I: BufRead,
    O: Write,
{
    writeln!(output, "{} y/n", question)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().eq_ignore_ascii_case("y"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use doltcoin_keystore::MemoryKeypairRepository;

    fn memory_wallet(assume_yes: bool) -> Wallet<MemoryKeypairRepository> {
        Wallet::new(
            MemoryKeypairRepository::new(),
            WalletConfig {
                assume_yes,
                ..WalletConfig::default()
            },
        )
    }

    #[test]
    fn test_report_for_zero_seed() {
        let report = WalletReport::new(&Keypair::from_seed(&[0u8; 32]));
        assert_eq!(report.private_key, "00".repeat(32));
        assert_eq!(
            report.public_key.to_hex(),
            "3b6a27bcceb6a42d62a3a8d02a6f0d73653215771de243a63ac048a18b59da29"
        );
        assert_eq!(
            report.address.to_string(),
            "DA5WUJ54Z23KILLCUOUNAKTPBVZWKMQVO4O6EQ5GHLAERIMLLHNCSE7K"
        );
    }

    #[test]
    fn test_report_display() {
        let report = WalletReport::new(&Keypair::from_seed(&[0u8; 32]));
        let text = report.to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("DoltCoin address: DA5WUJ54"));
        assert!(lines[1].starts_with("Private key: 0000"));
        assert!(lines[2].starts_with("Public key: 3b6a27bc"));
    }

    #[test]
    fn test_run_declined() {
        let wallet = memory_wallet(false);
        assert!(wallet.run(|| Ok(false)).unwrap().is_none());
        assert!(!wallet.repository().exists().unwrap());
    }

    #[test]
    fn test_run_creates_and_is_stable() {
        let wallet = memory_wallet(false);
        let first = wallet.run(|| Ok(true)).unwrap().unwrap();
        let second = wallet.run(|| panic!("should not prompt")).unwrap().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_run_assume_yes_skips_prompt() {
        let wallet = memory_wallet(true);
        let report = wallet.run(|| panic!("should not prompt")).unwrap();
        assert!(report.is_some());
    }

    #[test]
    fn test_run_prompt_failure_is_io_error() {
        use crate::error::WalletError;
        use std::io::{Error, ErrorKind};

        let wallet = memory_wallet(false);
        let err = wallet
            .run(|| Err(Error::new(ErrorKind::BrokenPipe, "stdin closed")))
            .unwrap_err();
        assert!(matches!(err, WalletError::Io(_)));
        assert!(!wallet.repository().exists().unwrap());
    }

    #[test]
    fn test_confirm_answers() {
        for (answer, expected) in [
            ("y\n", true),
            ("Y\n", true),
            ("  y  \r\n", true),
            ("yes\n", false),
            ("n\n", false),
            ("\n", false),
            ("", false),
        ] {
            let mut out = Vec::new();
            let got = confirm(answer.as_bytes(), &mut out, "Create?").unwrap();
            assert_eq!(got, expected, "answer {:?}", answer);
            assert_eq!(String::from_utf8(out).unwrap(), "Create? y/n\n");
        }
    }
}
