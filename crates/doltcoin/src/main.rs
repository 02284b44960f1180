//! `doltcoin` command line: show the DoltCoin address for a local keypair.

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use doltcoin::keystore::DEFAULT_KEYPAIR_PATH;
use doltcoin::{confirm, Wallet, WalletConfig};
use tracing::Level;

#[derive(Parser)]
#[command(name = "doltcoin", version, about = "Show the DoltCoin address for a local keypair")]
struct Cli {
    /// Keypair record path
    #[arg(long, value_name = "PATH", default_value = DEFAULT_KEYPAIR_PATH)]
    keypair: PathBuf,
    /// Create a missing keypair without prompting
    #[arg(short = 'y', long)]
    yes: bool,
    /// Print the report as JSON
    #[arg(long)]
    json: bool,
    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Validate an address and print the public key it encodes
    Decode {
        address: String,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Some(Command::Decode { address }) = cli.cmd {
        let public_key = doltcoin::decode(address.trim())
            .with_context(|| format!("invalid address {:?}", address))?;
        println!("{}", public_key.to_hex());
        return Ok(());
    }

    let config = WalletConfig {
        keypair_path: cli.keypair,
        assume_yes: cli.yes,
    };
    let question = format!(
        "{} does not exist. Would you like to create one now?",
        config.keypair_path.display()
    );
    let wallet = Wallet::open(config);

    let report = wallet
        .run(|| confirm(io::stdin().lock(), io::stdout(), &question))
        .with_context(|| format!("reading {}", wallet.config().keypair_path.display()))?;

    let Some(report) = report else {
        println!("Exiting...");
        return Ok(());
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}
