//! nep2: encrypt and decrypt NEO private keys with NEP-2
//!
//! # Usage
//!
//! ```bash
//! nep2 encrypt --wif L44B5gGEpqEDRS9vVPz7QT35jcBG2r3CZwSwQ4fCewXAhAhqGVpP
//! nep2 decrypt --key 6PYVPVe1fQznphjbUxXP9KZJqPMVnVwCx5s5pr5axRJ8uHkMtZg97eT5kL
//! nep2 generate
//! nep2 inspect --key 6PYVPVe1fQznphjbUxXP9KZJqPMVnVwCx5s5pr5axRJ8uHkMtZg97eT5kL
//! ```
//!
//! The passphrase is read from `--passphrase` or `NEP2_PASSPHRASE`.

mod commands;
mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nep2_neo::NeoAddressCodec;
use std::path::PathBuf;
use zeroize::Zeroizing;

use commands::KeyInput;
use config::{CliConfig, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "nep2", version, about = "NEP-2 passphrase-protected NEO private keys")]
struct Cli {
    /// Config file path (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encrypt a private key
    Encrypt {
        /// Key in Wallet Import Format
        #[arg(long, required_unless_present = "private_key", conflicts_with = "private_key")]
        wif: Option<String>,

        /// Raw private key as 64 hex characters
        #[arg(long)]
        private_key: Option<String>,

        #[arg(long, env = "NEP2_PASSPHRASE", hide_env_values = true)]
        passphrase: String,
    },
    /// Decrypt a NEP-2 key
    Decrypt {
        /// NEP-2 encrypted key (6P...)
        #[arg(long)]
        key: String,

        #[arg(long, env = "NEP2_PASSPHRASE", hide_env_values = true)]
        passphrase: String,
    },
    /// Generate a new key and encrypt it
    Generate {
        #[arg(long, env = "NEP2_PASSPHRASE", hide_env_values = true)]
        passphrase: String,
    },
    /// Validate a NEP-2 key and show its fields (no passphrase needed)
    Inspect {
        #[arg(long)]
        key: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config
    let mut cli_config =
        CliConfig::load(cli.config.as_deref()).context("Failed to load config")?;

    // Apply env overrides
    cli_config.apply_env_overrides()?;

    // Validate
    cli_config
        .validate()
        .context("Configuration validation failed")?;

    // Init logger; RUST_LOG still wins when set
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cli_config.logging.level.to_ascii_lowercase()),
    )
    .init();

    let format = if cli.json {
        OutputFormat::Json
    } else {
        cli_config.output.format
    };
    let codec = NeoAddressCodec::new(cli_config.neo.address_version);
    log::debug!(
        "Using address version {:#04x}",
        cli_config.neo.address_version
    );

    // Build tokio runtime
    let rt = tokio::runtime::Runtime::new().context("Failed to create Tokio runtime")?;

    let outcome = match cli.command {
        Command::Encrypt {
            wif,
            private_key,
            passphrase,
        } => {
            let key = match (wif, private_key) {
                (Some(wif), _) => KeyInput::Wif(Zeroizing::new(wif)),
                (None, Some(hex_key)) => KeyInput::Hex(Zeroizing::new(hex_key)),
                (None, None) => anyhow::bail!("--wif or --private-key is required"),
            };
            rt.block_on(commands::encrypt(key, Zeroizing::new(passphrase), codec))
        }
        Command::Decrypt { key, passphrase } => {
            rt.block_on(commands::decrypt(key, Zeroizing::new(passphrase), codec))
        }
        Command::Generate { passphrase } => {
            rt.block_on(commands::generate(Zeroizing::new(passphrase), codec))
        }
        Command::Inspect { key } => commands::inspect(&key),
    };

    println!("{}", commands::render(&outcome?, format)?);
    Ok(())
}
