//! Subcommand execution and output rendering.

use anyhow::{Context, Result};
use nep2_core::format::{NEP2_FLAG, NEP2_HEADER};
use nep2_core::{Account, AddressCodec, EncryptedKey, PrivateKey};
use nep2_neo::NeoAddressCodec;
use zeroize::Zeroizing;

use crate::config::OutputFormat;

/// What a subcommand produced
#[derive(Debug)]
pub enum Outcome {
    Account(Account),
    Inspected(EncryptedKey),
}

/// Key material accepted by `encrypt`
pub enum KeyInput {
    Wif(Zeroizing<String>),
    Hex(Zeroizing<String>),
}

/// Move a secret out of its wrapper without leaving a copy behind
fn take_secret(secret: &mut Zeroizing<String>) -> String {
    std::mem::take(&mut **secret)
}

pub async fn encrypt(
    key: KeyInput,
    mut passphrase: Zeroizing<String>,
    codec: NeoAddressCodec,
) -> Result<Outcome> {
    let mut wif = match key {
        KeyInput::Wif(wif) => wif,
        KeyInput::Hex(hex_key) => {
            let private_key = PrivateKey::from_hex(hex_key.trim())
                .context("Failed to parse private key hex")?;
            Zeroizing::new(codec.wif_from_private_key(&private_key))
        }
    };

    let account =
        nep2_core::encrypt_account_async(take_secret(&mut wif), take_secret(&mut passphrase), codec)
            .await
            .context("Encryption failed")?;
    Ok(Outcome::Account(account))
}

pub async fn decrypt(
    encrypted: String,
    mut passphrase: Zeroizing<String>,
    codec: NeoAddressCodec,
) -> Result<Outcome> {
    let account = nep2_core::decrypt_account_async(encrypted, take_secret(&mut passphrase), codec)
        .await
        .context("Decryption failed")?;
    Ok(Outcome::Account(account))
}

pub async fn generate(
    mut passphrase: Zeroizing<String>,
    codec: NeoAddressCodec,
) -> Result<Outcome> {
    let account = nep2_core::generate_encrypted_account_async(take_secret(&mut passphrase), codec)
        .await
        .context("Key generation failed")?;
    Ok(Outcome::Account(account))
}

/// Parse and validate a token without a passphrase
pub fn inspect(encrypted: &str) -> Result<Outcome> {
    let key = EncryptedKey::from_base58(encrypted).context("Not a valid NEP-2 key")?;
    Ok(Outcome::Inspected(key))
}

pub fn render(outcome: &Outcome, format: OutputFormat) -> Result<String> {
    match (outcome, format) {
        (Outcome::Account(account), OutputFormat::Json) => {
            serde_json::to_string_pretty(account).context("Failed to serialize account")
        }
        (Outcome::Account(account), OutputFormat::Text) => Ok(format!(
            "Address:       {}\nWIF:           {}\nEncrypted key: {}",
            account.address, account.wif, account.encrypted_wif
        )),
        (Outcome::Inspected(key), OutputFormat::Json) => {
            let value = serde_json::json!({
                "header": hex::encode(NEP2_HEADER),
                "flag": hex::encode([NEP2_FLAG]),
                "salt": hex::encode(key.salt()),
                "ciphertext": hex::encode(key.ciphertext()),
            });
            serde_json::to_string_pretty(&value).context("Failed to serialize key")
        }
        (Outcome::Inspected(key), OutputFormat::Text) => Ok(format!(
            "Valid NEP-2 key\n  Header:     {}\n  Flag:       {}\n  Salt:       {}\n  Ciphertext: {}",
            hex::encode(NEP2_HEADER),
            hex::encode([NEP2_FLAG]),
            hex::encode(key.salt()),
            hex::encode(key.ciphertext())
        )),
    }
}
