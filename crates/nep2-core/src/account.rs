//! Account-level helpers
//!
//! Convenience operations working on WIF strings and producing an
//! [`Account`] bundle, plus `async` variants that run the scrypt-bound
//! pipeline on Tokio's blocking pool.

use std::fmt;

use serde::Serialize;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::crypto::{decrypt_private_key, encrypt_private_key};
use crate::error::{Nep2Error, Result};
use crate::keys::AddressCodec;

/// A key together with its encrypted form.
///
/// Serializes with camelCase field names (`encryptedWif`).
#[derive(Clone, PartialEq, Eq, Serialize, Zeroize, ZeroizeOnDrop)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub wif: String,
    pub address: String,
    pub encrypted_wif: String,
    pub passphrase: String,
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("wif", &"<redacted>")
            .field("address", &self.address)
            .field("encrypted_wif", &self.encrypted_wif)
            .field("passphrase", &"<redacted>")
            .finish()
    }
}

/// Encrypt a WIF key, returning the NEP-2 string
pub fn encrypt_wif(wif: &str, passphrase: &str, codec: &impl AddressCodec) -> Result<String> {
    let (address, private_key) = codec.address_from_wif(wif)?;
    encrypt_private_key(&private_key, &address, passphrase)
}

/// Decrypt a NEP-2 string back to a WIF key
pub fn decrypt_wif(encrypted: &str, passphrase: &str, codec: &impl AddressCodec) -> Result<String> {
    let private_key = decrypt_private_key(encrypted, passphrase, codec)?;
    Ok(codec.wif_from_private_key(&private_key))
}

/// Encrypt an existing WIF key into an [`Account`]
pub fn encrypt_account(wif: &str, passphrase: &str, codec: &impl AddressCodec) -> Result<Account> {
    let (address, private_key) = codec.address_from_wif(wif)?;
    let encrypted_wif = encrypt_private_key(&private_key, &address, passphrase)?;
    log::info!("Encrypted key for {}", address);

    Ok(Account {
        wif: wif.to_string(),
        address,
        encrypted_wif,
        passphrase: passphrase.to_string(),
    })
}

/// Generate a fresh key and encrypt it into an [`Account`]
pub fn generate_encrypted_account(passphrase: &str, codec: &impl AddressCodec) -> Result<Account> {
    let private_key = codec.generate_private_key();
    let wif = Zeroizing::new(codec.wif_from_private_key(&private_key));
    encrypt_account(&wif, passphrase, codec)
}

/// Decrypt a NEP-2 string into an [`Account`]
pub fn decrypt_account(
    encrypted: &str,
    passphrase: &str,
    codec: &impl AddressCodec,
) -> Result<Account> {
    let private_key = decrypt_private_key(encrypted, passphrase, codec)?;
    let address = codec.address_from_private_key(&private_key)?;
    log::info!("Decrypted key for {}", address);

    Ok(Account {
        wif: codec.wif_from_private_key(&private_key),
        address,
        encrypted_wif: encrypted.trim().to_string(),
        passphrase: passphrase.to_string(),
    })
}

// ============================================================================
// Async variants
// ============================================================================

/// Run one pipeline call on the blocking pool and wait for it.
///
/// The call is not cancellable once started; dropping the future only
/// discards the result.
async fn run_blocking<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| Nep2Error::TaskFailed(e.to_string()))?
}

pub async fn encrypt_wif_async<C>(wif: String, passphrase: String, codec: C) -> Result<String>
where
    C: AddressCodec + 'static,
{
    let wif = Zeroizing::new(wif);
    let passphrase = Zeroizing::new(passphrase);
    run_blocking(move || encrypt_wif(&wif, &passphrase, &codec)).await
}

pub async fn decrypt_wif_async<C>(encrypted: String, passphrase: String, codec: C) -> Result<String>
where
    C: AddressCodec + 'static,
{
    let passphrase = Zeroizing::new(passphrase);
    run_blocking(move || decrypt_wif(&encrypted, &passphrase, &codec)).await
}

pub async fn encrypt_account_async<C>(wif: String, passphrase: String, codec: C) -> Result<Account>
where
    C: AddressCodec + 'static,
{
    let wif = Zeroizing::new(wif);
    let passphrase = Zeroizing::new(passphrase);
    run_blocking(move || encrypt_account(&wif, &passphrase, &codec)).await
}

pub async fn generate_encrypted_account_async<C>(passphrase: String, codec: C) -> Result<Account>
where
    C: AddressCodec + 'static,
{
    let passphrase = Zeroizing::new(passphrase);
    run_blocking(move || generate_encrypted_account(&passphrase, &codec)).await
}

pub async fn decrypt_account_async<C>(
    encrypted: String,
    passphrase: String,
    codec: C,
) -> Result<Account>
where
    C: AddressCodec + 'static,
{
    let passphrase = Zeroizing::new(passphrase);
    run_blocking(move || decrypt_account(&encrypted, &passphrase, &codec)).await
}
