//! NEP-2 Core
//!
//! Passphrase-protected private keys for NEO, following NEP-2 (the NEO
//! adaptation of BIP-38).
//!
//! # Pipeline
//!
//! Encryption:
//! 1. salt = first 4 bytes of SHA256(SHA256(address))
//! 2. scrypt(passphrase, salt, N=16384, r=8, p=8) → 64 bytes
//! 3. key XOR first half, AES-256 (two independent blocks) with second half
//! 4. `0x01 0x42 ‖ 0xE0 ‖ salt ‖ ciphertext`, Base58Check encoded
//!
//! Decryption reverses the steps and recomputes the salt from the recovered
//! key's address; a mismatch means the passphrase was wrong.
//!
//! Address and WIF derivation are supplied through [`AddressCodec`].
//!
//! # Example
//!
//! ```ignore
//! use nep2_core::{decrypt_private_key, encrypt_private_key};
//! use nep2_neo::NeoAddressCodec;
//!
//! let codec = NeoAddressCodec::default();
//! let (address, key) = codec.address_from_wif(wif)?;
//! let encrypted = encrypt_private_key(&key, &address, "TestingOneTwoThree")?;
//! let decrypted = decrypt_private_key(&encrypted, "TestingOneTwoThree", &codec)?;
//! assert_eq!(key, decrypted);
//! ```

pub mod account;
pub mod crypto;
pub mod error;
pub mod format;
pub mod keys;

#[cfg(test)]
pub(crate) mod test_utils;

pub use account::{
    decrypt_account, decrypt_account_async, decrypt_wif, decrypt_wif_async, encrypt_account,
    encrypt_account_async, encrypt_wif, encrypt_wif_async, generate_encrypted_account,
    generate_encrypted_account_async, Account,
};
pub use crypto::{decrypt_key, decrypt_private_key, encrypt_key, encrypt_private_key};
pub use error::{ErrorKind, Nep2Error, Result};
pub use format::EncryptedKey;
pub use keys::{AddressCodec, PrivateKey};
