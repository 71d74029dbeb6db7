//! NEP-2 record layout and its Base58Check text form
//!
//! ```text
//! offset 0:  0x01 0x42   header
//! offset 2:  0xE0        flag
//! offset 3:  salt        (4 bytes, address hash)
//! offset 7:  ciphertext  (32 bytes)
//! ```
//!
//! The 39 raw bytes are followed by a 4-byte double-SHA256 checksum and
//! Base58 encoded, giving a 58-character string starting with `6P`.

use std::fmt;
use std::str::FromStr;

use crate::error::{Nep2Error, Result};

/// Fixed NEP-2 header bytes (non-EC-multiply mode, shared with BIP-38)
pub const NEP2_HEADER: [u8; 2] = [0x01, 0x42];

/// Fixed NEP-2 flag byte
pub const NEP2_FLAG: u8 = 0xE0;

pub const SALT_LEN: usize = 4;

pub const CIPHERTEXT_LEN: usize = 32;

/// Raw record length before the Base58Check checksum
pub const ENCRYPTED_KEY_LEN: usize = 2 + 1 + SALT_LEN + CIPHERTEXT_LEN;

const SALT_OFFSET: usize = 3;
const CIPHERTEXT_OFFSET: usize = SALT_OFFSET + SALT_LEN;

/// A parsed NEP-2 encrypted key.
///
/// Header and flag are constant, so only the salt and ciphertext are stored.
/// Parsing checks the layout only; whether a passphrase opens the key is
/// decided by [`crate::crypto::decrypt_private_key`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedKey {
    /// First four bytes of the double-SHA256 of the address
    salt: [u8; SALT_LEN],
    /// AES-256 output over the XOR-masked private key
    ciphertext: [u8; CIPHERTEXT_LEN],
}

impl EncryptedKey {
    pub fn new(salt: [u8; SALT_LEN], ciphertext: [u8; CIPHERTEXT_LEN]) -> Self {
        Self { salt, ciphertext }
    }

    pub fn salt(&self) -> &[u8; SALT_LEN] {
        &self.salt
    }

    pub fn ciphertext(&self) -> &[u8; CIPHERTEXT_LEN] {
        &self.ciphertext
    }

    /// Serialize to bytes: header || flag || salt || ciphertext
    pub fn to_bytes(&self) -> [u8; ENCRYPTED_KEY_LEN] {
        let mut bytes = [0u8; ENCRYPTED_KEY_LEN];
        bytes[..2].copy_from_slice(&NEP2_HEADER);
        bytes[2] = NEP2_FLAG;
        bytes[SALT_OFFSET..CIPHERTEXT_OFFSET].copy_from_slice(&self.salt);
        bytes[CIPHERTEXT_OFFSET..].copy_from_slice(&self.ciphertext);
        bytes
    }

    /// Deserialize from the 39 raw bytes (checksum already stripped)
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != ENCRYPTED_KEY_LEN {
            return Err(Nep2Error::InvalidLength(bytes.len()));
        }

        let header = [bytes[0], bytes[1]];
        if header != NEP2_HEADER {
            return Err(Nep2Error::InvalidHeader(header));
        }
        if bytes[2] != NEP2_FLAG {
            return Err(Nep2Error::InvalidFlag(bytes[2]));
        }

        let mut salt = [0u8; SALT_LEN];
        let mut ciphertext = [0u8; CIPHERTEXT_LEN];
        salt.copy_from_slice(&bytes[SALT_OFFSET..CIPHERTEXT_OFFSET]);
        ciphertext.copy_from_slice(&bytes[CIPHERTEXT_OFFSET..]);

        Ok(Self { salt, ciphertext })
    }

    /// Base58Check encode (case sensitive)
    pub fn to_base58(&self) -> String {
        bs58::encode(self.to_bytes()).with_check().into_string()
    }

    /// Decode a Base58Check string, verifying checksum and layout
    pub fn from_base58(s: &str) -> Result<Self> {
        let bytes = bs58::decode(s.trim()).with_check(None).into_vec()?;
        Self::from_bytes(&bytes)
    }
}

impl fmt::Display for EncryptedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base58())
    }
}

impl FromStr for EncryptedKey {
    type Err = Nep2Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_base58(s)
    }
}
