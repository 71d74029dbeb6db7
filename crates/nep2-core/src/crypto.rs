//! Cryptographic pipeline
//!
//! Passphrase-based encryption of a single private key per NEP-2:
//! scrypt key stretching, an XOR mask and AES-256 over two independent blocks.
//!
//! # Security Notes
//!
//! - scrypt parameters are fixed by the standard (N=16384, r=8, p=8) and are
//!   not configurable
//! - The salt doubles as the passphrase check: it is recomputed from the
//!   decrypted key's address, giving a false-accept rate of about 2^-32
//! - AES is applied block by block with no IV, to the masked 32-byte key only;
//!   the block functions are private and typed to exactly 32 bytes
//! - Derived keys are zeroized on drop and never cached

use aes::cipher::{generic_array::GenericArray, BlockDecrypt, BlockEncrypt, KeyInit};
use aes::Aes256;
use sha2::{Digest, Sha256};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::{Nep2Error, Result};
use crate::format::{EncryptedKey, CIPHERTEXT_LEN, SALT_LEN};
use crate::keys::{AddressCodec, PrivateKey, PRIVATE_KEY_LEN};

/// scrypt cost parameter as log2(N); N = 16384
pub const SCRYPT_LOG_N: u8 = 14;
/// scrypt block size
pub const SCRYPT_R: u32 = 8;
/// scrypt parallelism
pub const SCRYPT_P: u32 = 8;
/// scrypt output: two 32-byte halves
pub const SCRYPT_OUTPUT_LEN: usize = 64;

const AES_BLOCK_LEN: usize = 16;

/// The two halves of the scrypt output.
///
/// Not `Clone` or `Debug`, and wiped when dropped.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct DerivedKeys {
    xor_key: [u8; 32],
    aes_key: [u8; 32],
}

impl DerivedKeys {
    /// First half: XOR pad for the private key
    pub fn xor_key(&self) -> &[u8; 32] {
        &self.xor_key
    }

    /// Second half: AES-256 key
    pub fn aes_key(&self) -> &[u8; 32] {
        &self.aes_key
    }
}

/// Stretch a passphrase and salt into the XOR and AES keys.
///
/// Blocking and memory hard (roughly 16 MiB per lane, 8 lanes); run it off
/// any latency-sensitive thread.
pub fn derive_keys(passphrase: &[u8], salt: &[u8; SALT_LEN]) -> Result<DerivedKeys> {
    let params = scrypt::Params::new(SCRYPT_LOG_N, SCRYPT_R, SCRYPT_P, SCRYPT_OUTPUT_LEN)
        .map_err(|e| Nep2Error::KeyDerivationFailed(e.to_string()))?;

    let mut derived = Zeroizing::new([0u8; SCRYPT_OUTPUT_LEN]);
    scrypt::scrypt(passphrase, salt, &params, derived.as_mut_slice())
        .map_err(|e| Nep2Error::KeyDerivationFailed(e.to_string()))?;

    let mut keys = DerivedKeys {
        xor_key: [0u8; 32],
        aes_key: [0u8; 32],
    };
    keys.xor_key.copy_from_slice(&derived[..32]);
    keys.aes_key.copy_from_slice(&derived[32..]);
    Ok(keys)
}

/// Double SHA-256
pub fn hash256(data: &[u8]) -> [u8; 32] {
    let first = Sha256::digest(data);
    Sha256::digest(first).into()
}

/// The NEP-2 salt: first four bytes of the double SHA-256 of the address.
///
/// The address is hashed one byte per UTF-16 code unit (Latin-1). Units above
/// 0xFF keep only their low byte, so a character outside the BMP contributes
/// the low bytes of both surrogates. Real addresses are plain ASCII.
pub fn address_hash(address: &str) -> [u8; SALT_LEN] {
    let bytes: Vec<u8> = address.encode_utf16().map(|unit| unit as u8).collect();
    let digest = hash256(&bytes);
    let mut salt = [0u8; SALT_LEN];
    salt.copy_from_slice(&digest[..SALT_LEN]);
    salt
}

/// Byte-wise XOR. Applying it twice with the same key is the identity.
pub fn xor_mask(data: &[u8; 32], key: &[u8; 32]) -> [u8; 32] {
    let mut out = [0u8; 32];
    for (o, (d, k)) in out.iter_mut().zip(data.iter().zip(key.iter())) {
        *o = d ^ k;
    }
    out
}

fn encrypt_block(plain: &[u8; CIPHERTEXT_LEN], aes_key: &[u8; 32]) -> [u8; CIPHERTEXT_LEN] {
    let cipher = Aes256::new(GenericArray::from_slice(aes_key));
    let mut out = *plain;
    for chunk in out.chunks_exact_mut(AES_BLOCK_LEN) {
        cipher.encrypt_block(GenericArray::from_mut_slice(chunk));
    }
    out
}

fn decrypt_block(encrypted: &[u8; CIPHERTEXT_LEN], aes_key: &[u8; 32]) -> [u8; CIPHERTEXT_LEN] {
    let cipher = Aes256::new(GenericArray::from_slice(aes_key));
    let mut out = *encrypted;
    for chunk in out.chunks_exact_mut(AES_BLOCK_LEN) {
        cipher.decrypt_block(GenericArray::from_mut_slice(chunk));
    }
    out
}

/// Encrypt a private key under NEP-2
///
/// # Arguments
/// * `private_key` - The raw 32-byte key
/// * `address` - The key's address, used to derive the salt
/// * `passphrase` - User-provided passphrase, used as its UTF-8 bytes
///
/// # Returns
/// The encrypted key record. Identical inputs always give identical output.
pub fn encrypt_key(
    private_key: &PrivateKey,
    address: &str,
    passphrase: &str,
) -> Result<EncryptedKey> {
    let salt = address_hash(address);
    log::debug!("Deriving NEP-2 keys for salt {}", hex::encode(salt));
    let derived = derive_keys(passphrase.as_bytes(), &salt)?;

    let masked = Zeroizing::new(xor_mask(private_key.as_bytes(), derived.xor_key()));
    let ciphertext = encrypt_block(&masked, derived.aes_key());

    Ok(EncryptedKey::new(salt, ciphertext))
}

/// Encrypt a private key, returning the Base58Check string (58 chars, `6P...`)
pub fn encrypt_private_key(
    private_key: &PrivateKey,
    address: &str,
    passphrase: &str,
) -> Result<String> {
    Ok(encrypt_key(private_key, address, passphrase)?.to_base58())
}

/// Decrypt a parsed NEP-2 record
///
/// # Errors
/// Returns [`Nep2Error::WrongPassphrase`] if the address of the recovered key
/// does not hash to the stored salt.
pub fn decrypt_key(
    encrypted: &EncryptedKey,
    passphrase: &str,
    codec: &impl AddressCodec,
) -> Result<PrivateKey> {
    log::debug!(
        "Deriving NEP-2 keys for salt {}",
        hex::encode(encrypted.salt())
    );
    let derived = derive_keys(passphrase.as_bytes(), encrypted.salt())?;

    let masked = Zeroizing::new(decrypt_block(encrypted.ciphertext(), derived.aes_key()));
    let private_key = PrivateKey::from_bytes(xor_mask(&masked, derived.xor_key()));

    // A wrong passphrase yields arbitrary bytes, which may not even be a
    // valid scalar. Either way the passphrase was wrong.
    let address = match codec.address_from_private_key(&private_key) {
        Ok(address) => address,
        Err(Nep2Error::InvalidPrivateKey(_)) => {
            log::warn!("NEP-2 passphrase check failed: recovered key is not a valid scalar");
            return Err(Nep2Error::WrongPassphrase);
        }
        Err(e) => return Err(e),
    };

    if address_hash(&address) != *encrypted.salt() {
        log::warn!("NEP-2 passphrase check failed: address hash mismatch");
        return Err(Nep2Error::WrongPassphrase);
    }

    Ok(private_key)
}

/// Decrypt a NEP-2 string back to the raw private key
///
/// # Errors
/// Format errors for malformed input, [`Nep2Error::WrongPassphrase`] if the
/// passphrase does not open the key.
pub fn decrypt_private_key(
    encrypted: &str,
    passphrase: &str,
    codec: &impl AddressCodec,
) -> Result<PrivateKey> {
    let encrypted = EncryptedKey::from_base58(encrypted)?;
    decrypt_key(&encrypted, passphrase, codec)
}

// Compile-time guard: the cipher functions only ever see one private key.
const _: () = assert!(CIPHERTEXT_LEN == PRIVATE_KEY_LEN);
const _: () = assert!(CIPHERTEXT_LEN == 2 * AES_BLOCK_LEN);
