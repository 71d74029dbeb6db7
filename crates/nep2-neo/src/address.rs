//! NEO legacy addresses
//!
//! An address is the Base58Check encoding of `version ‖ script_hash`, where
//! the script hash is RIPEMD160(SHA256(script)) of the single-signature
//! verification script `PUSHBYTES33 <compressed pubkey> CHECKSIG`.

use nep2_core::{Nep2Error, PrivateKey, Result};
use p256::elliptic_curve::sec1::ToEncodedPoint;
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Address version byte for NEO mainnet; addresses start with `A`
pub const DEFAULT_ADDRESS_VERSION: u8 = 0x17;

pub const COMPRESSED_PUBKEY_LEN: usize = 33;

pub const SCRIPT_HASH_LEN: usize = 20;

const OP_PUSHBYTES33: u8 = 0x21;
const OP_CHECKSIG: u8 = 0xAC;

/// Compressed SEC1 public key for a private key on secp256r1
pub fn public_key(private_key: &PrivateKey) -> Result<[u8; COMPRESSED_PUBKEY_LEN]> {
    let secret = p256::SecretKey::from_slice(private_key.as_bytes())
        .map_err(|_| Nep2Error::InvalidPrivateKey("not a valid secp256r1 scalar".into()))?;
    let point = secret.public_key().to_encoded_point(true);

    let mut out = [0u8; COMPRESSED_PUBKEY_LEN];
    out.copy_from_slice(point.as_bytes());
    Ok(out)
}

pub fn verification_script(public_key: &[u8; COMPRESSED_PUBKEY_LEN]) -> Vec<u8> {
    let mut script = Vec::with_capacity(COMPRESSED_PUBKEY_LEN + 2);
    script.push(OP_PUSHBYTES33);
    script.extend_from_slice(public_key);
    script.push(OP_CHECKSIG);
    script
}

/// RIPEMD160(SHA256(script))
pub fn script_hash(script: &[u8]) -> [u8; SCRIPT_HASH_LEN] {
    Ripemd160::digest(Sha256::digest(script)).into()
}

pub fn address_from_script_hash(hash: &[u8; SCRIPT_HASH_LEN], version: u8) -> String {
    let mut payload = [0u8; SCRIPT_HASH_LEN + 1];
    payload[0] = version;
    payload[1..].copy_from_slice(hash);
    bs58::encode(payload).with_check().into_string()
}

/// Full derivation: private key → public key → script → address
pub fn address_from_private_key(private_key: &PrivateKey, version: u8) -> Result<String> {
    let public_key = public_key(private_key)?;
    let hash = script_hash(&verification_script(&public_key));
    Ok(address_from_script_hash(&hash, version))
}
