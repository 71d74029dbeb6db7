//! Wallet Import Format
//!
//! `Base58Check(0x80 ‖ key ‖ 0x01)`: 52 characters starting with `K` or `L`.
//! NEO keys are always compressed, so the `0x01` suffix is required.

use nep2_core::{Nep2Error, PrivateKey, Result};
use zeroize::Zeroizing;

const WIF_VERSION: u8 = 0x80;
const WIF_COMPRESSED: u8 = 0x01;
const WIF_PAYLOAD_LEN: usize = 34;

pub fn encode_wif(private_key: &PrivateKey) -> String {
    let mut payload = Zeroizing::new([0u8; WIF_PAYLOAD_LEN]);
    payload[0] = WIF_VERSION;
    payload[1..33].copy_from_slice(private_key.as_bytes());
    payload[33] = WIF_COMPRESSED;
    bs58::encode(&payload[..]).with_check().into_string()
}

pub fn decode_wif(wif: &str) -> Result<PrivateKey> {
    let payload = Zeroizing::new(
        bs58::decode(wif.trim())
            .with_check(None)
            .into_vec()
            .map_err(|e| Nep2Error::InvalidWif(e.to_string()))?,
    );

    if payload.len() != WIF_PAYLOAD_LEN {
        return Err(Nep2Error::InvalidWif(format!(
            "expected {} bytes, got {}",
            WIF_PAYLOAD_LEN,
            payload.len()
        )));
    }
    if payload[0] != WIF_VERSION {
        return Err(Nep2Error::InvalidWif(format!(
            "unexpected version byte {:#04x}",
            payload[0]
        )));
    }
    if payload[33] != WIF_COMPRESSED {
        return Err(Nep2Error::InvalidWif("missing compression flag".into()));
    }

    p256::SecretKey::from_slice(&payload[1..33])
        .map_err(|_| Nep2Error::InvalidWif("key is not a valid secp256r1 scalar".into()))?;
    PrivateKey::from_slice(&payload[1..33])
}
