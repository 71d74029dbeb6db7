//! Shared test utilities for nep2-core tests.
//!
//! [`FakeCodec`] stands in for a real curve implementation: addresses are a
//! hash of the key bytes, WIFs are `wif:` followed by the key hex.

use std::sync::atomic::{AtomicU64, Ordering};

use sha2::{Digest, Sha256};

use crate::error::{Nep2Error, Result};
use crate::keys::{AddressCodec, PrivateKey};

static NEXT_KEY: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, Default)]
pub struct FakeCodec {
    /// Treat every key as an invalid scalar
    reject_all: bool,
    /// Panic inside `address_from_wif`
    panic_on_wif: bool,
}

impl FakeCodec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rejecting() -> Self {
        Self {
            reject_all: true,
            ..Self::default()
        }
    }

    pub fn panicking() -> Self {
        Self {
            panic_on_wif: true,
            ..Self::default()
        }
    }
}

impl AddressCodec for FakeCodec {
    fn address_from_wif(&self, wif: &str) -> Result<(String, PrivateKey)> {
        if self.panic_on_wif {
            panic!("test codec panicked on {}", wif);
        }
        let hex_key = wif
            .strip_prefix("wif:")
            .ok_or_else(|| Nep2Error::InvalidWif("missing wif: prefix".into()))?;
        let key = PrivateKey::from_hex(hex_key)
            .map_err(|e| Nep2Error::InvalidWif(e.to_string()))?;
        let address = self.address_from_private_key(&key)?;
        Ok((address, key))
    }

    fn address_from_private_key(&self, private_key: &PrivateKey) -> Result<String> {
        if self.reject_all {
            return Err(Nep2Error::InvalidPrivateKey("rejected by test codec".into()));
        }
        let digest = Sha256::digest(private_key.as_bytes());
        Ok(format!("F{}", hex::encode(&digest[..16])))
    }

    fn wif_from_private_key(&self, private_key: &PrivateKey) -> String {
        format!("wif:{}", private_key.to_hex())
    }

    fn generate_private_key(&self) -> PrivateKey {
        let n = NEXT_KEY.fetch_add(1, Ordering::Relaxed);
        PrivateKey::from_bytes(Sha256::digest(n.to_be_bytes()).into())
    }
}
