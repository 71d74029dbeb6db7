//! Raw private keys and the address codec seam
//!
//! NEP-2 itself never touches elliptic-curve math. Deriving an address or a
//! WIF string from a private key is delegated to an [`AddressCodec`], which a
//! wallet crate supplies (see `nep2-neo`) and tests replace with a double.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Nep2Error, Result};

/// Length of a raw private key in bytes
pub const PRIVATE_KEY_LEN: usize = 32;

/// A 32-byte private scalar. Zeroized on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey([u8; PRIVATE_KEY_LEN]);

impl PrivateKey {
    pub fn from_bytes(bytes: [u8; PRIVATE_KEY_LEN]) -> Self {
        Self(bytes)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let arr: [u8; PRIVATE_KEY_LEN] = bytes.try_into().map_err(|_| {
            Nep2Error::InvalidPrivateKey(format!(
                "expected {} bytes, got {}",
                PRIVATE_KEY_LEN,
                bytes.len()
            ))
        })?;
        Ok(Self(arr))
    }

    /// Parse a 64-character hex string
    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = hex::decode(s).map_err(|e| Nep2Error::InvalidPrivateKey(e.to_string()))?;
        Self::from_slice(&bytes)
    }

    pub fn as_bytes(&self) -> &[u8; PRIVATE_KEY_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

// Never print key material.
impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(<redacted>)")
    }
}

/// Address and WIF handling supplied by the wallet layer.
///
/// Implementations must be deterministic: the same private key always maps to
/// the same address, since the NEP-2 salt is a hash of that address.
pub trait AddressCodec: Send + Sync {
    /// Decode a WIF string into its address and private key
    fn address_from_wif(&self, wif: &str) -> Result<(String, PrivateKey)>;

    /// Derive the address for a private key
    ///
    /// Fails with [`Nep2Error::InvalidPrivateKey`] when the bytes are not a
    /// usable scalar for the curve.
    fn address_from_private_key(&self, private_key: &PrivateKey) -> Result<String>;

    fn wif_from_private_key(&self, private_key: &PrivateKey) -> String;

    /// Generate a fresh random private key
    fn generate_private_key(&self) -> PrivateKey;
}
