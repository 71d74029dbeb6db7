//! NEP-2 NEO Codec
//!
//! [`AddressCodec`] implementation for NEO legacy accounts:
//! secp256r1 keys, compressed WIF, and `A...` addresses derived from the
//! single-signature verification script.
//!
//! # Example
//!
//! ```
//! use nep2_core::AddressCodec;
//! use nep2_neo::NeoAddressCodec;
//!
//! let codec = NeoAddressCodec::default();
//! let (address, _key) = codec
//!     .address_from_wif("L44B5gGEpqEDRS9vVPz7QT35jcBG2r3CZwSwQ4fCewXAhAhqGVpP")
//!     .unwrap();
//! assert_eq!(address, "AStZHy8E6StCqYQbzMqi4poH7YNDHQKxvt");
//! ```

pub mod address;
pub mod wif;

use nep2_core::{AddressCodec, PrivateKey, Result};
use rand::rngs::OsRng;
use rand::RngCore;

pub use address::DEFAULT_ADDRESS_VERSION;
pub use wif::{decode_wif, encode_wif};

/// NEO address codec
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeoAddressCodec {
    address_version: u8,
}

impl NeoAddressCodec {
    pub fn new(address_version: u8) -> Self {
        Self { address_version }
    }

    pub fn address_version(&self) -> u8 {
        self.address_version
    }
}

impl Default for NeoAddressCodec {
    fn default() -> Self {
        Self::new(DEFAULT_ADDRESS_VERSION)
    }
}

impl AddressCodec for NeoAddressCodec {
    fn address_from_wif(&self, wif: &str) -> Result<(String, PrivateKey)> {
        let private_key = decode_wif(wif)?;
        let address = self.address_from_private_key(&private_key)?;
        Ok((address, private_key))
    }

    fn address_from_private_key(&self, private_key: &PrivateKey) -> Result<String> {
        address::address_from_private_key(private_key, self.address_version)
    }

    fn wif_from_private_key(&self, private_key: &PrivateKey) -> String {
        encode_wif(private_key)
    }

    /// Draws from the OS CSPRNG until the bytes form a valid secp256r1 scalar
    fn generate_private_key(&self) -> PrivateKey {
        let mut bytes = [0u8; 32];
        loop {
            OsRng.fill_bytes(&mut bytes);
            if p256::SecretKey::from_slice(&bytes).is_ok() {
                let key = PrivateKey::from_bytes(bytes);
                zeroize::Zeroize::zeroize(&mut bytes);
                return key;
            }
        }
    }
}
