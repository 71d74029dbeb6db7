//! Error types shared by every NEP-2 operation.

use thiserror::Error;

/// Broad failure category of a [`Nep2Error`].
///
/// Callers usually only need this to decide whether to re-prompt for a
/// passphrase ([`ErrorKind::Authentication`]) or to reject the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed, corrupt or truncated input
    Format,
    /// The passphrase did not match the encrypted key
    Authentication,
    /// Key derivation or the worker running it failed
    Resource,
}

#[derive(Error, Debug)]
pub enum Nep2Error {
    #[error("Invalid base58 encoding: {0}")]
    InvalidBase58(String),
    #[error("Checksum mismatch")]
    InvalidChecksum,
    #[error("Invalid encrypted key length: expected 39 bytes, got {0}")]
    InvalidLength(usize),
    #[error("Invalid NEP-2 header: {0:02x?}")]
    InvalidHeader([u8; 2]),
    #[error("Invalid NEP-2 flag: {0:#04x}")]
    InvalidFlag(u8),
    #[error("Invalid WIF: {0}")]
    InvalidWif(String),
    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),
    #[error("Wrong passphrase")]
    WrongPassphrase,
    #[error("Key derivation failed: {0}")]
    KeyDerivationFailed(String),
    #[error("Background task failed: {0}")]
    TaskFailed(String),
}

impl Nep2Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidBase58(_)
            | Self::InvalidChecksum
            | Self::InvalidLength(_)
            | Self::InvalidHeader(_)
            | Self::InvalidFlag(_)
            | Self::InvalidWif(_)
            | Self::InvalidPrivateKey(_) => ErrorKind::Format,
            Self::WrongPassphrase => ErrorKind::Authentication,
            Self::KeyDerivationFailed(_) | Self::TaskFailed(_) => ErrorKind::Resource,
        }
    }
}

impl From<bs58::decode::Error> for Nep2Error {
    fn from(e: bs58::decode::Error) -> Self {
        match e {
            bs58::decode::Error::InvalidChecksum { .. } => Self::InvalidChecksum,
            other => Self::InvalidBase58(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, Nep2Error>;
