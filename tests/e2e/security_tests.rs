//! Security-specific tests for audit preparation.
//!
//! These tests verify:
//! 1. Wrong passphrases and tampered records are rejected, never decrypted
//! 2. Malformed tokens fail as format errors and don't panic
//! 3. Secrets are zeroed and not printed
//!
//! All tests run against the real NEO codec.

use nep2_core::format::ENCRYPTED_KEY_LEN;
use nep2_core::{
    decrypt_key, decrypt_private_key, encrypt_key, encrypt_private_key, AddressCodec,
    EncryptedKey, ErrorKind, Nep2Error, PrivateKey,
};
use nep2_neo::NeoAddressCodec;
use zeroize::Zeroize;

const KEY_HEX: &str = "cbf4b9f70470856bb4f40f80b87edb90865997ffee6df315ab166d713af433a5";
const ADDRESS: &str = "AStZHy8E6StCqYQbzMqi4poH7YNDHQKxvt";
const PASSPHRASE: &str = "TestingOneTwoThree";
const ENCRYPTED: &str = "6PYVPVe1fQznphjbUxXP9KZJqPMVnVwCx5s5pr5axRJ8uHkMtZg97eT5kL";

fn vector_record() -> EncryptedKey {
    EncryptedKey::from_base58(ENCRYPTED).unwrap()
}

// ============================================================================
// 1. Passphrase and Tamper Rejection
// ============================================================================

#[test]
fn test_wrong_passphrase_fails_decryption() {
    let codec = NeoAddressCodec::default();
    for wrong in ["", "testingonetwothree", "TestingOneTwoThree ", "TestingOneTwoThre3"] {
        let result = decrypt_private_key(ENCRYPTED, wrong, &codec);
        assert!(
            matches!(result, Err(Nep2Error::WrongPassphrase)),
            "passphrase {:?} should be rejected",
            wrong
        );
    }
}

#[test]
fn test_tampered_salt_fails_decryption() {
    let codec = NeoAddressCodec::default();
    let record = vector_record();

    let mut salt = *record.salt();
    salt[0] ^= 0xFF;
    let tampered = EncryptedKey::new(salt, *record.ciphertext());

    let result = decrypt_key(&tampered, PASSPHRASE, &codec);
    assert!(
        matches!(result, Err(Nep2Error::WrongPassphrase)),
        "Tampered salt should fail decryption"
    );
}

#[test]
fn test_tampered_ciphertext_fails_decryption() {
    let codec = NeoAddressCodec::default();
    let record = vector_record();

    // One flipped bit in either AES block must be caught
    for index in [0usize, 31] {
        let mut ciphertext = *record.ciphertext();
        ciphertext[index] ^= 0x01;
        let tampered = EncryptedKey::new(*record.salt(), ciphertext);

        let result = decrypt_key(&tampered, PASSPHRASE, &codec);
        assert!(
            matches!(result, Err(Nep2Error::WrongPassphrase)),
            "Tampered ciphertext byte {} should fail decryption",
            index
        );
    }
}

#[test]
fn test_reencoded_tampered_record_fails() {
    // An attacker who recomputes the Base58 checksum still cannot pass the
    // address hash check
    let codec = NeoAddressCodec::default();
    let mut raw = vector_record().to_bytes();
    raw[20] ^= 0x80;
    let forged = bs58::encode(raw).with_check().into_string();

    let err = decrypt_private_key(&forged, PASSPHRASE, &codec).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Authentication);
}

#[test]
fn test_salt_is_address_hash_only() {
    // The salt reveals the address hash and nothing about the passphrase
    let key = PrivateKey::from_hex(KEY_HEX).unwrap();
    let a = encrypt_key(&key, ADDRESS, "one").unwrap();
    let b = encrypt_key(&key, ADDRESS, "two").unwrap();
    assert_eq!(a.salt(), b.salt());
    assert_ne!(a.ciphertext(), b.ciphertext());
}

// ============================================================================
// 2. Malformed Input Rejection
// ============================================================================

#[test]
fn test_every_truncation_is_format_error() {
    let codec = NeoAddressCodec::default();
    for len in 0..ENCRYPTED.len() {
        let truncated = &ENCRYPTED[..len];
        let err = decrypt_private_key(truncated, PASSPHRASE, &codec).unwrap_err();
        assert_eq!(
            err.kind(),
            ErrorKind::Format,
            "truncation to {} chars should be a format error",
            len
        );
    }
}

#[test]
fn test_every_single_character_substitution_is_rejected() {
    const ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
    let chars: Vec<char> = ENCRYPTED.chars().collect();

    for i in 0..chars.len() {
        let replacement = ALPHABET.chars().find(|&c| c != chars[i]).unwrap();
        let mut mutated = chars.clone();
        mutated[i] = replacement;
        let mutated: String = mutated.into_iter().collect();

        let result = EncryptedKey::from_base58(&mutated);
        assert!(
            result.is_err(),
            "substitution at position {} should be rejected",
            i
        );
        assert_eq!(result.unwrap_err().kind(), ErrorKind::Format);
    }
}

#[test]
fn test_appended_characters_rejected() {
    let extended = format!("{}1", ENCRYPTED);
    assert!(EncryptedKey::from_base58(&extended).is_err());
}

#[test]
fn test_raw_record_lengths() {
    let raw = vector_record().to_bytes();
    assert_eq!(raw.len(), ENCRYPTED_KEY_LEN);

    assert!(EncryptedKey::from_bytes(&raw[..ENCRYPTED_KEY_LEN - 1]).is_err());
    let mut long = raw.to_vec();
    long.push(0);
    assert!(EncryptedKey::from_bytes(&long).is_err());
}

#[test]
fn test_malformed_inputs_dont_panic() {
    let inputs = [
        "",
        " ",
        "6P",
        "0OIl",
        "🔑🔑🔑",
        "6PYVPVe1fQznphjbUxXP9KZJqPMVnVwCx5s5pr5axRJ8uHkMtZg97eT5kL6PYVPVe1fQzn",
        "L44B5gGEpqEDRS9vVPz7QT35jcBG2r3CZwSwQ4fCewXAhAhqGVpP",
    ];
    let codec = NeoAddressCodec::default();
    for input in inputs {
        let result = decrypt_private_key(input, PASSPHRASE, &codec);
        assert!(result.is_err(), "{:?} should not decrypt", input);
    }
}

#[test]
fn test_wif_is_not_accepted_as_nep2() {
    // A WIF is valid Base58Check but has the wrong length and header
    let err = EncryptedKey::from_base58("L44B5gGEpqEDRS9vVPz7QT35jcBG2r3CZwSwQ4fCewXAhAhqGVpP")
        .unwrap_err();
    assert!(matches!(err, Nep2Error::InvalidLength(34)));
}

#[test]
fn test_bip38_ec_multiply_prefix_rejected() {
    let mut raw = vector_record().to_bytes();
    raw[1] = 0x43;
    let ec_multiply = bs58::encode(raw).with_check().into_string();
    assert!(matches!(
        EncryptedKey::from_base58(&ec_multiply),
        Err(Nep2Error::InvalidHeader([0x01, 0x43]))
    ));
}

// ============================================================================
// 3. Secret Hygiene
// ============================================================================

#[test]
fn test_private_key_zeroize() {
    let mut key = PrivateKey::from_hex(KEY_HEX).unwrap();
    key.zeroize();
    assert!(key.as_bytes().iter().all(|&b| b == 0));
}

#[test]
fn test_debug_output_hides_secrets() {
    let codec = NeoAddressCodec::default();
    let key = decrypt_private_key(ENCRYPTED, PASSPHRASE, &codec).unwrap();
    assert!(!format!("{:?}", key).contains(&KEY_HEX[..8]));

    let account = nep2_core::decrypt_account(ENCRYPTED, PASSPHRASE, &codec).unwrap();
    let printed = format!("{:?}", account);
    assert!(!printed.contains(PASSPHRASE));
    assert!(!printed.contains(&codec.wif_from_private_key(&key)));
}

#[test]
fn test_encryption_is_deterministic() {
    let key = PrivateKey::from_hex(KEY_HEX).unwrap();
    let a = encrypt_private_key(&key, ADDRESS, PASSPHRASE).unwrap();
    let b = encrypt_private_key(&key, ADDRESS, PASSPHRASE).unwrap();
    assert_eq!(a, b);
    assert_eq!(a, ENCRYPTED);
}
