#![no_main]

use libfuzzer_sys::fuzz_target;
use nep2_core::EncryptedKey;

fuzz_target!(|data: &[u8]| {
    // Raw record parsing must never panic. It always returns Ok or Err.
    if let Ok(key) = EncryptedKey::from_bytes(data) {
        // Anything accepted must serialize back to the same 39 bytes
        assert_eq!(&key.to_bytes()[..], data);
    }

    // Same for the Base58Check text form
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(key) = EncryptedKey::from_base58(text) {
            let reparsed = EncryptedKey::from_base58(&key.to_base58());
            assert_eq!(reparsed.ok(), Some(key));
        }
    }
});
