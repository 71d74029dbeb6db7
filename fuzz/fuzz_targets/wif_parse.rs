#![no_main]

use libfuzzer_sys::fuzz_target;
use nep2_core::AddressCodec;
use nep2_neo::NeoAddressCodec;

fuzz_target!(|data: &[u8]| {
    // WIF decoding and address derivation must never panic on arbitrary input.
    if let Ok(text) = std::str::from_utf8(data) {
        let codec = NeoAddressCodec::default();
        if let Ok((address, key)) = codec.address_from_wif(text) {
            assert_eq!(codec.address_from_private_key(&key).ok(), Some(address));
        }
    }
});
