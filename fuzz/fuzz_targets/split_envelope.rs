#![no_main]

use libfuzzer_sys::fuzz_target;
use onion_envelope::wire::{split_envelope, RSA_BLOCK_BYTES};

fuzz_target!(|data: &[u8]| {
    // Must never panic, whatever the input length.
    let _ = split_envelope(data, RSA_BLOCK_BYTES);

    if !data.is_empty() {
        let block_len = data[0] as usize * 4;
        let _ = split_envelope(&data[1..], block_len);
    }
});
