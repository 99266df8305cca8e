#![no_main]

use libfuzzer_sys::fuzz_target;
use tally::{Engine, TallyError};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let engine = Engine::new();

        // The evaluator must always understand what the converter emits.
        if let Ok(postfix) = engine.compile(s) {
            if let Err(TallyError::InvalidCharacter { found, .. }) = engine.evaluate_postfix(&postfix) {
                // Only malformed or out-of-range number text is rejected.
                assert!(
                    found.chars().all(|c| c.is_ascii_digit() || c == '.'),
                    "converter emitted unknown token {:?}",
                    found
                );
            }
        }
    }
});
