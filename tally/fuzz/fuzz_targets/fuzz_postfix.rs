#![no_main]

use libfuzzer_sys::fuzz_target;
use tally::{Engine, Postfix};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let postfix = Postfix::from_rpn(s);
        let _ = Engine::new().evaluate_postfix(&postfix);
    }
});
