#![no_main]

use libfuzzer_sys::fuzz_target;
use tally::Engine;

fuzz_target!(|depth: u16| {
    let engine = Engine::new();

    let depth = (depth as usize % 2000) + 1;

    let mut expr = String::from("1");
    for _ in 0..depth {
        expr = format!("({}+1)", expr);
    }

    let value = engine.evaluate(&expr).expect("nested sums are well formed");
    assert_eq!(value, (depth + 1) as f64);
});
