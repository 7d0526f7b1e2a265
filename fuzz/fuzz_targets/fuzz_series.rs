#![no_main]

use libfuzzer_sys::fuzz_target;

use picalc_core::series::{estimate_pi, LeibnizSeries};
use picalc_core::workload::Workload;

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    // Use first 4 bytes as the bound, capped at 200000 for speed
    let n = u64::from(u32::from_le_bytes([data[0], data[1], data[2], data[3]])) % 200_000;

    let direct = estimate_pi(n);
    assert!(direct.is_finite());
    assert!(direct > 2.6 && direct <= 4.0);
    assert_eq!(direct.to_bits(), LeibnizSeries::new().run(n).to_bits());
});
