#![no_main]

use libfuzzer_sys::fuzz_target;

use fibalgo_core::AlgorithmVersion;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    // Parsing never panics, and a success is always one of the four versions.
    if let Ok(version) = s.parse::<AlgorithmVersion>() {
        assert!((1..=4).contains(&version.number()));
    }
});
