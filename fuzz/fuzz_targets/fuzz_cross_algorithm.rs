#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

use fibalgo_core::closed_form::fib_closed_form;
use fibalgo_core::fastdoubling::fib_fast_doubling;
use fibalgo_core::iterative::fib_iterative;
use fibalgo_core::CLOSED_FORM_EXACT_MAX;

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    // Use first 4 bytes as n, capped at 10000 for speed
    let n = u64::from(u32::from_le_bytes([data[0], data[1], data[2], data[3]]));
    let n = n % 10_000;

    let fast = fib_fast_doubling(n);
    let iter = fib_iterative(n);
    assert_eq!(fast, iter, "FastDoubling != Iterative at n={n}");

    if n <= CLOSED_FORM_EXACT_MAX {
        let approx: BigUint = fib_closed_form(n).expect("finite below the exact limit");
        assert_eq!(fast, approx, "FastDoubling != ClosedForm at n={n}");
    }
});
