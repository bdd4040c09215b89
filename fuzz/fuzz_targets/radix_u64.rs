#![no_main]

use libfuzzer_sys::fuzz_target;

use msb_radix_sort::radix::DEFAULT_THRESHOLD;

fuzz_target!(|data: &[u8]| {
    fuzz_util::check_against_std(fuzz_util::u8_as_ints::<u64>(data), DEFAULT_THRESHOLD);
});
