#![no_main]

use libfuzzer_sys::fuzz_target;

// The first byte picks the comparison sort threshold, so short inputs also run full radix passes.
fuzz_target!(|data: &[u8]| {
    if let Some((&threshold, rest)) = data.split_first() {
        let threshold = (threshold as usize).max(1);

        fuzz_util::check_against_std(fuzz_util::u8_as_ints::<i16>(rest), threshold);
        fuzz_util::check_against_std(fuzz_util::u8_as_ints::<u32>(rest), threshold);
        fuzz_util::check_against_std(rest.to_vec(), threshold);
    }
});
