use std::mem;
use std::ptr;

use msb_radix_sort::radix::RadixKey;

/// Reinterprets the fuzzer input as integers, trailing bytes that don't fill a whole `T` are
/// dropped.
pub fn u8_as_ints<T: RadixKey>(data: &[u8]) -> Vec<T> {
    let data_aligned = &data[..(data.len() - (data.len() % mem::size_of::<T>()))];
    let len = data_aligned.len() / mem::size_of::<T>();

    let mut v: Vec<T> = Vec::with_capacity(len);
    // SAFETY: RadixKey is only implemented for primitive integers, every bit pattern is a valid
    // value. The capacity covers `data_aligned.len()` bytes and the destination is freshly
    // allocated, so the regions don't overlap.
    unsafe {
        ptr::copy_nonoverlapping(
            data_aligned.as_ptr(),
            v.as_mut_ptr() as *mut u8,
            data_aligned.len(),
        );
        v.set_len(len);
    }

    v
}

/// Sorts with the radix sort and with the standard library, and panics if they disagree.
pub fn check_against_std<T: RadixKey + std::fmt::Debug>(mut v: Vec<T>, threshold: usize) {
    let mut expected = v.clone();
    expected.sort_unstable();

    msb_radix_sort::radix::radix_sort_with_threshold(&mut v, threshold);

    assert_eq!(v, expected);
}
