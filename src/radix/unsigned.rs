use std::mem;

use super::buckets::{Buckets, BUCKET_COUNT};
use super::{sort_small, RadixKey};

/// Sorts `source` by the bytes `byte_index..=0`, using `target` as scratch space.
///
/// Buckets are laid out in plain byte value order. On return the sorted range is in `target` if
/// `byte_index` is even and in `source` if it is odd.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn radix_pass<T: RadixKey>(
    source: &mut [T],
    target: &mut [T],
    byte_index: usize,
    threshold: usize,
) {
    debug_assert_eq!(source.len(), target.len());

    if source.len() < threshold {
        sort_small(source, target, byte_index);
        return;
    }

    let mut buckets = Buckets::count(source, byte_index);
    buckets.layout(0..BUCKET_COUNT);
    buckets.scatter(source, target, byte_index);

    if byte_index > 0 {
        sort_buckets(&buckets, 0..BUCKET_COUNT, target, source, byte_index - 1, threshold);
    }
}

/// Recurses into every non-empty bucket of a finished pass, with source and target swapped.
///
/// `scattered` is the target of the finished pass, `bucket_order` must match the order its
/// buckets were laid out in.
pub(crate) fn sort_buckets<T: RadixKey>(
    buckets: &Buckets,
    bucket_order: impl Iterator<Item = usize>,
    scattered: &mut [T],
    scratch: &mut [T],
    byte_index: usize,
    threshold: usize,
) {
    let mut scattered_rest = scattered;
    let mut scratch_rest = scratch;

    for bucket in bucket_order {
        let bucket_len = buckets.size(bucket);
        if bucket_len == 0 {
            continue;
        }

        let (source, next_scattered) = mem::take(&mut scattered_rest).split_at_mut(bucket_len);
        let (target, next_scratch) = mem::take(&mut scratch_rest).split_at_mut(bucket_len);
        scattered_rest = next_scattered;
        scratch_rest = next_scratch;

        radix_pass(source, target, byte_index, threshold);
    }

    debug_assert!(scattered_rest.is_empty() && scratch_rest.is_empty());
}
