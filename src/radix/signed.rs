use super::buckets::{Buckets, BUCKET_COUNT};
use super::{sort_small, unsigned, RadixKey};

const SIGN_BUCKET: usize = BUCKET_COUNT / 2;

/// Top byte buckets in ascending signed order: 128..=255 hold the negative values, 0..=127 the
/// non-negative ones.
#[inline]
fn signed_bucket_order() -> impl Iterator<Item = usize> {
    (SIGN_BUCKET..BUCKET_COUNT).chain(0..SIGN_BUCKET)
}

/// Top level pass for signed integers, same parity contract as [`unsigned::radix_pass`].
///
/// Only the most significant byte carries the sign. Once the range is split by it, each bucket
/// holds values of a single sign whose lower bytes compare as unsigned magnitudes, so the
/// remaining passes run on the unsigned engine.
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
    buckets.layout(signed_bucket_order());
    buckets.scatter(source, target, byte_index);

    if byte_index > 0 {
        unsigned::sort_buckets(
            &buckets,
            signed_bucket_order(),
            target,
            source,
            byte_index - 1,
            threshold,
        );
    }
}
