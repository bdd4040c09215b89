use super::RadixKey;

pub(crate) const BUCKET_COUNT: usize = 256;

/// Per pass bucket bookkeeping, lives on the stack of a single radix pass.
pub(crate) struct Buckets {
    /// Number of elements with that byte value.
    size: [usize; BUCKET_COUNT],
    /// Offset of the bucket inside the pass target.
    start: [usize; BUCKET_COUNT],
    /// Elements already written into the bucket.
    filled: [usize; BUCKET_COUNT],
}

impl Buckets {
    /// Histogram of the byte at `byte_index` over `source`.
    #[inline]
    pub(crate) fn count<T: RadixKey>(source: &[T], byte_index: usize) -> Self {
        let mut size = [0; BUCKET_COUNT];

        for elem in source {
            size[elem.byte_at(byte_index) as usize] += 1;
        }

        Self {
            size,
            start: [0; BUCKET_COUNT],
            filled: [0; BUCKET_COUNT],
        }
    }

    #[inline]
    pub(crate) fn size(&self, bucket: usize) -> usize {
        self.size[bucket]
    }

    /// Places the buckets back to back, in the order `bucket_order` yields them.
    ///
    /// `bucket_order` must yield every byte value exactly once.
    #[inline]
    pub(crate) fn layout(&mut self, bucket_order: impl Iterator<Item = usize>) {
        let mut offset = 0;

        for bucket in bucket_order {
            self.start[bucket] = offset;
            offset += self.size[bucket];
        }
    }

    /// Copies `source` into `target` grouped by bucket. A single forward scan, so the relative
    /// order inside a bucket is kept.
    #[inline]
    pub(crate) fn scatter<T: RadixKey>(
        &mut self,
        source: &[T],
        target: &mut [T],
        byte_index: usize,
    ) {
        debug_assert_eq!(source.len(), target.len());

        for &elem in source {
            let bucket = elem.byte_at(byte_index) as usize;
            target[self.start[bucket] + self.filled[bucket]] = elem;
            self.filled[bucket] += 1;
        }
    }
}
