//! Most significant byte first radix sort for fixed-width integers.
//!
//! Every pass distributes a range into 256 buckets by the byte at the current byte index and then
//! recurses into each bucket with the next lower byte. The passes alternate between the input
//! slice and a single auxiliary buffer of the same length. After a pass with byte index `i`
//! returns, the sorted range lives in that pass's target buffer if `i` is even and in its source
//! buffer if `i` is odd. Small ranges are handed to a comparison sort, which honors the same
//! parity rule.

mod buckets;
mod signed;
mod unsigned;

/// Ranges shorter than this are sorted with a comparison sort instead of another radix pass.
pub const DEFAULT_THRESHOLD: usize = 256;

/// Fixed-width integer that can be bucketed byte by byte.
///
/// Implemented for all primitive integer types, the trait is sealed.
pub trait RadixKey: Copy + Ord + private::Sealed {
    /// Width of the type in bytes.
    const BYTES: usize;

    /// Whether the most significant bit is a two's complement sign bit.
    const SIGNED: bool;

    /// Returns the raw byte at `byte_index`, where 0 is the least significant byte.
    fn byte_at(self, byte_index: usize) -> u8;
}

macro_rules! impl_radix_key {
    ($signed:expr => $($t:ty)*) => ($(
        impl RadixKey for $t {
            const BYTES: usize = std::mem::size_of::<$t>();
            const SIGNED: bool = $signed;

            #[inline(always)]
            fn byte_at(self, byte_index: usize) -> u8 {
                // Truncation keeps the raw two's complement byte, for signed types too.
                (self >> (byte_index * 8)) as u8
            }
        }
    )*)
}

impl_radix_key!(false => u8 u16 u32 u64 u128 usize);
impl_radix_key!(true => i8 i16 i32 i64 i128 isize);

mod private {
    pub trait Sealed {}

    macro_rules! sealed_impl { ($($t:ty)*) => ($(
        impl Sealed for $t {}
    )*) }

    sealed_impl! {
        u8 u16 u32 u64 u128 usize
        i8 i16 i32 i64 i128 isize
    }
}

/// Sorts the slice in ascending order with a MSB radix sort.
///
/// Allocates one auxiliary buffer of `v.len()` elements. Equal keys are indistinguishable for
/// integers, so the sort makes no stability promise.
///
/// # Examples
///
/// ```
/// let mut v = [3i64, -1, 0, 2, -5];
/// msb_radix_sort::radix::radix_sort(&mut v);
/// assert_eq!(v, [-5, -1, 0, 2, 3]);
/// ```
#[inline]
pub fn radix_sort<T: RadixKey>(v: &mut [T]) {
    radix_sort_with_threshold(v, DEFAULT_THRESHOLD);
}

/// Same as [`radix_sort`], with ranges shorter than `threshold` sorted by comparison.
///
/// The threshold only affects performance, the output is the same for every value >= 1.
///
/// # Panics
///
/// Panics if `threshold` is 0.
pub fn radix_sort_with_threshold<T: RadixKey>(v: &mut [T], threshold: usize) {
    assert!(threshold > 0, "comparison sort threshold must be at least 1");

    let len = v.len();
    if len < 2 {
        return;
    }

    // Filled with a copy of the first element, every slot is overwritten before it is read.
    let mut aux = vec![v[0]; len];
    let top_byte_index = T::BYTES - 1;

    if T::SIGNED {
        signed::radix_pass(v, &mut aux, top_byte_index, threshold);
    } else {
        unsigned::radix_pass(v, &mut aux, top_byte_index, threshold);
    }

    // An even top byte index leaves the result in the auxiliary buffer. Only one byte wide types
    // end up here.
    if top_byte_index % 2 == 0 {
        v.copy_from_slice(&aux);
    }
}

/// Base case of both engines.
#[inline]
fn sort_small<T: RadixKey>(source: &mut [T], target: &mut [T], byte_index: usize) {
    source.sort_unstable();

    // The caller expects the result of an even byte index in the target buffer.
    if byte_index % 2 == 0 {
        target.copy_from_slice(source);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_at_is_raw_twos_complement() {
        assert_eq!((-2i16).byte_at(0), 0xFE);
        assert_eq!((-2i16).byte_at(1), 0xFF);
        assert_eq!(i64::MIN.byte_at(7), 0x80);
        assert_eq!(i64::MIN.byte_at(0), 0x00);
        assert_eq!(0x0102_0304u32.byte_at(3), 0x01);
        assert_eq!(0x0102_0304u32.byte_at(0), 0x04);
        assert_eq!(u128::MAX.byte_at(15), 0xFF);
        assert_eq!(200u8.byte_at(0), 200);
    }

    #[test]
    fn key_properties() {
        assert_eq!(<u8 as RadixKey>::BYTES, 1);
        assert_eq!(<i128 as RadixKey>::BYTES, 16);
        assert!(<i32 as RadixKey>::SIGNED);
        assert!(!<usize as RadixKey>::SIGNED);
    }

    #[test]
    fn small_sort_parity() {
        let mut source = [3u32, 1, 2];
        let mut target = [0u32; 3];

        sort_small(&mut source, &mut target, 1);
        assert_eq!(source, [1, 2, 3]);
        assert_eq!(target, [0, 0, 0]);

        let mut source = [3u32, 1, 2];
        sort_small(&mut source, &mut target, 0);
        assert_eq!(source, [1, 2, 3]);
        assert_eq!(target, [1, 2, 3]);
    }

    #[test]
    fn one_byte_types_end_up_in_input() {
        let mut v: Vec<u8> = (0..=255).rev().chain(0..=255).collect();
        radix_sort_with_threshold(&mut v, 1);

        assert!(v.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(v.len(), 512);

        let mut v: Vec<i8> = (i8::MIN..=i8::MAX).rev().collect();
        radix_sort_with_threshold(&mut v, 1);

        assert_eq!(v, (i8::MIN..=i8::MAX).collect::<Vec<_>>());
    }
}
