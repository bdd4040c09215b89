//! Most significant byte first radix sort for integer slices, with a comparison sort fallback for
//! everything else.

use std::any::TypeId;

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord + 'static,
            {
                sort(arr);
            }
        }
    };
}

// The standard library sorts the radix sort is compared against.
pub mod baseline;
pub mod radix;

use radix::RadixKey;

sort_impl!("rust_msb_radix_unstable");

/// Sorts the slice in ascending order.
///
/// Slices of primitive integers are sorted with [`radix::radix_sort`], anything else falls back
/// to [`slice::sort_unstable`]. The element type is inspected once per call.
///
/// # Examples
///
/// ```
/// let mut v = [5u64, 5, 3, 3, 1];
/// msb_radix_sort::sort(&mut v);
/// assert_eq!(v, [1, 3, 3, 5, 5]);
///
/// let mut words = ["radix", "bucket", "byte"];
/// msb_radix_sort::sort(&mut words);
/// assert_eq!(words, ["bucket", "byte", "radix"]);
/// ```
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord + 'static,
{
    sort_with_threshold(v, radix::DEFAULT_THRESHOLD);
}

/// Same as [`sort`], with integer ranges shorter than `threshold` sorted by comparison.
///
/// # Panics
///
/// Panics if `threshold` is 0.
pub fn sort_with_threshold<T>(v: &mut [T], threshold: usize)
where
    T: Ord + 'static,
{
    assert!(threshold > 0, "comparison sort threshold must be at least 1");

    if v.len() < 2 {
        return;
    }

    macro_rules! radix_sort_if {
        ($($int:ty),*) => {
            $(
                if let Some(ints) = as_radix_keys::<T, $int>(v) {
                    radix::radix_sort_with_threshold(ints, threshold);
                    return;
                }
            )*
        };
    }

    radix_sort_if!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

    v.sort_unstable();
}

/// Views `v` as a slice of `K` if `T` is `K`.
#[inline(always)]
fn as_radix_keys<T: 'static, K: RadixKey + 'static>(v: &mut [T]) -> Option<&mut [K]> {
    if TypeId::of::<T>() == TypeId::of::<K>() {
        // SAFETY: T and K are the same type, so the slice has the same layout and validity, and
        // the returned borrow is tied to the one of `v`.
        Some(unsafe { &mut *(v as *mut [T] as *mut [K]) })
    } else {
        None
    }
}
