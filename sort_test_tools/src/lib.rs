pub trait Sort {
    fn name() -> String;

    /// Sorts `arr` in ascending order.
    ///
    /// The `'static` bound lets implementations pick a specialized path per element type at
    /// runtime.
    fn sort<T>(arr: &mut [T])
    where
        T: Ord + 'static;
}

pub mod patterns;

// Re-exported so the test instantiation macros work without the user depending on paste.
#[doc(hidden)]
pub use paste;
