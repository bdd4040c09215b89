pub mod std_unstable {
    sort_impl!("rust_std_unstable");

    #[inline]
    pub fn sort<T>(v: &mut [T])
    where
        T: Ord,
    {
        v.sort_unstable();
    }
}

pub mod std_stable {
    sort_impl!("rust_std_stable");

    #[inline]
    pub fn sort<T>(v: &mut [T])
    where
        T: Ord,
    {
        v.sort();
    }
}
