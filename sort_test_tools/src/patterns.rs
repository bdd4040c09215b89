use std::env;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::OnceCell;

use rand::distributions::uniform::SampleUniform;
use rand::distributions::{Distribution, Standard, Uniform};
use rand::prelude::*;

/// Provides a set of patterns useful for testing and benchmarking sorting algorithms.
/// The shape patterns produce i32 values, callers widen or narrow them as needed.

// --- Public ---

pub fn random<T>(len: usize) -> Vec<T>
where
    Standard: Distribution<T>,
{
    //     .
    // : . : :
    // :.:::.::

    // Covers the full bit pattern of T, including the sign bit for signed integers.
    let mut rng = new_seed();

    (0..len).map(|_| rng.gen::<T>()).collect()
}

pub fn random_uniform<T, R>(len: usize, range: R) -> Vec<T>
where
    T: SampleUniform,
    R: Into<Uniform<T>>,
{
    // :.:.:.::
    let mut rng = new_seed();

    // Abstracting over ranges in Rust :(
    let dist: Uniform<T> = range.into();

    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn random_sorted(len: usize, sorted_percent: f64) -> Vec<i32> {
    //     .:
    //   .:::. :
    // .::::::.::
    // [----][--]
    //  ^      ^
    //  |      |
    // sorted  |
    //     unsorted

    // Simulate pre-existing sorted slice, where len - sorted_percent are the new unsorted values
    // and part of the overall distribution.
    let mut v = random::<i32>(len);
    let sorted_len = ((len as f64) * (sorted_percent / 100.0)).round() as usize;

    v[0..sorted_len].sort_unstable();

    v
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    (0..len).map(|_| 66).collect::<Vec<_>>()
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect::<Vec<_>>()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect::<Vec<_>>()
}

pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    if len == 0 {
        return Vec::new();
    }

    let mut vals = random::<i32>(len);
    let chunks_size = (len / saw_count.max(1)).max(1);
    let saw_directions = random_uniform((len / chunks_size) + 1, 0..=1);

    for (i, chunk) in vals.chunks_mut(chunks_size).enumerate() {
        if saw_directions[i] == 0 {
            chunk.sort();
        } else if saw_directions[i] == 1 {
            chunk.sort_by_key(|&e| std::cmp::Reverse(e));
        } else {
            unreachable!();
        }
    }

    vals
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random::<i32>(len);

    let first_half = &mut vals[0..(len / 2)];
    first_half.sort();

    let second_half = &mut vals[(len / 2)..len];
    second_half.sort_by_key(|&e| std::cmp::Reverse(e));

    vals
}

/// Sign-balanced values clustered around zero and both integer extremes. Every top byte value
/// near the sign boundary shows up, which is where a signed radix pass can go wrong.
pub fn sign_boundary(len: usize) -> Vec<i64> {
    //  :.     .:
    // .::::.::::.

    let offsets = random_uniform::<i64, _>(len, -1000..=1000);
    let anchors = random_uniform::<u8, _>(len, 0..=2);

    offsets
        .iter()
        .zip(anchors.iter())
        .map(|(&offset, &anchor)| match anchor {
            0 => i64::MIN.wrapping_add(offset.abs()),
            1 => offset,
            _ => i64::MAX.wrapping_sub(offset.abs()),
        })
        .collect()
}

static USE_FIXED_SEED: AtomicBool = AtomicBool::new(true);

/// Makes each call to a random derived pattern yield new random values.
///
/// By default `patterns::random(4)` will yield the same values per process invocation.
/// Benchmarks should call this.
pub fn disable_fixed_seed() {
    if env::var("OVERRIDE_SEED").is_ok() {
        panic!("Using disable_fixed_seed conflicts with the external seed override.");
    }

    USE_FIXED_SEED.store(false, Ordering::Release);
}

pub fn random_init_seed() -> u64 {
    if USE_FIXED_SEED.load(Ordering::Acquire) {
        static SEED: OnceCell<u64> = OnceCell::new();
        *SEED.get_or_init(|| -> u64 {
            env::var("OVERRIDE_SEED")
                .ok()
                .map(|seed| u64::from_str(&seed).expect("OVERRIDE_SEED must be a u64"))
                .unwrap_or_else(|| thread_rng().gen())
        })
    } else {
        thread_rng().gen()
    }
}

// --- Private ---

fn new_seed() -> StdRng {
    // Random seed, but prints it for repeatability.
    StdRng::seed_from_u64(random_init_seed())
}
