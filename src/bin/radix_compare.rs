//! Times the radix sort against the standard library unstable sort on large random inputs and
//! checks that both agree.
//!
//! Usage: `radix_compare [len] [profile,...]`
//!
//! Profiles: `unsigned-array`, `signed-array`, `unsigned-vec`, `signed-vec`. Set `OVERRIDE_SEED`
//! to reproduce a run.

use std::env;
use std::process;
use std::time::Instant;

use msb_radix_sort::baseline::std_unstable;
use sort_test_tools::{patterns, Sort};

const DEFAULT_LEN: usize = 50_000_000;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Profile {
    UnsignedArray,
    SignedArray,
    UnsignedVec,
    SignedVec,
}

impl Profile {
    const ALL: [Profile; 4] = [
        Profile::UnsignedArray,
        Profile::SignedArray,
        Profile::UnsignedVec,
        Profile::SignedVec,
    ];

    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "unsigned-array" => Some(Profile::UnsignedArray),
            "signed-array" => Some(Profile::SignedArray),
            "unsigned-vec" => Some(Profile::UnsignedVec),
            "signed-vec" => Some(Profile::SignedVec),
            _ => None,
        }
    }

    fn title(self) -> &'static str {
        match self {
            Profile::UnsignedArray => "Unsigned array",
            Profile::SignedArray => "Signed array",
            Profile::UnsignedVec => "Unsigned vector",
            Profile::SignedVec => "Signed vector",
        }
    }

    fn run(self, len: usize) -> bool {
        match self {
            Profile::UnsignedArray => {
                compare::<_, u64>(self.title(), patterns::random::<u64>(len).into_boxed_slice())
            }
            Profile::SignedArray => {
                compare::<_, i64>(self.title(), patterns::random::<i64>(len).into_boxed_slice())
            }
            Profile::UnsignedVec => compare::<_, u64>(self.title(), patterns::random::<u64>(len)),
            Profile::SignedVec => compare::<_, i64>(self.title(), patterns::random::<i64>(len)),
        }
    }
}

fn time_sort<S: Sort, T: Ord + 'static>(v: &mut [T]) -> u128 {
    let start = Instant::now();
    S::sort(v);
    start.elapsed().as_millis()
}

fn compare<C, T>(title: &str, mut baseline_sorted: C) -> bool
where
    C: AsMut<[T]> + Clone,
    T: Ord + 'static,
{
    println!("--- {title} ---");

    let mut radix_sorted = baseline_sorted.clone();

    let baseline_ms = time_sort::<std_unstable::SortImpl, T>(baseline_sorted.as_mut());
    println!(
        "{} in {baseline_ms} milliseconds.",
        <std_unstable::SortImpl as Sort>::name()
    );

    let radix_ms = time_sort::<msb_radix_sort::SortImpl, T>(radix_sorted.as_mut());
    println!("Radix sort in {radix_ms} milliseconds.");

    let equal = baseline_sorted.as_mut() == radix_sorted.as_mut();
    println!("Equal: {equal}");

    equal
}

fn parse_args() -> (usize, Vec<Profile>) {
    let args = env::args().collect::<Vec<_>>();

    let len = match args.get(1) {
        Some(arg) => arg.replace('_', "").parse::<usize>().unwrap_or_else(|_| {
            eprintln!("Invalid input length: '{arg}'");
            process::exit(2);
        }),
        None => DEFAULT_LEN,
    };

    let profiles = match args.get(2) {
        Some(arg) => arg
            .split(',')
            .map(|name| {
                Profile::from_arg(name.trim()).unwrap_or_else(|| {
                    eprintln!("Unknown profile: '{name}'");
                    process::exit(2);
                })
            })
            .collect(),
        None => Profile::ALL.to_vec(),
    };

    (len, profiles)
}

fn main() {
    let (len, profiles) = parse_args();

    if let Ok(seed) = env::var("OVERRIDE_SEED") {
        println!("Seed: {seed}");
    } else {
        // Fresh values for every profile.
        patterns::disable_fixed_seed();
    }

    let mut all_equal = true;
    for profile in profiles {
        all_equal &= profile.run(len);
    }

    println!("Bye!");

    if !all_equal {
        process::exit(1);
    }
}
