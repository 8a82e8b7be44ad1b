//! # Segment — Windowed Sieve of Eratosthenes
//!
//! Sieves one closed window `[lo, hi]` of the number line using a
//! precomputed list of small primes, without ever allocating for
//! `[0, hi]`. This is the performance-critical inner loop of the
//! search: total striking work across all primes `p <= √hi` is
//! O((hi−lo) · Σ 1/p), far cheaper than sieving from zero once `lo`
//! is large.

use crate::sieve::BitMask;

/// Sieve the closed window `[lo, hi]` and return the primes it contains,
/// ascending.
///
/// `small_primes` must contain every prime `<= isqrt(hi)`, ascending —
/// the caller obtains it from [`crate::sieve::generate_primes`]. A
/// shallower list silently misses composites; primes beyond `isqrt(hi)`
/// are harmless (their first multiple `p²` lies past the window).
///
/// For each prime `p`, striking starts at `max(p², ⌈lo/p⌉·p)`: the
/// ceiling term is the smallest multiple of `p` at or past `lo`, and
/// the `p²` floor keeps `p` itself (and any prime between `p` and `p²`)
/// from being struck as its own multiple.
///
/// # Panics
/// Debug-asserts `lo <= hi`.
pub fn sieve_segment(lo: u64, hi: u64, small_primes: &[u64]) -> Vec<u64> {
    debug_assert!(lo <= hi, "invalid window: [{}, {}]", lo, hi);

    let size = (hi - lo + 1) as usize;
    let mut mask = BitMask::new_all_set(size);

    for &p in small_primes {
        if p.saturating_mul(p) > hi {
            break; // ascending input: no later prime strikes anything either
        }
        let first_in_window = lo.div_ceil(p) * p;
        let mut m = first_in_window.max(p * p);
        while m <= hi {
            mask.clear((m - lo) as usize);
            m += p;
        }
    }

    // 0 and 1 are not prime and no multiple rule ever strikes them.
    let mut v = lo;
    while v < 2 && v <= hi {
        mask.clear((v - lo) as usize);
        v += 1;
    }

    mask.iter_set_bits().map(|i| lo + i as u64).collect()
}
