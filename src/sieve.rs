//! # Sieve — Small-Prime Generation and the Packed Composite Mask
//!
//! Number-theoretic foundation for the segmented search. Provides:
//!
//! 1. **Prime generation** (`generate_primes`) via the classic sieve of
//!    Eratosthenes, used to produce the "small" primes up to √hi that
//!    drive each window's segment sieve.
//! 2. **Integer square root** (`isqrt`), exact floor semantics with no
//!    floating-point anywhere near a boundary comparison.
//! 3. **`BitMask`**, a packed u64 bitmap used as the composite mask for
//!    both the classic sieve and each search window.
//!
//! ## Algorithm: Sieve of Eratosthenes
//!
//! A bitmap over `0..=limit` starts all-set; 0 and 1 are cleared, then
//! for each surviving `i` up to `isqrt(limit)` every multiple from `i²`
//! is struck. Complexity: O(n log log n) time, O(n/8) space.
//!
//! ## References
//!
//! - Eratosthenes of Cyrene, ~240 BCE (sieve algorithm).
//! - OEIS A000720: pi(n), the prime counting function.

/// Floor integer square root: the largest `r` with `r*r <= n`.
///
/// Newton's method on integers, seeded with a power of two above √n so
/// the iteration converges from above. Exact — never subject to the
/// rounding of `(n as f64).sqrt()`, which can misplace the boundary for
/// large `n` and silently drop the last sieving prime.
pub fn isqrt(n: u64) -> u64 {
    if n < 2 {
        return n;
    }
    let bits = 64 - n.leading_zeros() as u64;
    let mut x = 1u64 << bits.div_ceil(2); // x >= sqrt(n)
    loop {
        let y = (x + n / x) / 2;
        if y >= x {
            return x;
        }
        x = y;
    }
}

/// Generate all primes up to `limit` (inclusive) in ascending order.
///
/// Classic sieve of Eratosthenes over a packed bitmap. `limit < 2`
/// yields an empty vec.
pub fn generate_primes(limit: u64) -> Vec<u64> {
    if limit < 2 {
        return vec![];
    }
    let limit = limit as usize;
    let mut mask = BitMask::new_all_set(limit + 1);
    mask.clear(0);
    mask.clear(1);

    let root = isqrt(limit as u64) as usize;
    for i in 2..=root {
        if !mask.get(i) {
            continue;
        }
        let mut m = i * i;
        while m <= limit {
            mask.clear(m);
            m += i;
        }
    }

    let mut primes = Vec::with_capacity(estimate_prime_count(limit));
    primes.extend(mask.iter_set_bits().map(|i| i as u64));
    primes
}

/// Estimate prime count up to n using the prime counting function approximation.
fn estimate_prime_count(n: usize) -> usize {
    if n < 10 {
        return 4;
    }
    let nf = n as f64;
    (1.3 * nf / nf.ln()) as usize
}

/// Trial-division primality check, used as an independent cross-check
/// in tests. O(√n) per call; not meant for bulk generation.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut d = 2u64;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

/// Packed bit array serving as a composite mask.
///
/// 8× memory reduction over `Vec<bool>`: bit `i` set means the value at
/// offset `i` is still presumed prime; striking a composite clears its
/// bit. A 1M-wide search window costs 125 KB instead of 1 MB, fitting
/// in L2 cache on most architectures. Uses hardware `POPCNT` (via
/// `count_ones()`) for O(n/64) survivor counting.
///
/// Bit layout: bit `i` is stored in word `i / 64`, bit position `i % 64`.
pub struct BitMask {
    words: Vec<u64>,
    len: usize,
}

impl BitMask {
    /// Create a mask of `len` bits, all set (every offset presumed prime).
    pub fn new_all_set(len: usize) -> Self {
        let num_words = len.div_ceil(64);
        let mut words = vec![u64::MAX; num_words];
        // Clear unused high bits in the last word
        let extra = num_words * 64 - len;
        if extra > 0 && num_words > 0 {
            words[num_words - 1] >>= extra;
        }
        BitMask { words, len }
    }

    /// Number of bits in this mask.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the mask has zero length.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get bit `index`. Returns `true` if the offset is still presumed prime.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        debug_assert!(
            index < self.len,
            "BitMask index out of bounds: {} >= {}",
            index,
            self.len
        );
        let word = self.words[index / 64];
        word & (1u64 << (index % 64)) != 0
    }

    /// Clear bit `index` to 0 (offset struck as composite).
    #[inline]
    pub fn clear(&mut self, index: usize) {
        debug_assert!(index < self.len);
        self.words[index / 64] &= !(1u64 << (index % 64));
    }

    /// Count the number of set bits (surviving offsets) using hardware POPCNT.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Iterate over the indices of all set bits in ascending order.
    pub fn iter_set_bits(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(wi, &word)| {
            let base = wi * 64;
            BitIter { word, base }
        })
    }
}

/// Iterator over set bits within a single u64 word.
struct BitIter {
    word: u64,
    base: usize,
}

impl Iterator for BitIter {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.word == 0 {
            return None;
        }
        let tz = self.word.trailing_zeros() as usize;
        self.word &= self.word - 1; // clear lowest set bit
        Some(self.base + tz)
    }
}
