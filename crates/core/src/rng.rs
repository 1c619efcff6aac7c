//! RNG module - seeded randomness and the deck shuffle
//!
//! Provides a simple LCG for deterministic dealing (same seed, same board) and
//! an unbiased Fisher-Yates shuffle generic over any [`RandomSource`].

/// A source of uniformly distributed bounded integers.
pub trait RandomSource {
    /// Uniform value in `[0, bound)`. `bound` is never zero.
    fn next_below(&mut self, bound: u32) -> u32;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Takes the high bits of a 32x32 multiply (the low bits of an LCG cycle
    /// with short periods) and rejects the few products that would bias the
    /// result.
    pub fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0);
        let max = max.max(1);
        let mut product = u64::from(self.next_u32()) * u64::from(max);
        if (product as u32) < max {
            let threshold = max.wrapping_neg() % max;
            while (product as u32) < threshold {
                product = u64::from(self.next_u32()) * u64::from(max);
            }
        }
        (product >> 32) as u32
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        shuffle(slice, self);
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl RandomSource for SimpleRng {
    fn next_below(&mut self, bound: u32) -> u32 {
        self.next_range(bound)
    }
}

/// Unbiased in-place Fisher-Yates shuffle.
///
/// Walks from the last index down to 1, swapping each element with a uniformly
/// chosen element at or below it. Empty and single-element slices are untouched.
pub fn shuffle<T, R: RandomSource + ?Sized>(slice: &mut [T], rng: &mut R) {
    for i in (1..slice.len()).rev() {
        let j = rng.next_below((i + 1) as u32) as usize;
        slice.swap(i, j);
    }
}
