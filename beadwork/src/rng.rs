//! Random number sources.
//!
//! Layout and animation never call a global RNG. Everything that needs
//! randomness takes a [`RandomSource`], so tests can pin a seed and replay
//! the exact same layout.
//!
//! Two sources are provided:
//! - [`Rng`], a tiny deterministic LCG (fast, reproducible across platforms)
//! - `rand::rngs::StdRng`, for hosts that want OS-seeded entropy

use rand::RngCore;
use rand::rngs::StdRng;

/// Uniform random sampling, as consumed by the placement engine and the
/// animated entities.
///
/// ## Rust Lesson #12: Traits with default methods
///
/// A trait is like a TypeScript interface, but it can also ship default
/// method bodies. Implementors only provide `next_f64`; everything else
/// is built on top of it.
pub trait RandomSource {
    /// A value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// A value in `[min, max)`. Returns `min` when the range is empty.
    fn range(&mut self, min: f64, max: f64) -> f64 {
        if max <= min {
            return min;
        }
        min + self.next_f64() * (max - min)
    }

    /// An index in `[0, len)`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize {
        // Clamp guards against next_f64 implementations that round up to 1.0
        ((self.next_f64() * len as f64) as usize).min(len.saturating_sub(1))
    }
}

/// Pick an element different from `current`, resampling until it differs.
///
/// Returns `None` when every element equals `current` (including an empty
/// slice), where resampling could never terminate.
pub fn pick_distinct<'a, T, R>(rng: &mut R, items: &'a [T], current: &T) -> Option<&'a T>
where
    T: PartialEq,
    R: RandomSource + ?Sized,
{
    if !items.iter().any(|item| item != current) {
        return None;
    }
    loop {
        let candidate = &items[rng.index(items.len())];
        if candidate != current {
            return Some(candidate);
        }
    }
}

/// A fast, deterministic pseudo-random number generator.
///
/// Uses a Linear Congruential Generator (LCG) with parameters from
/// Numerical Recipes. Good enough for decoration, and the same seed gives
/// the same layout on every platform.
///
/// # Example
/// ```
/// use beadwork::rng::{RandomSource, Rng};
///
/// let mut rng = Rng::new(12345);
/// let value = rng.next_f64(); // Returns value in [0, 1)
/// assert!((0.0..1.0).contains(&value));
/// ```
#[derive(Clone, Debug)]
pub struct Rng {
    state: u64,
}

impl Rng {
    /// Create a new RNG with the given seed.
    #[inline]
    pub fn new(seed: u64) -> Self {
        Self { state: seed.wrapping_add(1) }
    }

    /// Get the next raw u64 value.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state
    }
}

impl Default for Rng {
    fn default() -> Self {
        Self::new(0)
    }
}

impl RandomSource for Rng {
    #[inline]
    fn next_f64(&mut self) -> f64 {
        // Use high bits for better distribution
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

impl RandomSource for StdRng {
    #[inline]
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}
