//! Coherent 2D noise.
//!
//! Connection curves bow by an amount read from a smooth noise field, so
//! neighbouring edges bend in related directions instead of jittering
//! independently.

use crate::rng::RandomSource;

/// Two coordinates in, a smooth value in `[0, 1]` out.
///
/// Any `Fn(f64, f64) -> f64` is a noise source too, which makes constant
/// or hand-shaped fields trivial in tests.
pub trait CoherentNoise {
    fn noise(&self, x: f64, y: f64) -> f64;
}

impl<F> CoherentNoise for F
where
    F: Fn(f64, f64) -> f64,
{
    fn noise(&self, x: f64, y: f64) -> f64 {
        self(x, y)
    }
}

const TABLE_SIZE: usize = 256;
const TABLE_MASK: i64 = (TABLE_SIZE - 1) as i64;

/// Seeded fractal value noise.
///
/// Random values sit on an integer lattice; samples are smoothstep-blended
/// between the four surrounding lattice points and summed over a few
/// octaves. The sum is normalized so output stays in `[0, 1)`.
#[derive(Debug, Clone)]
pub struct ValueNoise {
    values: Vec<f64>,
    perm: Vec<u8>,
    octaves: u32,
    falloff: f64,
}

impl ValueNoise {
    /// Four octaves, each at half the amplitude of the previous one.
    pub fn new<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        Self::with_detail(rng, 4, 0.5)
    }

    /// Custom octave count and per-octave amplitude falloff.
    ///
    /// `octaves` is clamped to at least 1, `falloff` to `(0, 1]`.
    pub fn with_detail<R: RandomSource + ?Sized>(rng: &mut R, octaves: u32, falloff: f64) -> Self {
        let values = (0..TABLE_SIZE).map(|_| rng.next_f64()).collect();

        // Fisher-Yates shuffle of 0..=255
        let mut perm: Vec<u8> = (0..TABLE_SIZE).map(|i| i as u8).collect();
        for i in (1..TABLE_SIZE).rev() {
            let j = rng.index(i + 1);
            perm.swap(i, j);
        }

        let falloff = if falloff > 0.0 && falloff <= 1.0 { falloff } else { 0.5 };

        Self { values, perm, octaves: octaves.max(1), falloff }
    }

    fn lattice(&self, ix: i64, iy: i64) -> f64 {
        let hx = self.perm[(ix & TABLE_MASK) as usize] as i64;
        let h = self.perm[((hx + iy) & TABLE_MASK) as usize];
        self.values[h as usize]
    }

    fn octave(&self, x: f64, y: f64) -> f64 {
        let x0 = x.floor();
        let y0 = y.floor();
        let tx = smoothstep(x - x0);
        let ty = smoothstep(y - y0);
        let ix = x0 as i64;
        let iy = y0 as i64;

        let top = lerp(self.lattice(ix, iy), self.lattice(ix + 1, iy), tx);
        let bottom = lerp(self.lattice(ix, iy + 1), self.lattice(ix + 1, iy + 1), tx);
        lerp(top, bottom, ty)
    }
}

impl CoherentNoise for ValueNoise {
    fn noise(&self, x: f64, y: f64) -> f64 {
        if !x.is_finite() || !y.is_finite() {
            return 0.5;
        }

        let mut total = 0.0;
        let mut amplitude = 1.0;
        let mut weight = 0.0;
        let mut frequency = 1.0;

        for _ in 0..self.octaves {
            total += self.octave(x * frequency, y * frequency) * amplitude;
            weight += amplitude;
            amplitude *= self.falloff;
            frequency *= 2.0;
        }

        (total / weight).clamp(0.0, 1.0)
    }
}

#[inline]
fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
