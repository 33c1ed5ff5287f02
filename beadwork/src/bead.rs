//! Decorative beads scattered between medallions.

use crate::canvas::Canvas;
use crate::color::Color;
use crate::geometry::Point;
use crate::palette::{BEAD_ACCENTS, BEAD_NEUTRAL, EMBER};
use crate::rng::RandomSource;

/// Resting bead diameter.
pub const BASE_SIZE: f64 = 13.5;
/// Delay between consecutive beads lighting up.
pub const REVEAL_STAGGER_MS: f64 = 25.0;

const PULSE_AMPLITUDE: f64 = 3.0;
const SPIN: f64 = 0.01;

#[derive(Debug, Clone, PartialEq)]
pub struct Bead {
    pub position: Point,
    /// Creation order within the layout epoch
    pub index: usize,
    pub base_size: f64,
    /// Current pulsing diameter
    pub size: f64,
    pub rotation: f64,
    /// Body color, neutral until revealed
    pub fill: Color,
    revealed: bool,
}

impl Bead {
    pub fn new(position: Point, index: usize) -> Self {
        Self {
            position,
            index,
            base_size: BASE_SIZE,
            size: BASE_SIZE,
            rotation: 0.0,
            fill: BEAD_NEUTRAL,
            revealed: false,
        }
    }

    /// Elapsed time at which this bead switches to its accent color.
    pub fn reveal_at_ms(&self) -> f64 {
        self.index as f64 * REVEAL_STAGGER_MS
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn glow_size(&self) -> f64 {
        self.base_size * 1.5
    }

    pub fn inner_size(&self) -> f64 {
        self.base_size * 0.4
    }

    /// Advance one frame at `elapsed_ms` since the start.
    pub fn update<R: RandomSource + ?Sized>(&mut self, elapsed_ms: f64, rng: &mut R) {
        let t = elapsed_ms / 1000.0;
        self.size = self.base_size + (t * 2.0).sin() * PULSE_AMPLITUDE;
        self.rotation += SPIN;

        if !self.revealed && elapsed_ms >= self.reveal_at_ms() {
            self.fill = BEAD_ACCENTS[rng.index(BEAD_ACCENTS.len())];
            self.revealed = true;
        }
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.push();
        canvas.translate(self.position);
        canvas.rotate(self.rotation);
        canvas.no_stroke();

        canvas.fill(EMBER);
        canvas.circle(Point::ORIGIN, self.glow_size());

        canvas.fill(self.fill);
        canvas.circle(Point::ORIGIN, self.size);

        canvas.fill(Color::WHITE);
        canvas.circle(Point::ORIGIN, self.inner_size());
        canvas.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawCall, Recorder};
    use crate::rng::Rng;

    #[test]
    fn starts_neutral() {
        let bead = Bead::new(Point::new(1.0, 2.0), 3);
        assert_eq!(bead.fill, BEAD_NEUTRAL);
        assert!(!bead.is_revealed());
        assert_eq!(bead.reveal_at_ms(), 75.0);
    }

    #[test]
    fn reveal_is_staggered_by_index() {
        let mut rng = Rng::new(2);
        let mut early = Bead::new(Point::ORIGIN, 0);
        let mut late = Bead::new(Point::ORIGIN, 40);

        early.update(0.0, &mut rng);
        late.update(0.0, &mut rng);
        assert!(early.is_revealed());
        assert!(!late.is_revealed());

        late.update(999.0, &mut rng);
        assert!(!late.is_revealed());
        late.update(1000.0, &mut rng);
        assert!(late.is_revealed());
        assert!(BEAD_ACCENTS.contains(&late.fill));
    }

    #[test]
    fn reveal_happens_once() {
        let mut rng = Rng::new(8);
        let mut bead = Bead::new(Point::ORIGIN, 0);
        bead.update(10.0, &mut rng);
        let color = bead.fill;
        for i in 0..100 {
            bead.update(20.0 + i as f64 * 16.0, &mut rng);
            assert_eq!(bead.fill, color);
        }
    }

    #[test]
    fn pulse_stays_in_band() {
        let mut rng = Rng::new(8);
        let mut bead = Bead::new(Point::ORIGIN, 0);
        for i in 0..500 {
            bead.update(i as f64 * 16.7, &mut rng);
            assert!(bead.size >= BASE_SIZE - 3.0 - 1e-9);
            assert!(bead.size <= BASE_SIZE + 3.0 + 1e-9);
        }
        assert!((bead.rotation - 5.0).abs() < 1e-9);
    }

    #[test]
    fn draws_glow_body_and_center() {
        let bead = Bead::new(Point::new(5.0, 6.0), 0);
        let mut canvas = Recorder::new(10.0, 10.0);
        bead.draw(&mut canvas);

        assert!(canvas.is_balanced());
        let diameters: Vec<f64> = canvas
            .calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Circle { diameter, .. } => Some(*diameter),
                _ => None,
            })
            .collect();
        assert_eq!(diameters.len(), 3);
        assert!((diameters[0] - 20.25).abs() < 1e-9);
        assert!((diameters[1] - 13.5).abs() < 1e-9);
        assert!((diameters[2] - 5.4).abs() < 1e-9);
    }
}
