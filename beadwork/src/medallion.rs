//! Pattern medallions - the large animated discs.

use std::f64::consts::TAU;

use crate::canvas::Canvas;
use crate::color::Color;
use crate::geometry::{Point, ring_points};
use crate::palette::{BACKGROUND_CYCLE, Palette};
use crate::patterns::Motif;
use crate::rng::{RandomSource, pick_distinct};

/// Medallion radius.
pub const RADIUS: f64 = 70.0;
/// Diameter of each ring dot.
pub const DOT_SIZE: f64 = 5.0;
/// Radial gap between dotted rings.
pub const RING_SPACING: f64 = 7.0;
/// Background swap period.
pub const BACKGROUND_INTERVAL_MS: f64 = 2000.0;
/// Motif swap period.
pub const MOTIF_INTERVAL_MS: f64 = 3000.0;

/// Ring rotation per frame (radians).
const RING_SPIN: f64 = 0.01;
/// Core rotation per frame (radians).
const CORE_SPIN: f64 = 0.005;
/// How far rings breathe outwards per unit of expansion.
const EXPANSION_SCALE: f64 = 10.0;

/// A medallion placed on the layout grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Medallion {
    pub center: Point,
    pub radius: f64,
    pub palette: &'static Palette,
    /// Current background; starts as the palette's
    pub background: Color,
    /// Current motif; starts as the palette's
    pub motif: Motif,
    /// Phase of the dotted rings
    pub ring_rotation: f64,
    /// Phase of the center motif
    pub core_rotation: f64,
    /// Radial breathing, `sin(t) * 2`
    pub expansion: f64,
    last_background_swap_ms: f64,
    last_motif_swap_ms: f64,
}

impl Medallion {
    pub fn new(center: Point, palette: &'static Palette) -> Self {
        Self {
            center,
            radius: RADIUS,
            palette,
            background: palette.background,
            motif: palette.motif,
            ring_rotation: 0.0,
            core_rotation: 0.0,
            expansion: 0.0,
            last_background_swap_ms: 0.0,
            last_motif_swap_ms: 0.0,
        }
    }

    /// Minimum center distance to another medallion.
    pub fn min_separation(&self, gap: f64) -> f64 {
        self.radius * 2.0 + gap
    }

    /// True when the two discs (plus `gap`) would touch.
    pub fn overlaps(&self, other: &Medallion, gap: f64) -> bool {
        self.center.distance(other.center) < self.min_separation(gap)
    }

    /// Advance one frame at `elapsed_ms` since the start.
    ///
    /// Timers compare against the last swap, so a long stall triggers one
    /// swap, not a burst.
    pub fn update<R: RandomSource + ?Sized>(&mut self, elapsed_ms: f64, rng: &mut R) {
        if elapsed_ms - self.last_background_swap_ms > BACKGROUND_INTERVAL_MS {
            if let Some(next) = pick_distinct(rng, &BACKGROUND_CYCLE, &self.background) {
                self.background = *next;
            }
            self.last_background_swap_ms = elapsed_ms;
        }

        if elapsed_ms - self.last_motif_swap_ms > MOTIF_INTERVAL_MS {
            if let Some(next) = pick_distinct(rng, Motif::all(), &self.motif) {
                self.motif = *next;
            }
            self.last_motif_swap_ms = elapsed_ms;
        }

        self.expansion = (elapsed_ms / 1000.0).sin() * 2.0;
        self.ring_rotation += RING_SPIN;
        self.core_rotation += CORE_SPIN;
    }

    /// Radii of the dotted rings, outermost first.
    pub fn ring_radii(&self) -> Vec<f64> {
        let mut radii = Vec::new();
        let mut r = self.radius - 5.0;
        while r > 0.0 {
            radii.push(r);
            r -= RING_SPACING;
        }
        radii
    }

    /// Dot count for a ring of radius `r`: as many as fit at two dot
    /// diameters apart.
    pub fn dots_on_ring(r: f64) -> usize {
        (TAU * r / (DOT_SIZE * 2.0)).floor().max(0.0) as usize
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.push();
        canvas.translate(self.center);
        canvas.no_stroke();
        canvas.fill(self.background);
        canvas.circle(Point::ORIGIN, self.radius * 2.0);

        canvas.fill(self.palette.dots);
        let breathe = self.expansion * EXPANSION_SCALE;
        for r in self.ring_radii() {
            for dot in ring_points(Self::dots_on_ring(r), r + breathe, self.ring_rotation) {
                canvas.circle(dot, DOT_SIZE);
            }
        }

        self.draw_core(canvas);
        canvas.pop();
    }

    fn draw_core(&self, canvas: &mut dyn Canvas) {
        canvas.push();
        canvas.rotate(self.core_rotation);
        canvas.fill(self.palette.core);
        canvas.circle(Point::ORIGIN, DOT_SIZE * 10.0);
        self.motif.draw(canvas, self.palette, DOT_SIZE);
        canvas.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawCall, Recorder};
    use crate::rng::Rng;

    fn green_at(x: f64, y: f64) -> Medallion {
        Medallion::new(Point::new(x, y), Palette::from_name("green").unwrap())
    }

    #[test]
    fn starts_with_palette_defaults() {
        let m = green_at(10.0, 10.0);
        assert_eq!(m.background, m.palette.background);
        assert_eq!(m.motif, Motif::Concentric);
        assert_eq!(m.radius, 70.0);
    }

    #[test]
    fn overlap_threshold_is_140() {
        let a = green_at(0.0, 0.0);
        assert!(a.overlaps(&green_at(139.9, 0.0), 10.0));
        assert!(!a.overlaps(&green_at(140.0, 0.0), 10.0));
    }

    #[test]
    fn no_swap_before_interval() {
        let mut m = green_at(0.0, 0.0);
        let mut rng = Rng::new(1);
        m.update(2000.0, &mut rng);
        assert_eq!(m.background, m.palette.background);
        assert_eq!(m.motif, m.palette.motif);
    }

    #[test]
    fn swaps_always_change_value() {
        let mut m = green_at(0.0, 0.0);
        let mut rng = Rng::new(11);
        let mut t = 0.0;
        for _ in 0..200 {
            let before_bg = m.background;
            let before_motif = m.motif;
            // Jump straight past both intervals
            t += 3001.0;
            m.update(t, &mut rng);
            assert_ne!(m.background, before_bg);
            assert_ne!(m.motif, before_motif);
        }
    }

    #[test]
    fn background_swaps_on_its_own_timer() {
        let mut m = green_at(0.0, 0.0);
        let mut rng = Rng::new(4);
        m.update(2500.0, &mut rng);
        assert_ne!(m.background, m.palette.background);
        assert_eq!(m.motif, m.palette.motif);

        // 2500 + 2000 is not strictly past the next background swap
        let bg = m.background;
        m.update(4500.0, &mut rng);
        assert_eq!(m.background, bg);
        // but the motif timer (3000 from zero) has fired
        assert_ne!(m.motif, m.palette.motif);
    }

    #[test]
    fn phases_advance_every_frame() {
        let mut m = green_at(0.0, 0.0);
        let mut rng = Rng::new(4);
        m.update(16.0, &mut rng);
        m.update(32.0, &mut rng);
        assert!((m.ring_rotation - 0.02).abs() < 1e-12);
        assert!((m.core_rotation - 0.01).abs() < 1e-12);
        assert!((m.expansion - (0.032f64).sin() * 2.0).abs() < 1e-12);
    }

    #[test]
    fn ring_layout() {
        let m = green_at(0.0, 0.0);
        let radii = m.ring_radii();
        assert_eq!(radii.first(), Some(&65.0));
        assert_eq!(radii.len(), 10); // 65, 58, ..., 2
        assert_eq!(Medallion::dots_on_ring(65.0), 40);
        assert_eq!(Medallion::dots_on_ring(0.0), 0);
    }

    #[test]
    fn draw_is_translated_and_balanced() {
        let m = green_at(120.0, 80.0);
        let mut canvas = Recorder::new(400.0, 400.0);
        m.draw(&mut canvas);

        assert!(canvas.is_balanced());
        assert_eq!(canvas.calls[1], DrawCall::Translate(Point::new(120.0, 80.0)));
        let dots: usize = m.ring_radii().iter().map(|r| Medallion::dots_on_ring(*r)).sum();
        // background + ring dots + core + five concentric discs
        assert_eq!(canvas.circle_count(), 1 + dots + 1 + 5);
    }
}
