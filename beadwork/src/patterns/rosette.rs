//! Rosette motif - rings of small white dots.

use crate::canvas::Canvas;
use crate::color::Color;
use crate::geometry::{Point, ring_points};

const LAYERS: usize = 2;
const DOTS_PER_LAYER: usize = 8;

/// Dot centers, inner layer first. Layer `n` (1-based) holds `8n` dots at
/// radius `2 * dot_size * n`.
pub fn rosette_points(dot_size: f64) -> Vec<Point> {
    (1..=LAYERS)
        .flat_map(|layer| ring_points(DOTS_PER_LAYER * layer, dot_size * 2.0 * layer as f64, 0.0))
        .collect()
}

pub fn draw_rosette(canvas: &mut dyn Canvas, dot_size: f64) {
    canvas.fill(Color::WHITE);
    for p in rosette_points(dot_size) {
        canvas.circle(p, dot_size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_layers_of_eight_and_sixteen() {
        let pts = rosette_points(5.0);
        assert_eq!(pts.len(), 24);
        let inner = pts[..8].iter().all(|p| (p.distance(Point::ORIGIN) - 10.0).abs() < 1e-9);
        let outer = pts[8..].iter().all(|p| (p.distance(Point::ORIGIN) - 20.0).abs() < 1e-9);
        assert!(inner && outer);
    }
}
