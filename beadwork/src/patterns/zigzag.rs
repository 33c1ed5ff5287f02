//! Zigzag motif - closed star-like rings.
//!
//! Vertices alternate between `radius + 4` and `radius - 4`, giving each
//! ring a sawtooth edge. Outer rings get more teeth.

use std::f64::consts::TAU;

use crate::canvas::Canvas;
use crate::color::Color;
use crate::geometry::Point;

const LAYERS: usize = 3;
const BASE_RADIUS: f64 = 2.0;
const BASE_SEGMENTS: usize = 12;
const AMPLITUDE: f64 = 4.0;

/// Vertices of every zigzag ring, innermost first.
pub fn zigzag_rings(dot_size: f64) -> Vec<Vec<Point>> {
    (0..LAYERS)
        .map(|layer| {
            let segments = BASE_SEGMENTS + layer * 2;
            let radius = BASE_RADIUS + layer as f64 * dot_size * 2.0;
            (0..segments)
                .map(|i| {
                    let angle = TAU * i as f64 / segments as f64;
                    // Alternate amplitude direction
                    let r = radius + if i % 2 == 1 { -AMPLITUDE } else { AMPLITUDE };
                    Point::polar(angle, r)
                })
                .collect()
        })
        .collect()
}

/// Draw the zigzag rings as thin translucent white outlines.
pub fn draw_zigzag(canvas: &mut dyn Canvas, dot_size: f64) {
    canvas.stroke(Color::WHITE.with_alpha(200));
    canvas.stroke_weight(1.0);
    canvas.no_fill();
    for ring in zigzag_rings(dot_size) {
        canvas.shape(&ring, true);
    }
    canvas.no_stroke();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Recorder;

    #[test]
    fn segment_counts_grow_per_layer() {
        let rings = zigzag_rings(5.0);
        let counts: Vec<_> = rings.iter().map(Vec::len).collect();
        assert_eq!(counts, vec![12, 14, 16]);
    }

    #[test]
    fn vertices_alternate_around_radius() {
        let rings = zigzag_rings(5.0);
        // Layer 1 radius = 2 + 10 = 12
        let ring = &rings[1];
        let r0 = ring[0].distance(Point::ORIGIN);
        let r1 = ring[1].distance(Point::ORIGIN);
        assert!((r0 - 16.0).abs() < 1e-9);
        assert!((r1 - 8.0).abs() < 1e-9);
    }

    #[test]
    fn draws_closed_shapes_and_resets_stroke() {
        let mut canvas = Recorder::new(100.0, 100.0);
        draw_zigzag(&mut canvas, 5.0);
        assert_eq!(canvas.shape_count(), 3);
        assert_eq!(canvas.calls.last(), Some(&crate::canvas::DrawCall::NoStroke));
    }
}
