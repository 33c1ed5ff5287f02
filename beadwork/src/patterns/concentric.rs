//! Concentric motif - nested two-tone discs.

use crate::canvas::Canvas;
use crate::geometry::Point;
use crate::palette::Palette;

/// Ring step between nested discs.
const RING_STEP: f64 = 10.0;

/// Disc diameters from the outside in: `dot_size * 10`, then down by 10
/// while still positive.
pub fn concentric_diameters(dot_size: f64) -> Vec<f64> {
    let mut diameters = Vec::new();
    let mut d = dot_size * 10.0;
    while d > 0.0 {
        diameters.push(d);
        d -= RING_STEP;
    }
    diameters
}

/// Draw nested discs, largest first so each smaller one sits on top.
///
/// A disc uses the palette's outer ring color when `d / 10` is even and
/// the inner color otherwise.
pub fn draw_concentric(canvas: &mut dyn Canvas, palette: &Palette, dot_size: f64) {
    let (outer, inner) = palette.ring_colors();
    for d in concentric_diameters(dot_size) {
        let even = (d / RING_STEP).round() as i64 % 2 == 0;
        canvas.fill(if even { outer } else { inner });
        canvas.circle(Point::ORIGIN, d);
    }
}
