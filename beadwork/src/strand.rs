//! Glowing strands drawn along bead connections.
//!
//! Each connection is a gentle curve from one bead to the other, bent by a
//! single control point whose offset comes from coherent noise. The curve is
//! a Catmull-Rom spline through `(a, a, control, b, b)`; the doubled ends
//! make the spline pass through both beads.
//!
//! ## Rust Lesson #13: Closures as `&mut FnMut`
//!
//! `lyon_geom` flattens a Bézier by calling us back once per line segment.
//! It takes `&mut F where F: FnMut(..)`, so the closure can push into a
//! `Vec` it borrows mutably from the enclosing scope. No allocation of an
//! intermediate segment list is needed.

use lyon_geom::{CubicBezierSegment, point};

use crate::canvas::Canvas;
use crate::color::Color;
use crate::geometry::{Point, remap};
use crate::graph::Connection;
use crate::noise::CoherentNoise;
use crate::palette::EMBER;

/// Configuration for the strand glow.
#[derive(Clone, Debug, PartialEq)]
pub struct StrandConfig {
    /// Number of stroke passes
    pub layers: usize,
    /// Alpha of the wide halo pass
    pub outer_alpha: f64,
    /// Alpha of the thin core pass
    pub inner_alpha: f64,
    /// Stroke width of the wide halo pass
    pub outer_width: f64,
    /// Stroke width of the thin core pass
    pub inner_width: f64,
    /// Maximum control point offset per axis
    pub jitter: f64,
    /// Flattening tolerance in canvas units
    pub tolerance: f64,
}

impl Default for StrandConfig {
    fn default() -> Self {
        Self {
            layers: 4,
            outer_alpha: 50.0,
            inner_alpha: 200.0,
            outer_width: 3.0,
            inner_width: 0.8,
            jitter: 15.0,
            tolerance: 0.25,
        }
    }
}

impl StrandConfig {
    pub fn with_layers(mut self, layers: usize) -> Self {
        self.layers = layers;
        self
    }

    pub fn with_jitter(mut self, jitter: f64) -> Self {
        self.jitter = jitter;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Stroke (color, width) of each layer in draw order.
    ///
    /// Layer `k` runs from `layers - 1` down to 0. Alpha and width are
    /// remapped from `k` over `[0, layers - 1]`, so the thin bright core is
    /// stroked first and the wide faint halo last.
    pub fn layer_strokes(&self) -> Vec<(Color, f64)> {
        let top = self.layers.saturating_sub(1) as f64;
        (0..self.layers)
            .rev()
            .map(|k| {
                let k = k as f64;
                let alpha = remap(k, 0.0, top, self.outer_alpha, self.inner_alpha);
                let width = remap(k, 0.0, top, self.outer_width, self.inner_width);
                let color = EMBER.with_alpha(alpha.round().clamp(0.0, 255.0) as u8);
                (color, width)
            })
            .collect()
    }
}

/// Control point of the strand between `from` and `to`.
///
/// Sits on the midpoint, offset per axis by noise sampled at the edge's
/// jitter seed. Same edge, same noise field, same bend.
pub fn control_point<N: CoherentNoise + ?Sized>(
    from: Point,
    to: Point,
    conn: &Connection,
    noise: &N,
    jitter: f64,
) -> Point {
    let (sa, sb) = conn.jitter_seed();
    let dx = remap(noise.noise(sa, sb), 0.0, 1.0, -jitter, jitter);
    let dy = remap(noise.noise(sb, sa), 0.0, 1.0, -jitter, jitter);
    from.midpoint(to).offset(dx, dy)
}

/// Bézier equivalent of the Catmull-Rom span from `p1` to `p2`.
fn catmull_rom_span(p0: Point, p1: Point, p2: Point, p3: Point) -> CubicBezierSegment<f64> {
    CubicBezierSegment {
        from: point(p1.x, p1.y),
        ctrl1: point(p1.x + (p2.x - p0.x) / 6.0, p1.y + (p2.y - p0.y) / 6.0),
        ctrl2: point(p2.x - (p3.x - p1.x) / 6.0, p2.y - (p3.y - p1.y) / 6.0),
        to: point(p2.x, p2.y),
    }
}

/// Polyline through `from`, `control` and `to`, starting exactly at `from`
/// and ending exactly at `to`.
pub fn strand_points(from: Point, control: Point, to: Point, tolerance: f64) -> Vec<Point> {
    let spans = [
        catmull_rom_span(from, from, control, to),
        catmull_rom_span(from, control, to, to),
    ];

    let mut points = vec![from];
    for span in &spans {
        span.for_each_flattened(tolerance, &mut |segment| {
            points.push(Point::new(segment.to.x, segment.to.y));
        });
    }

    // Degenerate spans (coincident endpoints) flatten to zero-length pieces
    points.dedup();
    points
}

/// Draw one connection as layered glowing strokes.
pub fn draw_strand<N: CoherentNoise + ?Sized>(
    canvas: &mut dyn Canvas,
    from: Point,
    to: Point,
    conn: &Connection,
    noise: &N,
    config: &StrandConfig,
) {
    let control = control_point(from, to, conn, noise, config.jitter);
    let path = strand_points(from, control, to, config.tolerance);

    canvas.no_fill();
    for (color, width) in config.layer_strokes() {
        canvas.stroke(color);
        canvas.stroke_weight(width);
        canvas.shape(&path, false);
    }
    canvas.no_stroke();
}
