//! The renderer adapter seam.
//!
//! Everything in the crate draws through [`Canvas`]: a small immediate-mode
//! surface with a fill/stroke state and a push/pop transform stack. Hosts
//! plug in a real backend ([`crate::svg::SvgCanvas`] ships with the crate);
//! tests use [`Recorder`] to assert on the exact calls.

use crate::color::Color;
use crate::geometry::Point;

/// Primitive drawing operations.
///
/// `push` saves the current transform *and* style; `pop` restores both.
/// Angles are in radians, sizes in canvas units.
pub trait Canvas {
    /// Canvas dimensions as (width, height).
    fn size(&self) -> (f64, f64);

    /// Clear the whole canvas with a solid color.
    fn background(&mut self, color: Color);

    fn fill(&mut self, color: Color);
    fn no_fill(&mut self);
    fn stroke(&mut self, color: Color);
    fn no_stroke(&mut self);
    fn stroke_weight(&mut self, weight: f64);

    /// Circle centered at `center` with the given diameter.
    fn circle(&mut self, center: Point, diameter: f64);

    /// Polyline through `vertices`, closed back to the first one if `closed`.
    fn shape(&mut self, vertices: &[Point], closed: bool);

    fn push(&mut self);
    fn pop(&mut self);
    fn translate(&mut self, offset: Point);
    fn rotate(&mut self, radians: f64);
}

/// One recorded canvas call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Background(Color),
    Fill(Color),
    NoFill,
    Stroke(Color),
    NoStroke,
    StrokeWeight(f64),
    Circle { center: Point, diameter: f64 },
    Shape { vertices: Vec<Point>, closed: bool },
    Push,
    Pop,
    Translate(Point),
    Rotate(f64),
}

/// A canvas that records every call instead of drawing.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    pub width: f64,
    pub height: f64,
    pub calls: Vec<DrawCall>,
}

impl Recorder {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, calls: Vec::new() }
    }

    /// Number of circles drawn.
    pub fn circle_count(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, DrawCall::Circle { .. })).count()
    }

    /// Number of shapes drawn.
    pub fn shape_count(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, DrawCall::Shape { .. })).count()
    }

    /// True when every `Pop` has a matching earlier `Push` and none are left open.
    pub fn is_balanced(&self) -> bool {
        let mut depth: i64 = 0;
        for call in &self.calls {
            match call {
                DrawCall::Push => depth += 1,
                DrawCall::Pop => {
                    depth -= 1;
                    if depth < 0 {
                        return false;
                    }
                }
                _ => {}
            }
        }
        depth == 0
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Canvas for Recorder {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn background(&mut self, color: Color) {
        self.calls.push(DrawCall::Background(color));
    }

    fn fill(&mut self, color: Color) {
        self.calls.push(DrawCall::Fill(color));
    }

    fn no_fill(&mut self) {
        self.calls.push(DrawCall::NoFill);
    }

    fn stroke(&mut self, color: Color) {
        self.calls.push(DrawCall::Stroke(color));
    }

    fn no_stroke(&mut self) {
        self.calls.push(DrawCall::NoStroke);
    }

    fn stroke_weight(&mut self, weight: f64) {
        self.calls.push(DrawCall::StrokeWeight(weight));
    }

    fn circle(&mut self, center: Point, diameter: f64) {
        self.calls.push(DrawCall::Circle { center, diameter });
    }

    fn shape(&mut self, vertices: &[Point], closed: bool) {
        self.calls.push(DrawCall::Shape { vertices: vertices.to_vec(), closed });
    }

    fn push(&mut self) {
        self.calls.push(DrawCall::Push);
    }

    fn pop(&mut self) {
        self.calls.push(DrawCall::Pop);
    }

    fn translate(&mut self, offset: Point) {
        self.calls.push(DrawCall::Translate(offset));
    }

    fn rotate(&mut self, radians: f64) {
        self.calls.push(DrawCall::Rotate(radians));
    }
}
