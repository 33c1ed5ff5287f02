//! SVG output backend.
//!
//! [`SvgCanvas`] implements [`Canvas`] by writing SVG elements into a
//! string, the same way the CLI's exporters build documents: plain
//! `format!` calls, two-decimal coordinates, no DOM.
//!
//! Transforms map onto nested `<g transform="...">` groups. Each
//! `translate` or `rotate` opens one group; `pop` closes every group opened
//! since the matching `push`. That keeps the document well-formed no matter
//! how the drawing code interleaves its calls.

use std::fmt::Write as _;

use tracing::warn;

use crate::canvas::Canvas;
use crate::color::Color;
use crate::geometry::Point;

/// Fill and stroke state saved by `push`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Style {
    fill: Option<Color>,
    stroke: Option<Color>,
    stroke_width: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fill: Some(Color::WHITE),
            stroke: Some(Color::BLACK),
            stroke_width: 1.0,
        }
    }
}

impl Style {
    /// Presentation attributes for a shape element, leading space included.
    fn attributes(&self) -> String {
        let mut attrs = String::new();
        match self.fill {
            Some(color) => {
                let _ = write!(attrs, " fill=\"{}\"", color.to_hex());
                if !color.is_opaque() {
                    let _ = write!(attrs, " fill-opacity=\"{:.3}\"", color.opacity());
                }
            }
            None => attrs.push_str(" fill=\"none\""),
        }
        if let Some(color) = self.stroke {
            let _ = write!(
                attrs,
                " stroke=\"{}\" stroke-width=\"{:.2}\"",
                color.to_hex(),
                self.stroke_width
            );
            if !color.is_opaque() {
                let _ = write!(attrs, " stroke-opacity=\"{:.3}\"", color.opacity());
            }
        }
        attrs
    }
}

/// A canvas that renders to an SVG document.
#[derive(Debug, Clone)]
pub struct SvgCanvas {
    width: f64,
    height: f64,
    body: String,
    style: Style,
    /// Saved style plus the group depth at each `push`
    saved: Vec<(Style, usize)>,
    open_groups: usize,
}

impl SvgCanvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            body: String::new(),
            style: Style::default(),
            saved: Vec::new(),
            open_groups: 0,
        }
    }

    fn indent(&mut self) {
        for _ in 0..=self.open_groups {
            self.body.push_str("  ");
        }
    }

    fn open_group(&mut self, transform: String) {
        self.indent();
        let _ = writeln!(self.body, "<g transform=\"{}\">", transform);
        self.open_groups += 1;
    }

    fn close_groups_to(&mut self, depth: usize) {
        while self.open_groups > depth {
            self.open_groups -= 1;
            self.indent();
            self.body.push_str("</g>\n");
        }
    }

    /// Close any dangling groups and return the finished document.
    pub fn finish(mut self) -> String {
        if !self.saved.is_empty() {
            warn!(unmatched = self.saved.len(), "push without pop at end of frame");
        }
        self.close_groups_to(0);

        let mut svg = String::new();
        svg.push_str(&format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">
"#,
            w = self.width,
            h = self.height
        ));
        svg.push_str(&self.body);
        svg.push_str("</svg>\n");
        svg
    }
}

fn points_attr(vertices: &[Point]) -> String {
    vertices
        .iter()
        .map(|p| format!("{:.2},{:.2}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

impl Canvas for SvgCanvas {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn background(&mut self, color: Color) {
        self.indent();
        let _ = write!(
            self.body,
            "<rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"{}\"",
            self.width,
            self.height,
            color.to_hex()
        );
        if !color.is_opaque() {
            let _ = write!(self.body, " fill-opacity=\"{:.3}\"", color.opacity());
        }
        self.body.push_str("/>\n");
    }

    fn fill(&mut self, color: Color) {
        self.style.fill = Some(color);
    }

    fn no_fill(&mut self) {
        self.style.fill = None;
    }

    fn stroke(&mut self, color: Color) {
        self.style.stroke = Some(color);
    }

    fn no_stroke(&mut self) {
        self.style.stroke = None;
    }

    fn stroke_weight(&mut self, weight: f64) {
        self.style.stroke_width = weight;
    }

    fn circle(&mut self, center: Point, diameter: f64) {
        let attrs = self.style.attributes();
        self.indent();
        let _ = writeln!(
            self.body,
            "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\"{}/>",
            center.x,
            center.y,
            diameter / 2.0,
            attrs
        );
    }

    fn shape(&mut self, vertices: &[Point], closed: bool) {
        if vertices.len() < 2 {
            return;
        }
        let tag = if closed { "polygon" } else { "polyline" };
        let attrs = self.style.attributes();
        let points = points_attr(vertices);
        self.indent();
        let _ = writeln!(self.body, "<{} points=\"{}\"{}/>", tag, points, attrs);
    }

    fn push(&mut self) {
        self.saved.push((self.style, self.open_groups));
    }

    fn pop(&mut self) {
        match self.saved.pop() {
            Some((style, depth)) => {
                self.close_groups_to(depth);
                self.style = style;
            }
            None => warn!("pop without matching push ignored"),
        }
    }

    fn translate(&mut self, offset: Point) {
        self.open_group(format!("translate({:.2} {:.2})", offset.x, offset.y));
    }

    fn rotate(&mut self, radians: f64) {
        self.open_group(format!("rotate({:.3})", radians.to_degrees()));
    }
}
