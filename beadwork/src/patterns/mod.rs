//! Internal motifs drawn at the center of each medallion.
//!
//! Each motif draws around the local origin; the caller has already
//! translated to the medallion center and applied the core rotation.

mod concentric;
mod rosette;
mod zigzag;

pub use concentric::{concentric_diameters, draw_concentric};
pub use rosette::{draw_rosette, rosette_points};
pub use zigzag::{draw_zigzag, zigzag_rings};

use crate::canvas::Canvas;
use crate::color::Color;
use crate::geometry::Point;
use crate::palette::Palette;

/// Diameter of the plain motif's disc.
const PLAIN_DIAMETER: f64 = 30.0;

/// Available motif types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Motif {
    Concentric,
    Zigzag,
    Rosette,
    Plain,
}

impl Motif {
    /// Get all available motifs.
    pub fn all() -> &'static [Motif] {
        &[Motif::Concentric, Motif::Zigzag, Motif::Rosette, Motif::Plain]
    }

    /// Get motif name as string.
    pub fn name(&self) -> &'static str {
        match self {
            Motif::Concentric => "concentric",
            Motif::Zigzag => "zigzag",
            Motif::Rosette => "rosette",
            Motif::Plain => "plain",
        }
    }

    /// Parse motif from string.
    pub fn from_name(name: &str) -> Option<Motif> {
        match name.to_lowercase().as_str() {
            "concentric" | "concentric circles" | "rings" => Some(Motif::Concentric),
            "zigzag" | "zigzag lines" => Some(Motif::Zigzag),
            "rosette" | "beads" => Some(Motif::Rosette),
            "plain" | "default" => Some(Motif::Plain),
            _ => None,
        }
    }

    /// Brief description for listings.
    pub fn description(&self) -> &'static str {
        match self {
            Motif::Concentric => "alternating two-tone rings",
            Motif::Zigzag => "three closed zigzag rings",
            Motif::Rosette => "two layers of white dots",
            Motif::Plain => "translucent white disc",
        }
    }

    /// Draw this motif around the origin.
    ///
    /// `dot_size` is the medallion's dot diameter; every motif scales off it.
    pub fn draw(&self, canvas: &mut dyn Canvas, palette: &Palette, dot_size: f64) {
        match self {
            Motif::Concentric => draw_concentric(canvas, palette, dot_size),
            Motif::Zigzag => draw_zigzag(canvas, dot_size),
            Motif::Rosette => draw_rosette(canvas, dot_size),
            Motif::Plain => {
                canvas.fill(Color::WHITE.with_alpha(150));
                canvas.circle(Point::ORIGIN, PLAIN_DIAMETER);
            }
        }
    }
}
