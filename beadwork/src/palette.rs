//! Fixed color palettes.
//!
//! Every medallion is assigned one palette at creation and keeps it for the
//! whole layout epoch. Only the *current* background and motif change over
//! time; the palette record itself is immutable.

use crate::color::Color;
use crate::patterns::Motif;

/// Canvas clear color.
pub const CANVAS_BACKGROUND: Color = Color::hex(0x086487);

/// Backgrounds a medallion cycles through on its color timer.
pub const BACKGROUND_CYCLE: [Color; 7] = [
    Color::hex(0xcdf5e1),
    Color::hex(0xfef3f3),
    Color::hex(0xf7edd9),
    Color::hex(0xf4b628),
    Color::hex(0xb6eff1),
    Color::hex(0xcfe3f5),
    Color::hex(0xfdc038),
];

/// Bead glow and connection stroke.
pub const EMBER: Color = Color::hex(0xf47b23);

/// Bead body color before its reveal.
pub const BEAD_NEUTRAL: Color = Color::BLACK;

/// Colors a bead may light up with.
pub const BEAD_ACCENTS: [Color; 6] = [
    EMBER,
    Color::hex(0xfb586a),
    Color::hex(0xfdc038),
    Color::hex(0xb6eff1),
    Color::hex(0xd5499b),
    Color::hex(0xcdf5e1),
];

/// A fixed color/motif configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    /// Initial medallion background
    pub background: Color,
    /// Dotted ring color
    pub dots: Color,
    /// Center disc color
    pub core: Color,
    /// Motif shown until the first motif swap
    pub motif: Motif,
}

/// All palettes, in selection order.
pub const PALETTES: [Palette; 7] = [
    Palette {
        name: "green",
        background: Color::hex(0xcdf5e1),
        dots: Color::hex(0x2ba441),
        core: Color::hex(0xfb586a),
        motif: Motif::Concentric,
    },
    Palette {
        name: "red",
        background: Color::hex(0xfef3f3),
        dots: Color::hex(0xd03c49),
        core: Color::hex(0xfa6776),
        motif: Motif::Zigzag,
    },
    Palette {
        name: "orange",
        background: Color::hex(0xf7edd9),
        dots: Color::hex(0xfc8c27),
        core: Color::hex(0xbac37e),
        motif: Motif::Concentric,
    },
    Palette {
        name: "blue-yellow",
        background: Color::hex(0xf4b628),
        dots: Color::hex(0x115799),
        core: Color::hex(0xd5499b),
        motif: Motif::Rosette,
    },
    Palette {
        name: "cyan",
        background: Color::hex(0xb6eff1),
        dots: Color::hex(0x119995),
        core: Color::hex(0xca3daf),
        motif: Motif::Concentric,
    },
    Palette {
        name: "purple",
        background: Color::hex(0xcfe3f5),
        dots: Color::hex(0x231c80),
        core: Color::hex(0xb03f8e),
        motif: Motif::Concentric,
    },
    Palette {
        name: "gold",
        background: Color::hex(0xfdc038),
        dots: Color::hex(0xd5236f),
        core: Color::hex(0xf165cc),
        motif: Motif::Concentric,
    },
];

impl Palette {
    /// Get all palettes.
    pub fn all() -> &'static [Palette] {
        &PALETTES
    }

    /// Look up a palette by name (case-insensitive).
    pub fn from_name(name: &str) -> Option<&'static Palette> {
        PALETTES.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// (outer, inner) ring colors for the concentric motif.
    ///
    /// Only green, purple and cyan define their own pair; the rest borrow
    /// green's.
    pub fn ring_colors(&self) -> (Color, Color) {
        match self.name {
            "purple" => (Color::hex(0xe4462b), Color::hex(0x305b53)),
            "cyan" => (Color::hex(0xc74cab), Color::hex(0x1b9692)),
            _ => (Color::hex(0xe4462b), Color::hex(0xd443a5)),
        }
    }
}
