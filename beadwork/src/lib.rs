//! # beadwork
//!
//! Generative animated canvas: patterned medallions on a jittered grid,
//! pulsing beads scattered between them, and glowing strands joining
//! nearby beads.
//!
//! The pipeline per layout epoch is:
//! 1. [`layout`] places medallions, then scatters beads around them
//! 2. [`graph`] links beads into a degree-bounded proximity graph
//! 3. [`scene`] animates and draws everything through a [`Canvas`]
//!
//! ## Rust Lesson #7: Modules
//!
//! Every file is declared here with `pub mod`, and the types most callers
//! need are re-exported at the crate root. A host can write
//! `use beadwork::{Scene, SvgCanvas};` without knowing the file layout.

pub mod bead;
pub mod canvas;
pub mod color;
pub mod geometry;
pub mod graph;
pub mod layout;
pub mod medallion;
pub mod noise;
pub mod palette;
pub mod patterns;
pub mod rng;
pub mod scene;
pub mod strand;
pub mod svg;

// Re-export common types at crate root for convenience.
pub use bead::Bead;
pub use canvas::{Canvas, DrawCall, Recorder};
pub use color::Color;
pub use geometry::Point;
pub use graph::{Connection, GraphConfig, build_connections, build_connections_with, degrees};
pub use layout::{Layout, LayoutConfig, PlacementStats};
pub use medallion::Medallion;
pub use noise::{CoherentNoise, ValueNoise};
pub use palette::Palette;
pub use patterns::Motif;
pub use rng::{RandomSource, Rng, pick_distinct};
pub use scene::{Scene, SceneConfig};
pub use strand::StrandConfig;
pub use svg::SvgCanvas;
