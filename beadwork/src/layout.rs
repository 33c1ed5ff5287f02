//! Placement engine - where medallions and beads go.
//!
//! Layout runs once per epoch (startup and every resize) and never touches
//! positions again afterwards.
//!
//! ## Algorithm
//!
//! 1. **Medallions**: one candidate per grid cell, jittered, dropped if it
//!    would overlap an earlier medallion. No retries.
//! 2. **Beads**: bounded rejection sampling. A point must clear every
//!    medallion and every bead, and (after the first) sit near an existing
//!    bead, so beads grow as one connected blob instead of scattering.
//!
//! Both steps are soft: a crowded canvas just yields fewer entities.

use tracing::debug;

use crate::bead::Bead;
use crate::geometry::Point;
use crate::medallion::{self, Medallion};
use crate::palette::Palette;
use crate::rng::RandomSource;

/// Tunables for the placement engine.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Grid cell size for medallion candidates
    pub grid_pitch: f64,
    /// Max per-axis offset from the cell center
    pub jitter: f64,
    /// Radius given to every medallion
    pub medallion_radius: f64,
    /// Extra space between two medallion rims
    pub medallion_gap: f64,
    /// Extra space between a bead and a medallion rim
    pub bead_clearance: f64,
    /// Hard minimum distance between two beads
    pub bead_min_spacing: f64,
    /// A new bead must land this close to an existing one
    pub bead_link_radius: f64,
    /// Sampling budget for bead placement
    pub max_attempts: usize,
    /// Stop sampling once this many beads are placed
    pub target_beads: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            grid_pitch: 150.0,
            jitter: 15.0,
            medallion_radius: medallion::RADIUS,
            medallion_gap: 10.0,
            bead_clearance: 20.0,
            bead_min_spacing: 35.0,
            bead_link_radius: 120.0,
            max_attempts: 2000,
            target_beads: 400,
        }
    }
}

impl LayoutConfig {
    pub fn with_grid_pitch(mut self, pitch: f64) -> Self {
        self.grid_pitch = pitch;
        self
    }

    pub fn with_jitter(mut self, jitter: f64) -> Self {
        self.jitter = jitter;
        self
    }

    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts;
        self
    }

    pub fn with_target_beads(mut self, target: usize) -> Self {
        self.target_beads = target;
        self
    }
}

/// Counters from one placement run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlacementStats {
    /// Candidate grid cells considered
    pub grid_cells: usize,
    /// Cells whose medallion overlapped an earlier one
    pub rejected_cells: usize,
    /// Bead samples drawn
    pub bead_attempts: usize,
}

/// Result of bead sampling.
#[derive(Debug, Clone, Default)]
pub struct BeadScatter {
    pub beads: Vec<Bead>,
    pub attempts: usize,
}

/// Everything placed in one layout epoch.
///
/// Owns the medallions and beads; the rest of the crate refers to beads
/// by their index in `beads`.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
    pub medallions: Vec<Medallion>,
    pub beads: Vec<Bead>,
    pub stats: PlacementStats,
}

impl Layout {
    /// Run both placement passes for a `width` x `height` canvas.
    pub fn generate<R: RandomSource + ?Sized>(
        width: f64,
        height: f64,
        config: &LayoutConfig,
        rng: &mut R,
    ) -> Self {
        let cells = grid_cells(width, height, config.grid_pitch);
        let medallions = place_medallions(&cells, config, rng);
        let rejected_cells = cells.len() - medallions.len();
        let scatter = scatter_beads(width, height, &medallions, config, rng);

        debug!(
            width,
            height,
            medallions = medallions.len(),
            rejected_cells,
            beads = scatter.beads.len(),
            attempts = scatter.attempts,
            "layout generated"
        );

        Self {
            width,
            height,
            medallions,
            beads: scatter.beads,
            stats: PlacementStats {
                grid_cells: cells.len(),
                rejected_cells,
                bead_attempts: scatter.attempts,
            },
        }
    }

    /// Bead centers in index order.
    pub fn bead_positions(&self) -> Vec<Point> {
        self.beads.iter().map(|b| b.position).collect()
    }
}

/// Number of whole grid cells that fit along an axis.
///
/// Zero for non-positive or non-finite inputs, so callers never divide by
/// a zero pitch. Never more than [`MAX_CELLS_PER_AXIS`].
fn cells_along(extent: f64, pitch: f64) -> usize {
    if !(pitch > 0.0) || !pitch.is_finite() || !(extent > 0.0) || !extent.is_finite() {
        return 0;
    }
    let count = (extent / pitch).floor();
    if count >= MAX_CELLS_PER_AXIS as f64 {
        MAX_CELLS_PER_AXIS
    } else {
        count as usize
    }
}

/// Upper bound on grid cells per axis.
///
/// Medallion placement checks every candidate against every accepted
/// medallion, so the grid is capped; cells past the cap (beyond 9600 units
/// at the default pitch) are not considered.
pub const MAX_CELLS_PER_AXIS: usize = 64;

/// Candidate medallion centers: the center of every grid cell that fits
/// entirely inside the canvas, column by column.
pub fn grid_cells(width: f64, height: f64, pitch: f64) -> Vec<Point> {
    let cols = cells_along(width, pitch);
    let rows = cells_along(height, pitch);
    let half = pitch / 2.0;

    let mut cells = Vec::with_capacity(cols * rows);
    for col in 0..cols {
        for row in 0..rows {
            cells.push(Point::new(half + col as f64 * pitch, half + row as f64 * pitch));
        }
    }
    cells
}

/// Jitter each cell center, give it a random palette, and keep it only if it
/// clears every medallion accepted so far.
pub fn place_medallions<R: RandomSource + ?Sized>(
    cells: &[Point],
    config: &LayoutConfig,
    rng: &mut R,
) -> Vec<Medallion> {
    let mut placed: Vec<Medallion> = Vec::new();
    let palettes = Palette::all();

    for cell in cells {
        let center = cell.offset(
            rng.range(-config.jitter, config.jitter),
            rng.range(-config.jitter, config.jitter),
        );
        let palette = &palettes[rng.index(palettes.len())];
        let mut candidate = Medallion::new(center, palette);
        candidate.radius = config.medallion_radius;

        if placed.iter().any(|other| candidate.overlaps(other, config.medallion_gap)) {
            continue;
        }
        placed.push(candidate);
    }

    placed
}

/// Why a bead sample was turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeadRejection {
    /// Inside a medallion's clearance zone
    NearMedallion,
    /// Closer than the minimum spacing to another bead
    Crowded,
    /// No existing bead within the link radius
    Isolated,
}

/// Check a candidate bead position against the current layout.
pub fn check_bead_site(
    site: Point,
    medallions: &[Medallion],
    beads: &[Bead],
    config: &LayoutConfig,
) -> Result<(), BeadRejection> {
    if medallions
        .iter()
        .any(|m| site.distance(m.center) < m.radius + config.bead_clearance)
    {
        return Err(BeadRejection::NearMedallion);
    }

    let mut linked = false;
    for bead in beads {
        let d = site.distance(bead.position);
        if d < config.bead_min_spacing {
            return Err(BeadRejection::Crowded);
        }
        if d < config.bead_link_radius {
            linked = true;
        }
    }

    if beads.is_empty() || linked {
        Ok(())
    } else {
        Err(BeadRejection::Isolated)
    }
}

/// Rejection-sample bead positions until the target count or the attempt
/// budget runs out, whichever comes first.
pub fn scatter_beads<R: RandomSource + ?Sized>(
    width: f64,
    height: f64,
    medallions: &[Medallion],
    config: &LayoutConfig,
    rng: &mut R,
) -> BeadScatter {
    let mut scatter = BeadScatter::default();
    if !(width > 0.0) || !(height > 0.0) {
        return scatter;
    }

    while scatter.beads.len() < config.target_beads && scatter.attempts < config.max_attempts {
        let site = Point::new(rng.range(0.0, width), rng.range(0.0, height));
        scatter.attempts += 1;

        if check_bead_site(site, medallions, &scatter.beads, config).is_ok() {
            let index = scatter.beads.len();
            scatter.beads.push(Bead::new(site, index));
        }
    }

    scatter
}
