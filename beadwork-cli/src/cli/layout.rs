//! `beadwork layout` - dump one layout epoch as JSON.

use anyhow::Context as _;
use clap::Parser;
use serde::Serialize;

use beadwork::{Connection, Layout, RandomSource, Scene, degrees};

use super::common::{TuningArgs, check_canvas, make_rng};

#[derive(Parser, Debug)]
pub struct LayoutArgs {
    /// Canvas width.
    #[arg(long, default_value_t = 1280.0)]
    pub width: f64,

    /// Canvas height.
    #[arg(long, default_value_t = 720.0)]
    pub height: f64,

    /// Random seed (OS entropy when omitted).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pretty-print the JSON.
    #[arg(long)]
    pub pretty: bool,

    #[command(flatten)]
    pub tuning: TuningArgs,
}

#[derive(Debug, Serialize)]
pub struct MedallionInfo {
    pub x: f64,
    pub y: f64,
    pub palette: &'static str,
    pub motif: &'static str,
}

#[derive(Debug, Serialize)]
pub struct BeadInfo {
    pub index: usize,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Serialize)]
pub struct ConnectionInfo {
    pub a: usize,
    pub b: usize,
    pub distance: f64,
}

#[derive(Debug, Serialize)]
pub struct LayoutStats {
    pub grid_cells: usize,
    pub rejected_cells: usize,
    pub bead_attempts: usize,
    /// `degree_histogram[d]` = number of beads with exactly `d` connections
    pub degree_histogram: Vec<usize>,
}

#[derive(Debug, Serialize)]
pub struct LayoutReport {
    pub seed: u64,
    pub width: f64,
    pub height: f64,
    pub medallions: Vec<MedallionInfo>,
    pub beads: Vec<BeadInfo>,
    pub connections: Vec<ConnectionInfo>,
    pub stats: LayoutStats,
}

fn degree_histogram(connections: &[Connection], bead_count: usize) -> Vec<usize> {
    let deg = degrees(connections, bead_count);
    let top = deg.iter().copied().max().unwrap_or(0);
    let mut histogram = vec![0; top + 1];
    for d in deg {
        histogram[d] += 1;
    }
    histogram
}

impl LayoutReport {
    pub fn from_parts(seed: u64, layout: &Layout, connections: &[Connection]) -> Self {
        Self {
            seed,
            width: layout.width,
            height: layout.height,
            medallions: layout
                .medallions
                .iter()
                .map(|m| MedallionInfo {
                    x: m.center.x,
                    y: m.center.y,
                    palette: m.palette.name,
                    motif: m.motif.name(),
                })
                .collect(),
            beads: layout
                .beads
                .iter()
                .map(|b| BeadInfo {
                    index: b.index,
                    x: b.position.x,
                    y: b.position.y,
                })
                .collect(),
            connections: connections
                .iter()
                .map(|c| ConnectionInfo {
                    a: c.a,
                    b: c.b,
                    distance: c.distance,
                })
                .collect(),
            stats: LayoutStats {
                grid_cells: layout.stats.grid_cells,
                rejected_cells: layout.stats.rejected_cells,
                bead_attempts: layout.stats.bead_attempts,
                degree_histogram: degree_histogram(connections, layout.beads.len()),
            },
        }
    }

    fn from_scene<R: RandomSource>(seed: u64, scene: &Scene<R>) -> Self {
        Self::from_parts(seed, scene.layout(), scene.connections())
    }
}

pub fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    check_canvas(args.width, args.height)?;
    let config = args.tuning.scene_config()?;

    let (rng, seed) = make_rng(args.seed);
    let scene = Scene::with_config(args.width, args.height, rng, config);
    let report = LayoutReport::from_scene(seed, &scene);

    let json = if args.pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    }
    .context("serialize layout")?;

    println!("{}", json);
    Ok(())
}
