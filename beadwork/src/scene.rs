//! The animated scene: layout, cached connections and the frame loop.
//!
//! A [`Scene`] is what a host drives. It is built once for a canvas size,
//! then asked to render frame after frame with the elapsed time. Resizing
//! throws everything away and lays the canvas out again.
//!
//! ## Rust Lesson #14: Default Type Parameters
//!
//! `Scene<R, N = ValueNoise>` lets most callers write `Scene<StdRng>` and
//! forget the noise type exists, while tests can still plug in a closure:
//! `Scene<Rng, fn(f64, f64) -> f64>`. The default only fills in the blank;
//! it never restricts what else can go there.

use tracing::{debug, info};

use crate::canvas::Canvas;
use crate::color::Color;
use crate::graph::{Connection, GraphConfig, build_connections_with};
use crate::layout::{Layout, LayoutConfig};
use crate::noise::{CoherentNoise, ValueNoise};
use crate::palette::CANVAS_BACKGROUND;
use crate::rng::RandomSource;
use crate::strand::{StrandConfig, draw_strand};

/// Everything tunable about a scene.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub layout: LayoutConfig,
    pub graph: GraphConfig,
    pub strand: StrandConfig,
    /// Color the canvas is cleared to every frame
    pub background: Color,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            graph: GraphConfig::default(),
            strand: StrandConfig::default(),
            background: CANVAS_BACKGROUND,
        }
    }
}

impl SceneConfig {
    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_graph(mut self, graph: GraphConfig) -> Self {
        self.graph = graph;
        self
    }

    pub fn with_strand(mut self, strand: StrandConfig) -> Self {
        self.strand = strand;
        self
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }
}

/// A laid-out, animating canvas.
pub struct Scene<R: RandomSource, N: CoherentNoise = ValueNoise> {
    config: SceneConfig,
    rng: R,
    noise: N,
    layout: Layout,
    /// Built once per layout epoch; bead positions never move within one
    connections: Vec<Connection>,
    epoch: u64,
}

impl<R: RandomSource> Scene<R, ValueNoise> {
    /// Lay out a `width` x `height` canvas with default settings.
    pub fn new(width: f64, height: f64, rng: R) -> Self {
        Self::with_config(width, height, rng, SceneConfig::default())
    }

    /// Lay out a canvas, seeding the strand noise from `rng`.
    pub fn with_config(width: f64, height: f64, mut rng: R, config: SceneConfig) -> Self {
        let noise = ValueNoise::new(&mut rng);
        Self::with_noise(width, height, rng, noise, config)
    }
}

impl<R: RandomSource, N: CoherentNoise> Scene<R, N> {
    /// Lay out a canvas with a caller-supplied noise field.
    pub fn with_noise(width: f64, height: f64, mut rng: R, noise: N, config: SceneConfig) -> Self {
        let layout = Layout::generate(width, height, &config.layout, &mut rng);
        let connections = build_connections_with(&layout.bead_positions(), &config.graph);
        debug!(
            medallions = layout.medallions.len(),
            beads = layout.beads.len(),
            connections = connections.len(),
            "scene ready"
        );

        Self {
            config,
            rng,
            noise,
            layout,
            connections,
            epoch: 0,
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Cached connection graph for the current epoch.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Number of re-layouts since creation.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn size(&self) -> (f64, f64) {
        (self.layout.width, self.layout.height)
    }

    /// Draw one frame at `elapsed_ms` since the scene started.
    ///
    /// Order is fixed: background, medallions, connections, beads. Each
    /// entity advances its own animation state as it is drawn.
    pub fn render(&mut self, elapsed_ms: f64, canvas: &mut dyn Canvas) {
        canvas.background(self.config.background);

        for medallion in &mut self.layout.medallions {
            medallion.update(elapsed_ms, &mut self.rng);
            medallion.draw(canvas);
        }

        for conn in &self.connections {
            let from = self.layout.beads[conn.a].position;
            let to = self.layout.beads[conn.b].position;
            draw_strand(canvas, from, to, conn, &self.noise, &self.config.strand);
        }

        for bead in &mut self.layout.beads {
            bead.update(elapsed_ms, &mut self.rng);
            bead.draw(canvas);
        }
    }

    /// Discard the layout and build a fresh one for the new size.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.layout = Layout::generate(width, height, &self.config.layout, &mut self.rng);
        self.connections =
            build_connections_with(&self.layout.bead_positions(), &self.config.graph);
        self.epoch += 1;

        info!(
            epoch = self.epoch,
            width,
            height,
            medallions = self.layout.medallions.len(),
            beads = self.layout.beads.len(),
            connections = self.connections.len(),
            "canvas resized, layout rebuilt"
        );
    }
}
