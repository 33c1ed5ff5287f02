//! `beadwork render` - play the scene and write every frame to disk.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::{debug, info, warn};

use beadwork::{Color, RandomSource, Scene, SceneConfig, StrandConfig, SvgCanvas, degrees};

use super::common::{
    ResizeEvent, TuningArgs, check_canvas, make_rng, parse_color, parse_resize,
};
use super::export::render_png;

/// Which files to write per frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Svg,
    Png,
    Both,
}

impl OutputFormat {
    fn writes_svg(self) -> bool {
        matches!(self, OutputFormat::Svg | OutputFormat::Both)
    }

    fn writes_png(self) -> bool {
        matches!(self, OutputFormat::Png | OutputFormat::Both)
    }
}

#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Canvas width.
    #[arg(long, default_value_t = 1280.0)]
    pub width: f64,

    /// Canvas height.
    #[arg(long, default_value_t = 720.0)]
    pub height: f64,

    /// Number of frames to render.
    #[arg(long, default_value_t = 120)]
    pub frames: u32,

    /// Frames per second; frame i is rendered at i * 1000 / fps ms.
    #[arg(long, default_value_t = 30.0)]
    pub fps: f64,

    /// Random seed (OS entropy when omitted).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output directory.
    #[arg(long, default_value = "frames")]
    pub out: PathBuf,

    /// Files written per frame.
    #[arg(long, value_enum, default_value_t = OutputFormat::Png)]
    pub format: OutputFormat,

    /// PNG scale factor.
    #[arg(long, default_value_t = 1.0)]
    pub scale: f64,

    /// Resize the canvas before a frame, as FRAME:WxH. Repeatable.
    #[arg(long = "resize", value_parser = parse_resize)]
    pub resizes: Vec<ResizeEvent>,

    #[command(flatten)]
    pub tuning: TuningArgs,

    #[command(flatten)]
    pub style: StyleArgs,
}

/// Look of the strands and canvas.
#[derive(clap::Args, Debug, Clone)]
pub struct StyleArgs {
    /// Canvas clear color, as #rrggbb or #rrggbbaa.
    #[arg(long, value_parser = parse_color)]
    pub background: Option<Color>,

    /// Stroke passes per strand.
    #[arg(long, default_value_t = 4)]
    pub glow_layers: usize,

    /// Max per-axis bend of a strand's control point.
    #[arg(long, default_value_t = 15.0)]
    pub strand_bend: f64,

    /// Curve flattening tolerance in canvas units.
    #[arg(long, default_value_t = 0.25)]
    pub curve_tolerance: f64,
}

const MAX_GLOW_LAYERS: usize = 16;
const MIN_CURVE_TOLERANCE: f64 = 0.01;

impl StyleArgs {
    /// Fold the style flags into `config`.
    pub fn apply(&self, config: SceneConfig) -> anyhow::Result<SceneConfig> {
        anyhow::ensure!(
            self.glow_layers <= MAX_GLOW_LAYERS,
            "--glow-layers must be at most {}, got {}",
            MAX_GLOW_LAYERS,
            self.glow_layers
        );
        anyhow::ensure!(
            self.strand_bend >= 0.0 && self.strand_bend.is_finite(),
            "--strand-bend must not be negative, got {}",
            self.strand_bend
        );
        anyhow::ensure!(
            self.curve_tolerance >= MIN_CURVE_TOLERANCE && self.curve_tolerance.is_finite(),
            "--curve-tolerance must be at least {}, got {}",
            MIN_CURVE_TOLERANCE,
            self.curve_tolerance
        );

        let strand = StrandConfig::default()
            .with_layers(self.glow_layers)
            .with_jitter(self.strand_bend)
            .with_tolerance(self.curve_tolerance);
        let config = config.with_strand(strand);
        Ok(match self.background {
            Some(color) => config.with_background(color),
            None => config,
        })
    }
}

/// One layout epoch as recorded in the manifest.
#[derive(Debug, Serialize)]
pub struct EpochRecord {
    pub epoch: u64,
    pub first_frame: u32,
    pub width: f64,
    pub height: f64,
    pub medallions: usize,
    pub beads: usize,
    pub connections: usize,
    pub max_degree: usize,
}

impl EpochRecord {
    fn capture<R: RandomSource>(scene: &Scene<R>, first_frame: u32) -> Self {
        let (width, height) = scene.size();
        let layout = scene.layout();
        let max_degree = degrees(scene.connections(), layout.beads.len())
            .into_iter()
            .max()
            .unwrap_or(0);
        Self {
            epoch: scene.epoch(),
            first_frame,
            width,
            height,
            medallions: layout.medallions.len(),
            beads: layout.beads.len(),
            connections: scene.connections().len(),
            max_degree,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Manifest {
    pub seed: u64,
    pub frames: u32,
    pub fps: f64,
    pub format: OutputFormat,
    pub scale: f64,
    pub epochs: Vec<EpochRecord>,
    pub generated_at: String,
}

fn frame_path(dir: &Path, frame: u32, ext: &str) -> PathBuf {
    dir.join(format!("frame_{:05}.{}", frame, ext))
}

pub fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.fps > 0.0, "--fps must be positive, got {}", args.fps);
    anyhow::ensure!(args.scale > 0.0, "--scale must be positive, got {}", args.scale);
    check_canvas(args.width, args.height)?;
    if args.format.writes_png() {
        anyhow::ensure!(
            args.width > 0.0 && args.height > 0.0,
            "--width and --height must be positive for PNG output, got {}x{}",
            args.width,
            args.height
        );
    }
    let config = args.style.apply(args.tuning.scene_config()?)?;

    fs::create_dir_all(&args.out)
        .with_context(|| format!("create output dir '{}'", args.out.display()))?;

    let (rng, seed) = make_rng(args.seed);
    info!(seed, width = args.width, height = args.height, "laying out scene");
    let mut scene = Scene::with_config(args.width, args.height, rng, config);
    let mut epochs = vec![EpochRecord::capture(&scene, 0)];

    let mut resizes = args.resizes.clone();
    resizes.sort_by_key(|r| r.frame);
    for late in resizes.iter().filter(|r| r.frame >= args.frames) {
        warn!(frame = late.frame, frames = args.frames, "resize after last frame ignored");
    }
    let mut pending = resizes.into_iter().filter(|r| r.frame < args.frames).peekable();

    for frame in 0..args.frames {
        while let Some(event) = pending.next_if(|r| r.frame == frame) {
            scene.resize(event.width, event.height);
            epochs.push(EpochRecord::capture(&scene, frame));
        }

        let elapsed_ms = frame as f64 * 1000.0 / args.fps;
        let (width, height) = scene.size();
        let mut canvas = SvgCanvas::new(width, height);
        scene.render(elapsed_ms, &mut canvas);
        let svg = canvas.finish();

        if args.format.writes_svg() {
            let path = frame_path(&args.out, frame, "svg");
            fs::write(&path, &svg).with_context(|| format!("write '{}'", path.display()))?;
        }
        if args.format.writes_png() {
            let path = frame_path(&args.out, frame, "png");
            let (pw, ph) = render_png(&svg, &path, args.scale, width, height)
                .with_context(|| format!("rasterize frame {}", frame))?;
            debug!(frame, width = pw, height = ph, "wrote png");
        }

        if (frame + 1) % 30 == 0 || frame + 1 == args.frames {
            info!(frame = frame + 1, total = args.frames, "rendered");
        }
    }

    let manifest = Manifest {
        seed,
        frames: args.frames,
        fps: args.fps,
        format: args.format,
        scale: args.scale,
        epochs,
        generated_at: chrono::Local::now().to_rfc3339(),
    };
    let manifest_path = args.out.join("manifest.json");
    let json = serde_json::to_string_pretty(&manifest).context("serialize manifest")?;
    fs::write(&manifest_path, json)
        .with_context(|| format!("write '{}'", manifest_path.display()))?;

    info!(frames = args.frames, out = %args.out.display(), seed, "render complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_names_are_zero_padded() {
        let p = frame_path(Path::new("out"), 7, "png");
        assert_eq!(p, Path::new("out").join("frame_00007.png"));
    }

    #[test]
    fn format_selection() {
        assert!(OutputFormat::Both.writes_svg() && OutputFormat::Both.writes_png());
        assert!(!OutputFormat::Svg.writes_png());
        assert!(!OutputFormat::Png.writes_svg());
    }

    fn style(glow_layers: usize, curve_tolerance: f64) -> StyleArgs {
        StyleArgs {
            background: Some(Color::hex(0x102030)),
            glow_layers,
            strand_bend: 8.0,
            curve_tolerance,
        }
    }

    #[test]
    fn style_flows_into_scene_config() {
        let config = style(2, 0.5).apply(SceneConfig::default()).unwrap();
        assert_eq!(config.strand.layers, 2);
        assert_eq!(config.strand.jitter, 8.0);
        assert_eq!(config.strand.tolerance, 0.5);
        assert_eq!(config.background, Color::hex(0x102030));

        let unset = StyleArgs { background: None, ..style(4, 0.25) };
        let config = unset.apply(SceneConfig::default()).unwrap();
        assert_eq!(config.background, SceneConfig::default().background);
    }

    #[test]
    fn style_rejects_degenerate_strokes() {
        assert!(style(MAX_GLOW_LAYERS + 1, 0.25).apply(SceneConfig::default()).is_err());
        let err = style(4, 0.0).apply(SceneConfig::default()).unwrap_err();
        assert!(err.to_string().contains("--curve-tolerance"));
    }

    #[test]
    fn epoch_record_matches_scene() {
        let scene = Scene::new(800.0, 600.0, beadwork::Rng::new(4));
        let record = EpochRecord::capture(&scene, 0);
        assert_eq!(record.beads, scene.layout().beads.len());
        assert_eq!(record.connections, scene.connections().len());
        assert!(record.max_degree <= 3);
    }
}
