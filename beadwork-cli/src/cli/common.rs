//! Common utilities shared across CLI commands.

use clap::Args;
use rand::SeedableRng;
use rand::rngs::StdRng;

use beadwork::{Color, GraphConfig, LayoutConfig, SceneConfig};

/// Largest canvas side the CLI accepts.
pub const MAX_CANVAS_EXTENT: f64 = 8192.0;

/// Placement and graph knobs shared by `render` and `layout`.
#[derive(Args, Debug, Clone)]
pub struct TuningArgs {
    /// Grid cell size for medallion candidates.
    #[arg(long, default_value_t = 150.0)]
    pub grid_pitch: f64,

    /// Max per-axis medallion offset from its cell center.
    #[arg(long, default_value_t = 15.0)]
    pub jitter: f64,

    /// Stop placing beads at this count.
    #[arg(long, default_value_t = 400)]
    pub target_beads: usize,

    /// Bead sampling budget.
    #[arg(long, default_value_t = 2000)]
    pub max_attempts: usize,

    /// Max connections per bead.
    #[arg(long, default_value_t = 3)]
    pub max_degree: usize,
}

impl TuningArgs {
    pub fn scene_config(&self) -> anyhow::Result<SceneConfig> {
        anyhow::ensure!(
            self.grid_pitch > 0.0 && self.grid_pitch.is_finite(),
            "--grid-pitch must be positive, got {}",
            self.grid_pitch
        );
        anyhow::ensure!(
            self.jitter >= 0.0 && self.jitter.is_finite(),
            "--jitter must not be negative, got {}",
            self.jitter
        );

        let layout = LayoutConfig::default()
            .with_grid_pitch(self.grid_pitch)
            .with_jitter(self.jitter)
            .with_target_beads(self.target_beads)
            .with_max_attempts(self.max_attempts);
        let graph = GraphConfig::default().with_max_degree(self.max_degree);
        Ok(SceneConfig::default().with_layout(layout).with_graph(graph))
    }
}

/// Reject canvas sizes the layout engine cannot use sensibly.
///
/// Zero is allowed: it lays out an empty canvas.
pub fn check_canvas(width: f64, height: f64) -> anyhow::Result<()> {
    for (flag, value) in [("--width", width), ("--height", height)] {
        anyhow::ensure!(
            value.is_finite() && (0.0..=MAX_CANVAS_EXTENT).contains(&value),
            "{} must be between 0 and {}, got {}",
            flag,
            MAX_CANVAS_EXTENT,
            value
        );
    }
    Ok(())
}

/// Parse a `#rrggbb` or `#rrggbbaa` color.
pub fn parse_color(text: &str) -> Result<Color, String> {
    Color::from_hex(text).ok_or_else(|| format!("expected #rrggbb or #rrggbbaa, got '{}'", text))
}

/// A canvas size change scheduled at a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeEvent {
    pub frame: u32,
    pub width: f64,
    pub height: f64,
}

/// Parse `WxH` (e.g. `1280x720`). Both sides must be positive numbers.
pub fn parse_size(text: &str) -> Result<(f64, f64), String> {
    let (w, h) = text
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WxH, got '{}'", text))?;
    let parse = |s: &str| -> Result<f64, String> {
        let v: f64 = s.trim().parse().map_err(|_| format!("invalid dimension '{}'", s))?;
        if v > 0.0 && v <= MAX_CANVAS_EXTENT {
            Ok(v)
        } else {
            Err(format!(
                "dimension must be in (0, {}], got '{}'",
                MAX_CANVAS_EXTENT, s
            ))
        }
    };
    Ok((parse(w)?, parse(h)?))
}

/// Parse `FRAME:WxH` (e.g. `60:800x600`).
pub fn parse_resize(text: &str) -> Result<ResizeEvent, String> {
    let (frame, size) = text
        .split_once(':')
        .ok_or_else(|| format!("expected FRAME:WxH, got '{}'", text))?;
    let frame: u32 = frame
        .trim()
        .parse()
        .map_err(|_| format!("invalid frame number '{}'", frame))?;
    let (width, height) = parse_size(size)?;
    Ok(ResizeEvent { frame, width, height })
}

/// Seeded `StdRng`, or a fresh seed from OS entropy. The seed actually used
/// is returned so the run can be reproduced.
pub fn make_rng(seed: Option<u64>) -> (StdRng, u64) {
    let seed = seed.unwrap_or_else(rand::random);
    (StdRng::seed_from_u64(seed), seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;

    #[test]
    fn sizes() {
        assert_eq!(parse_size("1280x720"), Ok((1280.0, 720.0)));
        assert_eq!(parse_size("640X480"), Ok((640.0, 480.0)));
        assert!(parse_size("1280").is_err());
        assert!(parse_size("0x10").is_err());
        assert!(parse_size("axb").is_err());
        assert!(parse_size("1e12x720").is_err());
        assert!(parse_size("infx720").is_err());
    }

    #[test]
    fn canvas_bounds() {
        assert!(check_canvas(1280.0, 720.0).is_ok());
        assert!(check_canvas(0.0, 0.0).is_ok());
        assert!(check_canvas(MAX_CANVAS_EXTENT, MAX_CANVAS_EXTENT).is_ok());

        let err = check_canvas(1e12, 720.0).unwrap_err();
        assert!(err.to_string().contains("--width"));
        let err = check_canvas(640.0, -1.0).unwrap_err();
        assert!(err.to_string().contains("--height"));
        assert!(check_canvas(f64::NAN, 10.0).is_err());
    }

    #[test]
    fn colors() {
        assert_eq!(parse_color("#086487"), Ok(Color::hex(0x086487)));
        assert!(parse_color("#+f+f+f").is_err());
        assert!(parse_color("blue").is_err());
    }

    #[test]
    fn tuning_flows_into_scene_config() {
        let tuning = TuningArgs {
            grid_pitch: 200.0,
            jitter: 5.0,
            target_beads: 50,
            max_attempts: 300,
            max_degree: 2,
        };
        let config = tuning.scene_config().unwrap();
        assert_eq!(config.layout.grid_pitch, 200.0);
        assert_eq!(config.layout.jitter, 5.0);
        assert_eq!(config.layout.target_beads, 50);
        assert_eq!(config.layout.max_attempts, 300);
        assert_eq!(config.graph.max_degree, 2);

        let bad = TuningArgs { grid_pitch: 0.0, ..tuning };
        assert!(bad.scene_config().is_err());
    }

    #[test]
    fn resize_events() {
        assert_eq!(
            parse_resize("30:800x600"),
            Ok(ResizeEvent { frame: 30, width: 800.0, height: 600.0 })
        );
        assert!(parse_resize("800x600").is_err());
        assert!(parse_resize("-1:800x600").is_err());
    }

    #[test]
    fn fixed_seed_is_reproducible() {
        let (mut a, seed_a) = make_rng(Some(42));
        let (mut b, seed_b) = make_rng(Some(42));
        assert_eq!(seed_a, 42);
        assert_eq!(seed_a, seed_b);
        assert_eq!(a.next_u64(), b.next_u64());
    }
}
