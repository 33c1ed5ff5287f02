//! Integration tests for beadwork CLI commands.
//!
//! These tests run the actual binary and verify end-to-end behavior.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_beadwork"))
}

/// A fresh, empty scratch directory for one test.
fn scratch_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join(name);
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

#[test]
fn palettes_command_lists_palettes_and_motifs() {
    let output = Command::new(binary_path())
        .arg("palettes")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for name in ["green", "red", "orange", "blue-yellow", "cyan", "purple", "gold"] {
        assert!(stdout.contains(name), "Should list '{}' palette", name);
    }
    for motif in ["concentric", "zigzag", "rosette", "plain"] {
        assert!(stdout.contains(motif), "Should list '{}' motif", motif);
    }
}

#[test]
fn layout_command_emits_valid_json() {
    let output = Command::new(binary_path())
        .args(["layout", "--width", "900", "--height", "600", "--seed", "7"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");

    assert_eq!(json["seed"], 7);
    let medallions = json["medallions"].as_array().expect("medallions array");
    let beads = json["beads"].as_array().expect("beads array");
    assert!(!medallions.is_empty());
    assert!(!beads.is_empty());

    // Medallions never overlap
    for (i, a) in medallions.iter().enumerate() {
        for b in &medallions[i + 1..] {
            let dx = a["x"].as_f64().unwrap() - b["x"].as_f64().unwrap();
            let dy = a["y"].as_f64().unwrap() - b["y"].as_f64().unwrap();
            assert!((dx * dx + dy * dy).sqrt() >= 140.0);
        }
    }

    // Histogram covers every bead and stops at degree 3
    let histogram = json["stats"]["degree_histogram"].as_array().unwrap();
    assert!(histogram.len() <= 4);
    let total: u64 = histogram.iter().map(|v| v.as_u64().unwrap()).sum();
    assert_eq!(total as usize, beads.len());
}

#[test]
fn layout_is_reproducible_with_seed() {
    let run = || {
        Command::new(binary_path())
            .args(["layout", "--seed", "99"])
            .output()
            .expect("Failed to execute command")
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn render_writes_frames_and_manifest() {
    let dir = scratch_dir("render_both");
    let output = Command::new(binary_path())
        .args(["render", "--width", "320", "--height", "240", "--frames", "3"])
        .args(["--seed", "5", "--format", "both", "--scale", "0.5", "--resize", "2:200x150"])
        .arg("--out")
        .arg(&dir)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    for frame in 0..3 {
        assert!(dir.join(format!("frame_{:05}.svg", frame)).exists());
        assert!(dir.join(format!("frame_{:05}.png", frame)).exists());
    }

    let first = image::open(dir.join("frame_00000.png")).expect("decode png");
    assert_eq!((first.width(), first.height()), (160, 120));
    let resized = image::open(dir.join("frame_00002.png")).expect("decode png");
    assert_eq!((resized.width(), resized.height()), (100, 75));

    let svg = fs::read_to_string(dir.join("frame_00001.svg")).unwrap();
    assert!(svg.starts_with("<?xml"));
    assert!(svg.contains("viewBox=\"0 0 320 240\""));

    let manifest: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.join("manifest.json")).unwrap()).unwrap();
    assert_eq!(manifest["seed"], 5);
    assert_eq!(manifest["frames"], 3);
    assert_eq!(manifest["format"], "both");
    let epochs = manifest["epochs"].as_array().unwrap();
    assert_eq!(epochs.len(), 2);
    assert_eq!(epochs[1]["first_frame"], 2);
    assert_eq!(epochs[1]["width"], 200.0);
    assert!(manifest["generated_at"].is_string());
}

#[test]
fn render_rejects_bad_resize() {
    let dir = scratch_dir("render_bad_resize");
    let output = Command::new(binary_path())
        .args(["render", "--frames", "1", "--resize", "oops"])
        .arg("--out")
        .arg(&dir)
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("FRAME:WxH"), "stderr: {}", stderr);
}

#[test]
fn render_rejects_zero_fps() {
    let dir = scratch_dir("render_zero_fps");
    let output = Command::new(binary_path())
        .args(["render", "--frames", "1", "--fps", "0"])
        .arg("--out")
        .arg(&dir)
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--fps"));
}

#[test]
fn layout_rejects_huge_canvas() {
    let output = Command::new(binary_path())
        .args(["layout", "--width", "1e12", "--height", "1e12", "--seed", "1"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--width"), "stderr: {}", stderr);
    assert!(!stderr.contains("panicked"), "stderr: {}", stderr);
}

#[test]
fn layout_honors_max_degree_flag() {
    let output = Command::new(binary_path())
        .args(["layout", "--seed", "3", "--max-degree", "1", "--grid-pitch", "200"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let histogram = json["stats"]["degree_histogram"].as_array().unwrap();
    assert!(histogram.len() <= 2, "histogram: {:?}", histogram);
    // 1280x720 at pitch 200 fits 6x3 cells
    assert_eq!(json["stats"]["grid_cells"], 18);
}

#[test]
fn render_png_rejects_empty_canvas() {
    let dir = scratch_dir("render_empty_png");
    let output = Command::new(binary_path())
        .args(["render", "--frames", "1", "--width", "0", "--format", "png"])
        .arg("--out")
        .arg(&dir)
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("PNG output"), "stderr: {}", stderr);
}

#[test]
fn render_applies_background_flag() {
    let dir = scratch_dir("render_background");
    let output = Command::new(binary_path())
        .args(["render", "--frames", "1", "--width", "200", "--height", "150"])
        .args(["--seed", "2", "--format", "svg", "--background", "#102030"])
        .arg("--out")
        .arg(&dir)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let svg = fs::read_to_string(dir.join("frame_00000.svg")).unwrap();
    assert!(svg.contains("#102030"));

    let bad = Command::new(binary_path())
        .args(["render", "--frames", "1", "--background", "#+f+f+f"])
        .arg("--out")
        .arg(&dir)
        .output()
        .expect("Failed to execute command");
    assert!(!bad.status.success());
    assert!(String::from_utf8_lossy(&bad.stderr).contains("#rrggbb"));
}
