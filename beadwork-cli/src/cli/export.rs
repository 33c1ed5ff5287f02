//! SVG to PNG rasterization.

use std::fs;
use std::path::Path;

use resvg::usvg;
use tiny_skia::Pixmap;

pub type ExportResult<T> = Result<T, ExportError>;

#[derive(thiserror::Error, Debug)]
pub enum ExportError {
    #[error("svg parse error: {0}")]
    SvgParse(#[from] usvg::Error),

    #[error("pixmap error: cannot allocate {width}x{height}")]
    Pixmap { width: u32, height: u32 },

    #[error("png encode error: {0}")]
    PngEncode(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExportError {
    pub fn png_encode(msg: impl Into<String>) -> Self {
        Self::PngEncode(msg.into())
    }
}

/// Rasterize `svg_content` to a PNG at `png_path`.
///
/// The pixmap is `width * scale` by `height * scale`. Frames paint their
/// own background, so the pixmap starts transparent. Returns the pixel
/// dimensions written.
pub fn render_png(
    svg_content: &str,
    png_path: &Path,
    scale: f64,
    width: f64,
    height: f64,
) -> ExportResult<(u32, u32)> {
    let options = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg_content, &options)?;

    let pixmap_width = (width * scale).round() as u32;
    let pixmap_height = (height * scale).round() as u32;

    let mut pixmap = Pixmap::new(pixmap_width, pixmap_height).ok_or(ExportError::Pixmap {
        width: pixmap_width,
        height: pixmap_height,
    })?;

    let transform = tiny_skia::Transform::from_scale(scale as f32, scale as f32);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    let data = pixmap
        .encode_png()
        .map_err(|e| ExportError::png_encode(e.to_string()))?;
    fs::write(png_path, data)?;

    Ok((pixmap_width, pixmap_height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            ExportError::png_encode("x")
                .to_string()
                .contains("png encode error:")
        );
        assert!(
            ExportError::Pixmap { width: 0, height: 3 }
                .to_string()
                .contains("pixmap error: cannot allocate 0x3")
        );
    }

    #[test]
    fn io_preserves_source() {
        let err = ExportError::from(std::io::Error::other("disk full"));
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn malformed_svg_is_a_parse_error() {
        let path = std::env::temp_dir().join("beadwork-never-written.png");
        let err = render_png("<svg", &path, 1.0, 10.0, 10.0).unwrap_err();
        assert!(matches!(err, ExportError::SvgParse(_)));
        assert!(!path.exists());
    }

    #[test]
    fn empty_canvas_cannot_allocate() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10"/>"#;
        let path = std::env::temp_dir().join("beadwork-zero-scale.png");
        let err = render_png(svg, &path, 0.0, 10.0, 10.0).unwrap_err();
        assert!(matches!(err, ExportError::Pixmap { width: 0, height: 0 }));
    }
}
