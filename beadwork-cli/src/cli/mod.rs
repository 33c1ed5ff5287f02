//! CLI command implementations.
//!
//! - `render` - play the scene and write frames to disk
//! - `layout` - dump one layout epoch as JSON
//! - `palettes` - list palettes and motifs

pub mod common;
pub mod export;
pub mod layout;
pub mod palettes;
pub mod render;

pub use layout::{LayoutArgs, cmd_layout};
pub use palettes::cmd_palettes;
pub use render::{RenderArgs, cmd_render};
