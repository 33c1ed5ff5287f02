//! `beadwork palettes` - list palettes and motifs.

use beadwork::{Motif, Palette};

/// Palette listing, one line per palette.
pub fn palette_lines() -> Vec<String> {
    Palette::all()
        .iter()
        .map(|p| {
            format!(
                "  {:<12} bg {}  dots {}  core {}  motif {}",
                p.name,
                p.background.to_hex(),
                p.dots.to_hex(),
                p.core.to_hex(),
                p.motif.name()
            )
        })
        .collect()
}

pub fn cmd_palettes() -> anyhow::Result<()> {
    println!("Available palettes:");
    for line in palette_lines() {
        println!("{}", line);
    }
    println!();
    println!("Available motifs:");
    for motif in Motif::all() {
        println!("  {:<12} {}", motif.name(), motif.description());
    }
    Ok(())
}
