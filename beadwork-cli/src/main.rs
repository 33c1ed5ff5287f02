//! beadwork - render generative bead animations
//!
//! Usage:
//!   beadwork render --frames 120 --out frames   Write animation frames
//!   beadwork layout --seed 7 --pretty           Dump a layout as JSON
//!   beadwork palettes                           List palettes and motifs

mod cli;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cli::{LayoutArgs, RenderArgs, cmd_layout, cmd_palettes, cmd_render};

#[derive(Parser, Debug)]
#[command(name = "beadwork", version, about)]
struct Cli {
    /// More log output (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render animation frames as SVG and/or PNG.
    Render(RenderArgs),
    /// Print one layout (medallions, beads, connections) as JSON.
    Layout(LayoutArgs),
    /// List available palettes and motifs.
    Palettes,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("beadwork={level},beadwork_cli={level}"))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Layout(args) => cmd_layout(args),
        Command::Palettes => cmd_palettes(),
    }
}
