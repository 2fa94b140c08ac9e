use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::render::RenderFlags;

#[derive(Parser, Debug)]
#[command(name = "cardsmith")]
#[command(
    author,
    version,
    about = "Render trading-card images from structured card data"
)]
pub struct Args {
    /// Input card JSON file path
    #[arg(required = true)]
    pub input: PathBuf,

    /// Output PNG file path (defaults to input with .png extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Artwork image file to place in the artwork box
    #[arg(short, long)]
    pub artwork: Option<PathBuf>,

    /// Render the card's canonical data even when the file carries a print
    #[arg(long)]
    pub no_print: bool,

    /// Proof mode for layout verification
    #[arg(short, long, value_enum, default_value = "off")]
    pub proof: ProofMode,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Proof rendering modes exposed on the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Default)]
pub enum ProofMode {
    /// Normal rendering
    #[default]
    Off,
    /// Placeholder rectangles at every declared bounding box
    Layout,
    /// Transparent background for overlay comparison
    Overlay,
}

impl ProofMode {
    pub fn flags(&self) -> RenderFlags {
        match self {
            ProofMode::Off => RenderFlags::Normal,
            ProofMode::Layout => RenderFlags::LayoutProof,
            ProofMode::Overlay => RenderFlags::OverlayProof,
        }
    }
}

impl Args {
    /// Get the output path, defaulting to input with .png extension
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.input.with_extension("png"))
    }
}
