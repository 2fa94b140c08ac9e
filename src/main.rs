use anyhow::{Context, Result};
use clap::Parser;
use std::fs;

use cardsmith::cli::Args;
use cardsmith::model::{Artwork, CardFile};
use cardsmith::render::Renderer;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(match args.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .init();

    // Read and parse the card description
    let json = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read input file: {}", args.input.display()))?;
    let mut file: CardFile =
        serde_json::from_str(&json).with_context(|| "Failed to parse card JSON")?;

    log::info!("Parsed card \"{}\"", file.card.name());

    // Attach artwork when one was supplied
    if let Some(ref artwork_path) = args.artwork {
        let bytes = fs::read(artwork_path)
            .with_context(|| format!("Failed to read artwork file: {}", artwork_path.display()))?;
        file.card.set_artwork(Artwork::new(bytes));
    }

    let renderer = Renderer::with_flags(args.proof.flags())
        .with_context(|| "Failed to initialize the renderer")?;

    let print = if args.no_print { None } else { file.print.as_ref() };
    let bitmap = match print {
        Some(print) => {
            log::info!("Rendering print {}", print.code());
            renderer
                .render_print(&file.card, print)
                .with_context(|| "Failed to render print")?
        }
        None => renderer
            .render_card(&file.card)
            .with_context(|| "Failed to render card")?,
    };

    // Write output
    let output_path = args.output_path();
    bitmap
        .save(&output_path)
        .with_context(|| format!("Failed to write output file: {}", output_path.display()))?;

    println!("Successfully wrote card image to {}", output_path.display());

    Ok(())
}
