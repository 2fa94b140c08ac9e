pub mod cli;
pub mod error;
pub mod model;
pub mod render;

pub use error::RenderError;
pub use model::{Artwork, Card, CardFile, Print, Rarity};
pub use render::{RenderFlags, Renderer};

use std::io::Cursor;

/// High-level API for rendering a card to PNG bytes.
///
/// This is the recommended entry point for one-off renders: it builds a
/// [`Renderer`], renders `card` (as `print` when one is given) and encodes
/// the result. Callers rendering many cards should construct a [`Renderer`]
/// once and reuse it, since construction decodes the embedded assets.
///
/// # Example
///
/// ```no_run
/// use cardsmith::{render_to_png, CardFile, RenderFlags};
///
/// let json = std::fs::read_to_string("dragon.json").unwrap();
/// let file: CardFile = serde_json::from_str(&json).unwrap();
///
/// let png = render_to_png(&file.card, file.print.as_ref(), RenderFlags::Normal).unwrap();
/// std::fs::write("dragon.png", png).unwrap();
/// ```
pub fn render_to_png(
    card: &Card,
    print: Option<&Print>,
    flags: RenderFlags,
) -> Result<Vec<u8>, RenderError> {
    let renderer = Renderer::with_flags(flags)?;
    let bitmap = match print {
        Some(print) => renderer.render_print(card, print)?,
        None => renderer.render_card(card)?,
    };

    let mut bytes = Cursor::new(Vec::new());
    bitmap
        .write_to(&mut bytes, image::ImageFormat::Png)
        .map_err(|e| RenderError::ImageEncode(e.to_string()))?;
    Ok(bytes.into_inner())
}
