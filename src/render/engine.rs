//! Stateless drawing primitives.
//!
//! Every primitive takes the mutable canvas, the active [`Layout`] and the
//! [`RenderFlags`], plus whatever it draws. Under `LayoutProof` a primitive
//! fills its bounding box with [`PROOF_COLOR`] and returns early, so a proof
//! render shows exactly the declared geometry and nothing else.

use ab_glyph::{FontArc, PxScale};
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_text_mut};
use imageproc::rect::Rect;

use crate::model::{Attribute, CardIcon};
use crate::render::fonts::FontManager;
use crate::render::layout::{Background, FontSpec, Layout};
use crate::render::text;
use crate::render::RenderFlags;

/// Fill used for every bounding box in a layout-proof render.
pub const PROOF_COLOR: Rgba<u8> = Rgba([228, 0, 124, 255]);

/// Ink for body text, stats, passcode, copyright and set code.
const TEXT_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Gap reserved between the header text and its icon.
const HEADER_ICON_GAP: u32 = 10;

fn proof_box(canvas: &mut RgbaImage, bounds: Rect) {
    draw_filled_rect_mut(canvas, bounds, PROOF_COLOR);
}

/// Canvas for the requested background variant; `OverlayProof` forces the
/// transparent background regardless of the card.
pub fn render_background(layout: &Layout, flags: RenderFlags, background: Background) -> RgbaImage {
    let background = if flags == RenderFlags::OverlayProof {
        Background::Transparent
    } else {
        background
    };
    layout.background(background)
}

/// Scale the artwork into the artwork box with bicubic resampling.
///
/// Artwork rarely matches the box aspect ratio or resolution exactly, so a
/// quality-preserving filter matters here.
pub fn draw_artwork(canvas: &mut RgbaImage, layout: &Layout, flags: RenderFlags, artwork: &RgbaImage) {
    let bounds = layout.artwork_bounds;
    if flags == RenderFlags::LayoutProof {
        proof_box(canvas, bounds);
        return;
    }

    let scaled = if artwork.dimensions() == (bounds.width(), bounds.height()) {
        artwork.clone()
    } else {
        imageops::resize(artwork, bounds.width(), bounds.height(), FilterType::CatmullRom)
    };
    imageops::overlay(canvas, &scaled, bounds.left() as i64, bounds.top() as i64);
}

/// Blit the attribute icon unscaled at its fixed position.
pub fn draw_attribute(canvas: &mut RgbaImage, layout: &Layout, flags: RenderFlags, attribute: Attribute) {
    let bounds = layout.attribute_bounds;
    if flags == RenderFlags::LayoutProof {
        proof_box(canvas, bounds);
        return;
    }

    let icon = layout.attribute_icon(attribute);
    debug_assert_eq!(icon.dimensions(), (bounds.width(), bounds.height()));
    imageops::overlay(canvas, icon, bounds.left() as i64, bounds.top() as i64);
}

/// Blit a spell/trap header icon unscaled at its fixed position.
pub fn draw_icon(canvas: &mut RgbaImage, layout: &Layout, flags: RenderFlags, icon: CardIcon) {
    let bounds = layout.icon_bounds;
    if flags == RenderFlags::LayoutProof {
        proof_box(canvas, bounds);
        return;
    }

    let bitmap = layout.card_icon(icon);
    debug_assert_eq!(bitmap.dimensions(), (bounds.width(), bounds.height()));
    imageops::overlay(canvas, bitmap, bounds.left() as i64, bounds.top() as i64);
}

/// Compose `level` stars into a transient row and place it.
///
/// The row right-aligns inside the star bounds when it fits; an overlong row
/// (high levels) centers against the full canvas width instead.
pub fn draw_level_stars(canvas: &mut RgbaImage, layout: &Layout, flags: RenderFlags, level: u8) {
    let bounds = layout.star_bounds;
    if flags == RenderFlags::LayoutProof {
        proof_box(canvas, bounds);
        return;
    }
    if level == 0 {
        return;
    }

    let count = level.min(12) as u32;
    let size = layout.star_size;
    let padding = layout.star_padding;
    let total = count * size + (count - 1) * padding;

    let mut row = RgbaImage::new(total, size);
    for i in 0..count {
        imageops::overlay(&mut row, layout.star(), (i * (size + padding)) as i64, 0);
    }

    let x = if total <= bounds.width() {
        bounds.left() + (bounds.width() - total) as i32
    } else {
        (canvas.width().saturating_sub(total) / 2) as i32
    };
    imageops::overlay(canvas, &row, x as i64, bounds.top() as i64);
}

/// Render the "[ Header Text ]" banner of a spell/trap card.
///
/// The closing bracket glyph is rasterized once and mirrored horizontally to
/// serve as the opening bracket, so the pair stays visually symmetric without
/// a second glyph. Text right-aligns against the closing bracket, leaving
/// room for the icon when one renders in this row.
pub fn draw_header(
    canvas: &mut RgbaImage,
    layout: &Layout,
    fonts: &FontManager,
    flags: RenderFlags,
    header: &str,
    has_icon: bool,
) {
    let bounds = layout.header_bounds;
    if flags == RenderFlags::LayoutProof {
        proof_box(canvas, bounds);
        return;
    }

    let font = fonts.for_spec(&layout.header_font);
    let scale = PxScale::from(layout.header_font.size);

    let bracket_w = text::text_width(font, scale, "]").ceil().max(1.0) as u32;
    let bracket_h = text::line_height(font, scale).ceil() as u32;
    let mut closing = RgbaImage::new(bracket_w, bracket_h);
    draw_text_mut(&mut closing, TEXT_COLOR, 0, 0, scale, font, "]");
    let opening = imageops::flip_horizontal(&closing);

    let y = bounds.top() + (bounds.height().saturating_sub(bracket_h) / 2) as i32;
    let close_x = bounds.left() + bounds.width() as i32 - bracket_w as i32;
    imageops::overlay(canvas, &opening, bounds.left() as i64, y as i64);
    imageops::overlay(canvas, &closing, close_x as i64, y as i64);

    let reserved = if has_icon {
        layout.icon_bounds.width() + 2 * HEADER_ICON_GAP
    } else {
        HEADER_ICON_GAP
    };
    let width = text::text_width(font, scale, header);
    let x = close_x - reserved as i32 - width.ceil() as i32;
    draw_text_mut(canvas, TEXT_COLOR, x, y, scale, font, header);
}

/// Draw the card name, compressing it horizontally when it would overflow.
///
/// A name wider than its box renders into an offscreen buffer at natural
/// width, then scales down to the box width — condensed glyphs, never
/// truncation.
pub fn draw_name(
    canvas: &mut RgbaImage,
    layout: &Layout,
    fonts: &FontManager,
    flags: RenderFlags,
    name: &str,
    fill: Rgba<u8>,
) {
    let bounds = layout.name_bounds;
    if flags == RenderFlags::LayoutProof {
        proof_box(canvas, bounds);
        return;
    }
    if name.is_empty() {
        return;
    }

    let font = fonts.for_spec(&layout.name_font);
    let scale = PxScale::from(layout.name_font.size);
    let width = text::text_width(font, scale, name);
    let height = text::line_height(font, scale).ceil() as u32;
    let y = bounds.top() + (bounds.height().saturating_sub(height) / 2) as i32;

    if width <= bounds.width() as f32 {
        draw_text_mut(canvas, fill, bounds.left(), y, scale, font, name);
    } else {
        let mut buffer = RgbaImage::new(width.ceil() as u32, height);
        draw_text_mut(&mut buffer, fill, 0, 0, scale, font, name);
        let condensed = imageops::resize(&buffer, bounds.width(), height, FilterType::CatmullRom);
        imageops::overlay(canvas, &condensed, bounds.left() as i64, y as i64);
    }
}

/// Bracketed monster type line, e.g. "[ Dragon / Effect ]".
pub fn draw_type_line(
    canvas: &mut RgbaImage,
    layout: &Layout,
    fonts: &FontManager,
    flags: RenderFlags,
    line: &str,
) {
    let bounds = layout.type_line_bounds;
    if flags == RenderFlags::LayoutProof {
        proof_box(canvas, bounds);
        return;
    }

    let font = fonts.for_spec(&layout.type_line_font);
    let scale = PxScale::from(layout.type_line_font.size);
    let height = text::line_height(font, scale).ceil() as u32;
    let y = bounds.top() + (bounds.height().saturating_sub(height) / 2) as i32;
    let bracketed = format!("[ {} ]", line);
    draw_text_mut(canvas, TEXT_COLOR, bounds.left(), y, scale, font, &bracketed);
}

/// Justified body text in the monster or spell/trap text box.
pub fn draw_card_text(
    canvas: &mut RgbaImage,
    layout: &Layout,
    fonts: &FontManager,
    flags: RenderFlags,
    body: &str,
    monster: bool,
) {
    let bounds = if monster {
        layout.monster_text_bounds
    } else {
        layout.spell_text_bounds
    };
    if flags == RenderFlags::LayoutProof {
        proof_box(canvas, bounds);
        return;
    }

    let font = fonts.for_spec(&layout.text_font);
    text::draw_paragraph(
        canvas,
        font,
        layout.text_font.size,
        layout.text_min_size,
        TEXT_COLOR,
        bounds,
        body,
    );
}

fn stat_text(prefix: &str, value: i32) -> String {
    if value < 0 {
        format!("{}/?", prefix)
    } else {
        format!("{}/{}", prefix, value)
    }
}

fn draw_line_aligned(
    canvas: &mut RgbaImage,
    font: &FontArc,
    spec: &FontSpec,
    bounds: Rect,
    content: &str,
    right_align: bool,
) {
    let scale = PxScale::from(spec.size);
    let height = text::line_height(font, scale).ceil() as u32;
    let y = bounds.top() + (bounds.height().saturating_sub(height) / 2) as i32;
    let x = if right_align {
        let width = text::text_width(font, scale, content);
        bounds.left() + bounds.width() as i32 - width.ceil() as i32
    } else {
        bounds.left()
    };
    draw_text_mut(canvas, TEXT_COLOR, x, y, scale, font, content);
}

/// ATK and DEF values, right-aligned in their boxes; negative values show
/// as "?" (unknown stat).
pub fn draw_stats(
    canvas: &mut RgbaImage,
    layout: &Layout,
    fonts: &FontManager,
    flags: RenderFlags,
    attack: i32,
    defense: i32,
) {
    if flags == RenderFlags::LayoutProof {
        proof_box(canvas, layout.attack_bounds);
        proof_box(canvas, layout.defense_bounds);
        return;
    }

    let font = fonts.for_spec(&layout.stats_font);
    draw_line_aligned(
        canvas,
        font,
        &layout.stats_font,
        layout.attack_bounds,
        &stat_text("ATK", attack),
        true,
    );
    draw_line_aligned(
        canvas,
        font,
        &layout.stats_font,
        layout.defense_bounds,
        &stat_text("DEF", defense),
        true,
    );
}

/// The 8-digit passcode in the lower-left corner.
pub fn draw_passcode(
    canvas: &mut RgbaImage,
    layout: &Layout,
    fonts: &FontManager,
    flags: RenderFlags,
    passcode: &str,
) {
    let bounds = layout.passcode_bounds;
    if flags == RenderFlags::LayoutProof {
        proof_box(canvas, bounds);
        return;
    }
    if passcode.is_empty() {
        return;
    }

    let font = fonts.for_spec(&layout.passcode_font);
    draw_line_aligned(canvas, font, &layout.passcode_font, bounds, passcode, false);
}

/// The fixed copyright line in the lower-right corner.
pub fn draw_copyright(canvas: &mut RgbaImage, layout: &Layout, fonts: &FontManager, flags: RenderFlags) {
    let bounds = layout.copyright_bounds;
    if flags == RenderFlags::LayoutProof {
        proof_box(canvas, bounds);
        return;
    }

    let font = fonts.for_spec(&layout.copyright_font);
    draw_line_aligned(
        canvas,
        font,
        &layout.copyright_font,
        bounds,
        layout.copyright_text,
        true,
    );
}

/// Print set code, right-aligned under the artwork.
pub fn draw_set_code(
    canvas: &mut RgbaImage,
    layout: &Layout,
    fonts: &FontManager,
    flags: RenderFlags,
    code: &str,
) {
    let bounds = layout.set_code_bounds;
    if flags == RenderFlags::LayoutProof {
        proof_box(canvas, bounds);
        return;
    }

    let font = fonts.for_spec(&layout.set_code_font);
    draw_line_aligned(canvas, font, &layout.set_code_font, bounds, code, true);
}

/// The hologram seal in the lower-right corner, blitted unscaled.
pub fn draw_hologram(canvas: &mut RgbaImage, layout: &Layout, flags: RenderFlags) {
    let bounds = layout.hologram_bounds;
    if flags == RenderFlags::LayoutProof {
        proof_box(canvas, bounds);
        return;
    }

    let hologram = layout.hologram();
    debug_assert_eq!(hologram.dimensions(), (bounds.width(), bounds.height()));
    imageops::overlay(canvas, hologram, bounds.left() as i64, bounds.top() as i64);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_text_unknown_values() {
        assert_eq!(stat_text("ATK", 2500), "ATK/2500");
        assert_eq!(stat_text("DEF", 0), "DEF/0");
        assert_eq!(stat_text("ATK", -1), "ATK/?");
    }

    #[test]
    fn test_overlay_proof_forces_transparent_background() {
        let layout = Layout::medium().expect("layout failed to load");
        let canvas = render_background(&layout, RenderFlags::OverlayProof, Background::Spell);
        assert!(canvas.pixels().all(|p| p.0[3] == 0));
    }

    #[test]
    fn test_level_star_row_alignment() {
        let layout = Layout::medium().expect("layout failed to load");
        let bounds = layout.star_bounds;

        // Four stars fit: the row is right-aligned inside the star bounds.
        let mut canvas = RgbaImage::new(layout.canvas_width, layout.canvas_height);
        draw_level_stars(&mut canvas, &layout, RenderFlags::Normal, 4);
        let total = 4 * layout.star_size + 3 * layout.star_padding;
        let expected_left = bounds.left() + (bounds.width() - total) as i32;
        assert!(column_has_ink(&canvas, expected_left + layout.star_size as i32 / 2));
        assert!(!column_has_ink(&canvas, expected_left - 8));

        // Twelve stars overflow: the row centers on the canvas.
        let mut canvas = RgbaImage::new(layout.canvas_width, layout.canvas_height);
        draw_level_stars(&mut canvas, &layout, RenderFlags::Normal, 12);
        let total = 12 * layout.star_size + 11 * layout.star_padding;
        let centered_left = ((layout.canvas_width - total) / 2) as i32;
        assert!(column_has_ink(&canvas, centered_left + layout.star_size as i32 / 2));
        assert!(!column_has_ink(&canvas, centered_left - 8));
    }

    fn column_has_ink(canvas: &RgbaImage, x: i32) -> bool {
        if x < 0 || x >= canvas.width() as i32 {
            return false;
        }
        (0..canvas.height()).any(|y| canvas.get_pixel(x as u32, y).0[3] != 0)
    }
}
