use std::fs;
use std::path::PathBuf;

use image::RgbaImage;
use imageproc::rect::Rect;

use cardsmith::error::RenderError;
use cardsmith::model::{Card, CardFile};
use cardsmith::render::{brush, engine, Background, RenderFlags, Renderer};
use cardsmith::render_to_png;

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn load_fixture(name: &str) -> CardFile {
    let path = fixtures_path().join(name);
    let json = fs::read_to_string(&path).expect("Failed to read fixture");
    serde_json::from_str(&json).expect("Failed to parse fixture")
}

/// True when any pixel inside `bounds` differs between the two bitmaps.
fn region_changed(canvas: &RgbaImage, reference: &RgbaImage, bounds: Rect) -> bool {
    for y in bounds.top()..bounds.top() + bounds.height() as i32 {
        for x in bounds.left()..bounds.left() + bounds.width() as i32 {
            if canvas.get_pixel(x as u32, y as u32) != reference.get_pixel(x as u32, y as u32) {
                return true;
            }
        }
    }
    false
}

/// True when every pixel inside `bounds` equals `color`.
fn region_is_solid(canvas: &RgbaImage, bounds: Rect, color: image::Rgba<u8>) -> bool {
    for y in bounds.top()..bounds.top() + bounds.height() as i32 {
        for x in bounds.left()..bounds.left() + bounds.width() as i32 {
            if canvas.get_pixel(x as u32, y as u32) != &color {
                return false;
            }
        }
    }
    true
}

fn region_contains(canvas: &RgbaImage, bounds: Rect, color: image::Rgba<u8>) -> bool {
    for y in bounds.top()..bounds.top() + bounds.height() as i32 {
        for x in bounds.left()..bounds.left() + bounds.width() as i32 {
            if canvas.get_pixel(x as u32, y as u32) == &color {
                return true;
            }
        }
    }
    false
}

#[test]
fn test_monster_render_matches_canvas_size() {
    let file = load_fixture("effect_monster.json");
    let renderer = Renderer::new().expect("renderer failed to initialize");

    let canvas = renderer.render_card(&file.card).expect("render failed");
    let layout = renderer.layout();
    assert_eq!(
        canvas.dimensions(),
        (layout.canvas_width, layout.canvas_height)
    );
}

#[test]
fn test_effect_monster_draws_every_element() {
    let file = load_fixture("effect_monster.json");
    let renderer = Renderer::new().expect("renderer failed to initialize");
    let layout = renderer.layout();

    let canvas = renderer.render_card(&file.card).expect("render failed");

    // The effect frame was selected, not the normal one.
    let effect = layout.background(Background::EffectMonster);
    let normal = layout.background(Background::NormalMonster);
    assert_eq!(canvas.get_pixel(10, 10), effect.get_pixel(10, 10));
    assert_ne!(canvas.get_pixel(10, 10), normal.get_pixel(10, 10));

    // Every element left ink inside its declared box.
    for bounds in [
        layout.name_bounds,
        layout.attribute_bounds,
        layout.artwork_bounds,
        layout.type_line_bounds,
        layout.monster_text_bounds,
        layout.attack_bounds,
        layout.defense_bounds,
        layout.passcode_bounds,
        layout.copyright_bounds,
        layout.hologram_bounds,
    ] {
        assert!(
            region_changed(&canvas, &effect, bounds),
            "no ink inside {:?}",
            bounds
        );
    }

    // Seven level stars right-align inside the star row: ink at the
    // computed left edge of the row, none before it.
    let total = 7 * layout.star_size + 6 * layout.star_padding;
    let star_left = layout.star_bounds.left() + (layout.star_bounds.width() - total) as i32;
    let first_star =
        Rect::at(star_left, layout.star_bounds.top()).of_size(layout.star_size, layout.star_size);
    assert!(region_changed(&canvas, &effect, first_star));
    let gap_width = layout.star_bounds.width() - total - 4;
    let before_stars =
        Rect::at(layout.star_bounds.left(), layout.star_bounds.top()).of_size(gap_width, layout.star_size);
    assert!(!region_changed(&canvas, &effect, before_stars));
}

#[test]
fn test_renders_are_deterministic() {
    let file = load_fixture("effect_monster.json");
    let renderer = Renderer::new().expect("renderer failed to initialize");

    let first = renderer.render_card(&file.card).expect("render failed");
    let second = renderer.render_card(&file.card).expect("render failed");
    assert_eq!(first.as_raw(), second.as_raw());
}

#[test]
fn test_layout_proof_fills_declared_boxes() {
    let monster = load_fixture("effect_monster.json");
    let renderer =
        Renderer::with_flags(RenderFlags::LayoutProof).expect("renderer failed to initialize");
    let layout = renderer.layout();

    let canvas = renderer.render_card(&monster.card).expect("render failed");
    for bounds in [
        layout.name_bounds,
        layout.attribute_bounds,
        layout.artwork_bounds,
        layout.star_bounds,
        layout.type_line_bounds,
        layout.monster_text_bounds,
        layout.attack_bounds,
        layout.defense_bounds,
        layout.passcode_bounds,
        layout.copyright_bounds,
        layout.hologram_bounds,
    ] {
        assert!(
            region_is_solid(&canvas, bounds, engine::PROOF_COLOR),
            "{:?} is not a solid proof box",
            bounds
        );
    }

    let spell = load_fixture("quick_play_spell.json");
    let canvas = renderer.render_card(&spell.card).expect("render failed");
    for bounds in [
        layout.header_bounds,
        layout.icon_bounds,
        layout.spell_text_bounds,
    ] {
        assert!(
            region_is_solid(&canvas, bounds, engine::PROOF_COLOR),
            "{:?} is not a solid proof box",
            bounds
        );
    }
}

#[test]
fn test_overlay_proof_background_is_transparent() {
    let file = load_fixture("quick_play_spell.json");
    let renderer =
        Renderer::with_flags(RenderFlags::OverlayProof).expect("renderer failed to initialize");
    let layout = renderer.layout();

    let canvas = renderer.render_card(&file.card).expect("render failed");

    // Far corner: untouched by any element, stays fully transparent.
    assert_eq!(canvas.get_pixel(4, 600).0[3], 0);
    // Artwork box: the placeholder artwork is composited as usual.
    let center_x = (layout.artwork_bounds.left() + layout.artwork_bounds.width() as i32 / 2) as u32;
    let center_y = (layout.artwork_bounds.top() + layout.artwork_bounds.height() as i32 / 2) as u32;
    assert_ne!(canvas.get_pixel(center_x, center_y).0[3], 0);
}

#[test]
fn test_long_name_compresses_into_its_box() {
    let mut file = load_fixture("effect_monster.json");
    let Card::Monster(ref mut monster) = file.card else {
        panic!("expected a monster card");
    };
    monster.name = "The Unfathomably Grandiloquent Stormspire Archfiend of Cataclysms".to_string();

    let renderer = Renderer::new().expect("renderer failed to initialize");
    let layout = renderer.layout();
    let canvas = renderer.render_card(&file.card).expect("render failed");
    let background = layout.background(Background::EffectMonster);

    // Ink appears inside the name box...
    assert!(region_changed(&canvas, &background, layout.name_bounds));
    // ...but nothing spills into the gap between the box and the attribute
    // icon, however long the name is.
    let name_right = layout.name_bounds.left() + layout.name_bounds.width() as i32;
    let gap = Rect::at(name_right + 1, layout.name_bounds.top())
        .of_size(8, layout.name_bounds.height());
    assert!(!region_changed(&canvas, &background, gap));
}

#[test]
fn test_spell_print_draws_set_code_and_foil_name() {
    let file = load_fixture("quick_play_spell.json");
    let print = file.print.as_ref().expect("fixture has a print");
    let renderer = Renderer::new().expect("renderer failed to initialize");
    let layout = renderer.layout();

    let canvas = renderer
        .render_print(&file.card, print)
        .expect("render failed");
    let background = layout.background(Background::Spell);

    assert!(region_changed(&canvas, &background, layout.set_code_bounds));
    // A rare print uses the silver foil fill for the name.
    assert!(region_contains(
        &canvas,
        layout.name_bounds,
        brush::SILVER_FOIL
    ));
}

#[test]
fn test_trap_render_draws_header_and_icon() {
    let file = load_fixture("counter_trap.json");
    let renderer = Renderer::new().expect("renderer failed to initialize");
    let layout = renderer.layout();

    let canvas = renderer.render_card(&file.card).expect("render failed");
    let background = layout.background(Background::Trap);

    assert!(region_changed(&canvas, &background, layout.header_bounds));
    assert!(region_changed(&canvas, &background, layout.icon_bounds));
    // Trap names default to solid white.
    assert!(region_contains(
        &canvas,
        layout.name_bounds,
        brush::SOLID_WHITE
    ));
}

#[test]
fn test_render_token_is_unsupported() {
    let renderer = Renderer::new().expect("renderer failed to initialize");
    assert!(matches!(
        renderer.render_token(),
        Err(RenderError::Unsupported(_))
    ));
}

#[test]
fn test_render_to_png_roundtrip() {
    let file = load_fixture("counter_trap.json");
    let png = render_to_png(&file.card, None, RenderFlags::Normal).expect("render failed");

    assert!(!png.is_empty());
    let decoded = image::load_from_memory(&png).expect("PNG failed to decode");
    let renderer = Renderer::new().expect("renderer failed to initialize");
    assert_eq!(
        (decoded.width(), decoded.height()),
        (
            renderer.layout().canvas_width,
            renderer.layout().canvas_height
        )
    );
}
