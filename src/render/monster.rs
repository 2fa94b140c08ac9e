//! Monster card renderer.

use image::RgbaImage;
use log::debug;

use crate::error::RenderError;
use crate::model::{MonsterCard, Print};
use crate::render::fonts::FontManager;
use crate::render::layout::{Background, Layout};
use crate::render::{brush, engine, RenderFlags};

/// Orchestrates the engine primitives for monster cards: level stars, the
/// type line and ATK/DEF stats, with a solid-black name.
pub struct MonsterRenderer<'a> {
    layout: &'a Layout,
    fonts: &'a FontManager,
    flags: RenderFlags,
}

impl<'a> MonsterRenderer<'a> {
    pub fn new(layout: &'a Layout, fonts: &'a FontManager, flags: RenderFlags) -> Self {
        Self {
            layout,
            fonts,
            flags,
        }
    }

    /// Background frame for the monster's sub-type.
    fn background(card: &MonsterCard) -> Background {
        if card.fusion {
            Background::FusionMonster
        } else if card.ritual {
            Background::RitualMonster
        } else if card.normal {
            Background::NormalMonster
        } else {
            Background::EffectMonster
        }
    }

    pub fn render_card(&self, card: &MonsterCard) -> Result<RgbaImage, RenderError> {
        debug!("rendering monster card \"{}\"", card.name);

        let mut canvas =
            engine::render_background(self.layout, self.flags, Self::background(card));
        debug_assert_eq!(
            canvas.dimensions(),
            (self.layout.canvas_width, self.layout.canvas_height)
        );

        engine::draw_attribute(&mut canvas, self.layout, self.flags, card.attribute);

        let artwork = match card.artwork.as_ref() {
            Some(art) => art.decode()?,
            None => self.layout.default_artwork().clone(),
        };
        engine::draw_artwork(&mut canvas, self.layout, self.flags, &artwork);

        engine::draw_level_stars(&mut canvas, self.layout, self.flags, card.level);
        engine::draw_type_line(
            &mut canvas,
            self.layout,
            self.fonts,
            self.flags,
            &card.type_line(),
        );
        engine::draw_card_text(
            &mut canvas,
            self.layout,
            self.fonts,
            self.flags,
            &card.text,
            true,
        );
        engine::draw_stats(
            &mut canvas,
            self.layout,
            self.fonts,
            self.flags,
            card.attack,
            card.defense,
        );
        engine::draw_passcode(&mut canvas, self.layout, self.fonts, self.flags, &card.passcode);
        engine::draw_copyright(&mut canvas, self.layout, self.fonts, self.flags);
        engine::draw_hologram(&mut canvas, self.layout, self.flags);
        engine::draw_name(
            &mut canvas,
            self.layout,
            self.fonts,
            self.flags,
            &card.name,
            brush::SOLID_BLACK,
        );

        Ok(canvas)
    }

    /// Print-specific monster rendering (per-print artwork, rarity foils,
    /// set code) is not implemented; prints go through the plain card path.
    pub fn render_print(&self, card: &MonsterCard, _print: &Print) -> Result<RgbaImage, RenderError> {
        self.render_card(card)
    }
}
