//! Spell card renderer.

use image::{Rgba, RgbaImage};
use log::debug;

use crate::error::RenderError;
use crate::model::{Attribute, Print, SpellCard};
use crate::render::fonts::FontManager;
use crate::render::layout::{Background, Layout};
use crate::render::{brush, engine, RenderFlags};

const HEADER: &str = "Spell Card";

/// Orchestrates the engine primitives for spell cards: the bracketed header
/// banner with its optional sub-type icon instead of stars and stats.
pub struct SpellRenderer<'a> {
    layout: &'a Layout,
    fonts: &'a FontManager,
    flags: RenderFlags,
}

impl<'a> SpellRenderer<'a> {
    pub fn new(layout: &'a Layout, fonts: &'a FontManager, flags: RenderFlags) -> Self {
        Self {
            layout,
            fonts,
            flags,
        }
    }

    pub fn render_card(&self, card: &SpellCard) -> Result<RgbaImage, RenderError> {
        self.render(card, brush::SOLID_WHITE, None)
    }

    /// Print-specific render: rarity-selected name fill plus the set code.
    pub fn render_print(&self, card: &SpellCard, print: &Print) -> Result<RgbaImage, RenderError> {
        self.render(card, brush::from_rarity(false, print.rarity), Some(print))
    }

    fn render(
        &self,
        card: &SpellCard,
        name_fill: Rgba<u8>,
        print: Option<&Print>,
    ) -> Result<RgbaImage, RenderError> {
        debug!("rendering spell card \"{}\"", card.name);

        let mut canvas = engine::render_background(self.layout, self.flags, Background::Spell);
        debug_assert_eq!(
            canvas.dimensions(),
            (self.layout.canvas_width, self.layout.canvas_height)
        );

        engine::draw_attribute(&mut canvas, self.layout, self.flags, Attribute::Spell);

        let artwork = match print.and_then(|p| p.artwork.as_ref()).or(card.artwork.as_ref()) {
            Some(art) => art.decode()?,
            None => self.layout.default_artwork().clone(),
        };
        engine::draw_artwork(&mut canvas, self.layout, self.flags, &artwork);

        let icon = card.icon();
        engine::draw_header(
            &mut canvas,
            self.layout,
            self.fonts,
            self.flags,
            HEADER,
            icon.is_some(),
        );
        if let Some(icon) = icon {
            engine::draw_icon(&mut canvas, self.layout, self.flags, icon);
        }

        engine::draw_card_text(
            &mut canvas,
            self.layout,
            self.fonts,
            self.flags,
            &card.text,
            false,
        );
        if let Some(print) = print {
            engine::draw_set_code(&mut canvas, self.layout, self.fonts, self.flags, &print.code());
        }
        engine::draw_passcode(&mut canvas, self.layout, self.fonts, self.flags, &card.passcode);
        engine::draw_copyright(&mut canvas, self.layout, self.fonts, self.flags);
        engine::draw_hologram(&mut canvas, self.layout, self.flags);
        engine::draw_name(
            &mut canvas,
            self.layout,
            self.fonts,
            self.flags,
            &card.name,
            name_fill,
        );

        Ok(canvas)
    }
}
