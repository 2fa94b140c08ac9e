//! The rendering facade: owns the layout table and font collection, and
//! dispatches a card to the renderer for its variant.

use image::RgbaImage;

use crate::error::RenderError;
use crate::model::{Card, Print};
use crate::render::fonts::FontManager;
use crate::render::layout::Layout;
use crate::render::monster::MonsterRenderer;
use crate::render::spell::SpellRenderer;
use crate::render::trap::TrapRenderer;
use crate::render::RenderFlags;

/// Entry point for rendering cards.
///
/// Construction decodes the embedded assets and fonts once; the renderer is
/// then immutable and every render call allocates its own output bitmap,
/// whose ownership transfers to the caller.
pub struct Renderer {
    layout: Layout,
    fonts: FontManager,
    flags: RenderFlags,
}

impl Renderer {
    pub fn new() -> Result<Self, RenderError> {
        Self::with_flags(RenderFlags::Normal)
    }

    pub fn with_flags(flags: RenderFlags) -> Result<Self, RenderError> {
        Ok(Self {
            layout: Layout::medium()?,
            fonts: FontManager::new()?,
            flags,
        })
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Render a card using its canonical data.
    pub fn render_card(&self, card: &Card) -> Result<RgbaImage, RenderError> {
        match card {
            Card::Monster(monster) => {
                MonsterRenderer::new(&self.layout, &self.fonts, self.flags).render_card(monster)
            }
            Card::Spell(spell) => {
                SpellRenderer::new(&self.layout, &self.fonts, self.flags).render_card(spell)
            }
            Card::Trap(trap) => {
                TrapRenderer::new(&self.layout, &self.fonts, self.flags).render_card(trap)
            }
        }
    }

    /// Render a card as one of its specific prints (set code, rarity foil,
    /// per-print artwork where available).
    pub fn render_print(&self, card: &Card, print: &Print) -> Result<RgbaImage, RenderError> {
        match card {
            Card::Monster(monster) => MonsterRenderer::new(&self.layout, &self.fonts, self.flags)
                .render_print(monster, print),
            Card::Spell(spell) => {
                SpellRenderer::new(&self.layout, &self.fonts, self.flags).render_print(spell, print)
            }
            Card::Trap(trap) => {
                TrapRenderer::new(&self.layout, &self.fonts, self.flags).render_print(trap, print)
            }
        }
    }

    /// Token cards have no renderer.
    pub fn render_token(&self) -> Result<RgbaImage, RenderError> {
        Err(RenderError::Unsupported("token rendering"))
    }
}
