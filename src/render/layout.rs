//! The layout table: every coordinate, size, font and embedded asset used to
//! compose a card image at one output resolution.
//!
//! Only the "medium" 846×1245 layout exists. Additional resolutions would be
//! further constructors on [`Layout`], not a trait hierarchy — the table is
//! plain data.

use std::collections::HashMap;

use image::{Rgba, RgbaImage};
use imageproc::rect::Rect;

use crate::error::RenderError;
use crate::model::{Attribute, CardIcon};
use crate::render::fonts::FontStyle;

/// Background frame variants a card can be composed onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Background {
    NormalMonster,
    EffectMonster,
    FusionMonster,
    RitualMonster,
    Spell,
    Trap,
    Token,
    Transparent,
}

/// Font selection for one text element: the family is resolved through the
/// `FontManager`, the pixel size is applied at draw time.
#[derive(Debug, Clone, Copy)]
pub struct FontSpec {
    pub family: &'static str,
    pub style: FontStyle,
    pub size: f32,
}

/// Immutable geometry/typography table plus the decoded embedded assets.
///
/// Constructed once (see [`Layout::medium`]) and shared by reference across
/// every render call; nothing here mutates after construction.
pub struct Layout {
    pub canvas_width: u32,
    pub canvas_height: u32,

    backgrounds: HashMap<Background, RgbaImage>,
    attributes: HashMap<Attribute, RgbaImage>,
    icons: HashMap<CardIcon, RgbaImage>,
    star: RgbaImage,
    hologram: RgbaImage,
    default_artwork: RgbaImage,

    pub name_bounds: Rect,
    pub attribute_bounds: Rect,
    pub artwork_bounds: Rect,
    /// Spell/trap "[ Header ]" banner row.
    pub header_bounds: Rect,
    pub icon_bounds: Rect,
    /// Row the level stars right-align into when they fit.
    pub star_bounds: Rect,
    pub star_size: u32,
    pub star_padding: u32,
    pub type_line_bounds: Rect,
    pub monster_text_bounds: Rect,
    pub spell_text_bounds: Rect,
    pub attack_bounds: Rect,
    pub defense_bounds: Rect,
    pub set_code_bounds: Rect,
    pub passcode_bounds: Rect,
    pub copyright_bounds: Rect,
    pub hologram_bounds: Rect,

    pub name_font: FontSpec,
    pub header_font: FontSpec,
    pub type_line_font: FontSpec,
    pub text_font: FontSpec,
    /// Lower limit for the body-text shrink-to-fit loop.
    pub text_min_size: f32,
    pub stats_font: FontSpec,
    pub set_code_font: FontSpec,
    pub passcode_font: FontSpec,
    pub copyright_font: FontSpec,

    pub copyright_text: &'static str,
}

fn decode_asset(name: &'static str, bytes: &[u8]) -> Result<RgbaImage, RenderError> {
    image::load_from_memory(bytes)
        .map(|img| img.to_rgba8())
        .map_err(|e| RenderError::AssetDecode {
            name,
            message: e.to_string(),
        })
}

macro_rules! asset {
    ($name:literal, $path:literal) => {
        decode_asset($name, include_bytes!(concat!("../../assets/", $path)))?
    };
}

impl Layout {
    /// The medium (846×1245) card layout.
    pub fn medium() -> Result<Self, RenderError> {
        let mut backgrounds = HashMap::new();
        backgrounds.insert(
            Background::NormalMonster,
            asset!("normal_monster", "backgrounds/normal_monster.png"),
        );
        backgrounds.insert(
            Background::EffectMonster,
            asset!("effect_monster", "backgrounds/effect_monster.png"),
        );
        backgrounds.insert(
            Background::FusionMonster,
            asset!("fusion_monster", "backgrounds/fusion_monster.png"),
        );
        backgrounds.insert(
            Background::RitualMonster,
            asset!("ritual_monster", "backgrounds/ritual_monster.png"),
        );
        backgrounds.insert(Background::Spell, asset!("spell", "backgrounds/spell.png"));
        backgrounds.insert(Background::Trap, asset!("trap", "backgrounds/trap.png"));
        backgrounds.insert(Background::Token, asset!("token", "backgrounds/token.png"));

        let mut attributes = HashMap::new();
        attributes.insert(Attribute::Dark, asset!("dark", "attributes/dark.png"));
        attributes.insert(Attribute::Earth, asset!("earth", "attributes/earth.png"));
        attributes.insert(Attribute::Fire, asset!("fire", "attributes/fire.png"));
        attributes.insert(Attribute::Light, asset!("light", "attributes/light.png"));
        attributes.insert(Attribute::Wind, asset!("wind", "attributes/wind.png"));
        attributes.insert(Attribute::Water, asset!("water", "attributes/water.png"));
        attributes.insert(Attribute::Spell, asset!("spell_attr", "attributes/spell.png"));
        attributes.insert(Attribute::Trap, asset!("trap_attr", "attributes/trap.png"));

        let mut icons = HashMap::new();
        icons.insert(
            CardIcon::Continuous,
            asset!("continuous", "icons/continuous.png"),
        );
        icons.insert(CardIcon::Counter, asset!("counter", "icons/counter.png"));
        icons.insert(CardIcon::Equip, asset!("equip", "icons/equip.png"));
        icons.insert(CardIcon::Field, asset!("field", "icons/field.png"));
        icons.insert(
            CardIcon::QuickPlay,
            asset!("quick_play", "icons/quick_play.png"),
        );
        icons.insert(CardIcon::Ritual, asset!("ritual", "icons/ritual.png"));

        Ok(Self {
            canvas_width: 846,
            canvas_height: 1245,

            backgrounds,
            attributes,
            icons,
            star: asset!("star", "star.png"),
            hologram: asset!("hologram", "hologram.png"),
            default_artwork: asset!("artwork_default", "artwork_default.png"),

            name_bounds: Rect::at(69, 68).of_size(630, 90),
            attribute_bounds: Rect::at(711, 77).of_size(72, 72),
            artwork_bounds: Rect::at(98, 250).of_size(650, 650),
            header_bounds: Rect::at(91, 172).of_size(664, 60),
            icon_bounds: Rect::at(640, 175).of_size(55, 55),
            star_bounds: Rect::at(195, 180).of_size(560, 50),
            star_size: 50,
            star_padding: 4,
            type_line_bounds: Rect::at(66, 920).of_size(714, 44),
            monster_text_bounds: Rect::at(66, 970).of_size(714, 135),
            spell_text_bounds: Rect::at(66, 930).of_size(714, 175),
            attack_bounds: Rect::at(420, 1116).of_size(180, 40),
            defense_bounds: Rect::at(606, 1116).of_size(174, 40),
            set_code_bounds: Rect::at(480, 872).of_size(300, 36),
            passcode_bounds: Rect::at(38, 1197).of_size(240, 32),
            copyright_bounds: Rect::at(400, 1197).of_size(360, 32),
            hologram_bounds: Rect::at(776, 1175).of_size(44, 44),

            name_font: FontSpec {
                family: "DejaVu Serif",
                style: FontStyle::Bold,
                size: 64.0,
            },
            header_font: FontSpec {
                family: "DejaVu Sans",
                style: FontStyle::Bold,
                size: 40.0,
            },
            type_line_font: FontSpec {
                family: "DejaVu Serif",
                style: FontStyle::Bold,
                size: 32.0,
            },
            text_font: FontSpec {
                family: "DejaVu Serif",
                style: FontStyle::Regular,
                size: 27.0,
            },
            text_min_size: 18.0,
            stats_font: FontSpec {
                family: "DejaVu Sans",
                style: FontStyle::Bold,
                size: 34.0,
            },
            set_code_font: FontSpec {
                family: "DejaVu Sans",
                style: FontStyle::Regular,
                size: 26.0,
            },
            passcode_font: FontSpec {
                family: "DejaVu Sans",
                style: FontStyle::Regular,
                size: 24.0,
            },
            copyright_font: FontSpec {
                family: "DejaVu Sans",
                style: FontStyle::Regular,
                size: 24.0,
            },

            copyright_text: "\u{00A9}2026 Cardsmith Games",
        })
    }

    /// A fresh canvas-sized bitmap for the requested background variant.
    ///
    /// `Transparent` allocates a new fully transparent canvas on every call;
    /// the other variants clone their decoded asset so the caller owns a
    /// mutable canvas to composite onto.
    pub fn background(&self, background: Background) -> RgbaImage {
        match background {
            Background::Transparent => RgbaImage::from_pixel(
                self.canvas_width,
                self.canvas_height,
                Rgba([0, 0, 0, 0]),
            ),
            _ => self.backgrounds[&background].clone(),
        }
    }

    pub fn attribute_icon(&self, attribute: Attribute) -> &RgbaImage {
        &self.attributes[&attribute]
    }

    pub fn card_icon(&self, icon: CardIcon) -> &RgbaImage {
        &self.icons[&icon]
    }

    pub fn star(&self) -> &RgbaImage {
        &self.star
    }

    pub fn hologram(&self) -> &RgbaImage {
        &self.hologram
    }

    /// Placeholder drawn when a card has no artwork of its own.
    pub fn default_artwork(&self) -> &RgbaImage {
        &self.default_artwork
    }
}
