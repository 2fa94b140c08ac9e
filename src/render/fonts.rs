//! Font management over the embedded typeface payloads.
//!
//! The renderer ships its fonts as build-time assets; nothing is looked up
//! from the host system. Unknown family names silently degrade to the
//! generic sans-serif family so a bad font spec can never fail a render.

use std::collections::HashMap;

use ab_glyph::FontArc;

use crate::error::RenderError;
use crate::render::layout::FontSpec;

const DEJAVU_SANS: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");
const DEJAVU_SANS_BOLD: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans-Bold.ttf");
const DEJAVU_SERIF: &[u8] = include_bytes!("../../assets/fonts/DejaVuSerif.ttf");
const DEJAVU_SERIF_BOLD: &[u8] = include_bytes!("../../assets/fonts/DejaVuSerif-Bold.ttf");

/// Family used when a requested family is not embedded.
const FALLBACK_FAMILY: &str = "dejavu sans";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Regular,
    Bold,
}

/// Regular and bold faces of one family.
struct FontSet {
    regular: FontArc,
    bold: FontArc,
}

/// In-memory collection of the embedded font families.
pub struct FontManager {
    families: HashMap<String, FontSet>,
}

fn parse_font(name: &'static str, bytes: &'static [u8]) -> Result<FontArc, RenderError> {
    FontArc::try_from_slice(bytes)
        .map_err(|e| RenderError::FontLoad(format!("{}: {}", name, e)))
}

impl FontManager {
    /// Parse every embedded payload. Fails only on a malformed payload,
    /// which is a packaging defect rather than a runtime condition.
    pub fn new() -> Result<Self, RenderError> {
        let mut families = HashMap::new();
        families.insert(
            "dejavu sans".to_string(),
            FontSet {
                regular: parse_font("DejaVuSans.ttf", DEJAVU_SANS)?,
                bold: parse_font("DejaVuSans-Bold.ttf", DEJAVU_SANS_BOLD)?,
            },
        );
        families.insert(
            "dejavu serif".to_string(),
            FontSet {
                regular: parse_font("DejaVuSerif.ttf", DEJAVU_SERIF)?,
                bold: parse_font("DejaVuSerif-Bold.ttf", DEJAVU_SERIF_BOLD)?,
            },
        );
        Ok(Self { families })
    }

    /// Font for a family name and style.
    ///
    /// The lookup is case-insensitive; an unknown family falls back to the
    /// sans-serif family at the requested style. Never an error.
    pub fn create(&self, family: &str, style: FontStyle) -> &FontArc {
        let set = self
            .families
            .get(&family.to_lowercase())
            .unwrap_or_else(|| &self.families[FALLBACK_FAMILY]);
        match style {
            FontStyle::Regular => &set.regular,
            FontStyle::Bold => &set.bold,
        }
    }

    /// Font for a layout [`FontSpec`].
    pub fn for_spec(&self, spec: &FontSpec) -> &FontArc {
        self.create(spec.family, spec.style)
    }
}
