//! Card image rendering: the layout table, font management, drawing
//! primitives and the per-variant renderers behind the [`Renderer`] facade.

pub mod brush;
pub mod engine;
pub mod fonts;
pub mod layout;
pub mod monster;
pub mod renderer;
pub mod spell;
pub mod text;
pub mod trap;

pub use fonts::{FontManager, FontStyle};
pub use layout::{Background, FontSpec, Layout};
pub use monster::MonsterRenderer;
pub use renderer::Renderer;
pub use spell::SpellRenderer;
pub use trap::TrapRenderer;

/// Rendering mode, inspected independently by each drawing primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderFlags {
    /// Normal compositing.
    #[default]
    Normal,
    /// Fill every declared bounding box with the proof color instead of
    /// drawing real content, to visually validate the layout geometry.
    LayoutProof,
    /// Force a transparent background so the composited elements can be
    /// compared against a photograph of a physical card.
    OverlayProof,
}
