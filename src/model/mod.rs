//! Card data consumed by the renderer.
//!
//! These types are read-only as far as rendering is concerned: the renderer
//! takes a fully populated card (and optionally one of its prints) and never
//! mutates it. The structs also carry the serde derives used by the CLI to
//! read a card description from JSON.

pub mod artwork;
pub mod card;
pub mod print;

pub use artwork::Artwork;
pub use card::{Attribute, Card, CardIcon, MonsterCard, MonsterType, SpellCard, TrapCard};
pub use print::{Print, Rarity};

use serde::{Deserialize, Serialize};

/// Top-level shape of a card JSON file: the card itself plus an optional
/// print to render it as.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardFile {
    pub card: Card,
    #[serde(default)]
    pub print: Option<Print>,
}
