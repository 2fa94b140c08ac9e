use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::Artwork;

/// Rarity of a specific printing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rarity {
    #[default]
    Common,
    ShortPrint,
    Rare,
    SuperRare,
    UltraRare,
    UltimateRare,
    SecretRare,
    GhostRare,
    ParallelRare,
    UltraParallelRare,
    GoldRare,
}

/// One historical printing of a card: the set it appeared in, its position
/// within that set, and the rarity it was printed at.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Print {
    pub set_name: String,
    /// Series prefix of the set code, e.g. "LOB".
    pub set_code: String,
    /// Position within the set.
    pub number: u16,
    #[serde(default)]
    pub rarity: Rarity,
    /// Print-specific artwork override; falls back to the card's artwork.
    #[serde(skip)]
    pub artwork: Option<Artwork>,
}

impl Print {
    /// Full set code as printed on the card, e.g. "LOB-001".
    pub fn code(&self) -> String {
        format!("{}-{:03}", self.set_code, self.number)
    }
}

impl fmt::Display for Print {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
