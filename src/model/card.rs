use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::Artwork;

/// Card attribute, shown as an icon in the upper-right corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Dark,
    Earth,
    Fire,
    Light,
    Wind,
    Water,
    Spell,
    Trap,
}

/// Monster species, printed as the first segment of the bracketed type line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MonsterType {
    Aqua,
    Beast,
    BeastWarrior,
    Dinosaur,
    Dragon,
    Fairy,
    Fiend,
    Fish,
    Insect,
    Machine,
    Plant,
    Pyro,
    Reptile,
    Rock,
    SeaSerpent,
    Spellcaster,
    Thunder,
    Warrior,
    WingedBeast,
    Zombie,
}

impl fmt::Display for MonsterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MonsterType::Aqua => "Aqua",
            MonsterType::Beast => "Beast",
            MonsterType::BeastWarrior => "Beast-Warrior",
            MonsterType::Dinosaur => "Dinosaur",
            MonsterType::Dragon => "Dragon",
            MonsterType::Fairy => "Fairy",
            MonsterType::Fiend => "Fiend",
            MonsterType::Fish => "Fish",
            MonsterType::Insect => "Insect",
            MonsterType::Machine => "Machine",
            MonsterType::Plant => "Plant",
            MonsterType::Pyro => "Pyro",
            MonsterType::Reptile => "Reptile",
            MonsterType::Rock => "Rock",
            MonsterType::SeaSerpent => "Sea Serpent",
            MonsterType::Spellcaster => "Spellcaster",
            MonsterType::Thunder => "Thunder",
            MonsterType::Warrior => "Warrior",
            MonsterType::WingedBeast => "Winged Beast",
            MonsterType::Zombie => "Zombie",
        };
        write!(f, "{}", name)
    }
}

/// Icon rendered inside a spell/trap header banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardIcon {
    Continuous,
    Counter,
    Equip,
    Field,
    QuickPlay,
    Ritual,
}

/// A card of any variant.
///
/// Closed set: the renderer dispatches exhaustively on this enum, so there is
/// no "unknown variant" path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Card {
    Monster(MonsterCard),
    Spell(SpellCard),
    Trap(TrapCard),
}

impl Card {
    pub fn name(&self) -> &str {
        match self {
            Card::Monster(c) => &c.name,
            Card::Spell(c) => &c.name,
            Card::Trap(c) => &c.name,
        }
    }

    pub fn passcode(&self) -> &str {
        match self {
            Card::Monster(c) => &c.passcode,
            Card::Spell(c) => &c.passcode,
            Card::Trap(c) => &c.passcode,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Card::Monster(c) => &c.text,
            Card::Spell(c) => &c.text,
            Card::Trap(c) => &c.text,
        }
    }

    /// The attribute icon for this card. Spell and trap cards always use
    /// their own fixed attribute.
    pub fn attribute(&self) -> Attribute {
        match self {
            Card::Monster(c) => c.attribute,
            Card::Spell(_) => Attribute::Spell,
            Card::Trap(_) => Attribute::Trap,
        }
    }

    pub fn artwork(&self) -> Option<&Artwork> {
        match self {
            Card::Monster(c) => c.artwork.as_ref(),
            Card::Spell(c) => c.artwork.as_ref(),
            Card::Trap(c) => c.artwork.as_ref(),
        }
    }

    pub fn set_artwork(&mut self, artwork: Artwork) {
        let slot = match self {
            Card::Monster(c) => &mut c.artwork,
            Card::Spell(c) => &mut c.artwork,
            Card::Trap(c) => &mut c.artwork,
        };
        *slot = Some(artwork);
    }

    pub fn is_monster(&self) -> bool {
        matches!(self, Card::Monster(_))
    }
}

/// A monster card with level, stats and sub-type flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonsterCard {
    pub name: String,
    #[serde(default)]
    pub passcode: String,
    #[serde(default)]
    pub text: String,
    pub attribute: Attribute,
    pub monster_type: MonsterType,
    pub level: u8,
    /// Negative values render as "?".
    pub attack: i32,
    /// Negative values render as "?".
    pub defense: i32,
    #[serde(default)]
    pub normal: bool,
    #[serde(default)]
    pub effect: bool,
    #[serde(default)]
    pub fusion: bool,
    #[serde(default)]
    pub ritual: bool,
    #[serde(default)]
    pub spirit: bool,
    #[serde(default)]
    pub toon: bool,
    #[serde(default)]
    pub union: bool,
    #[serde(default)]
    pub gemini: bool,
    #[serde(skip)]
    pub artwork: Option<Artwork>,
}

impl MonsterCard {
    /// Segments of the bracketed type line, e.g. `Dragon / Fusion / Effect`.
    ///
    /// The species always comes first; ability sub-types follow; "Effect"
    /// closes the list when the card has an effect.
    pub fn type_line(&self) -> String {
        let mut segments = vec![self.monster_type.to_string()];
        if self.fusion {
            segments.push("Fusion".to_string());
        }
        if self.ritual {
            segments.push("Ritual".to_string());
        }
        if self.spirit {
            segments.push("Spirit".to_string());
        }
        if self.toon {
            segments.push("Toon".to_string());
        }
        if self.union {
            segments.push("Union".to_string());
        }
        if self.gemini {
            segments.push("Gemini".to_string());
        }
        if self.effect {
            segments.push("Effect".to_string());
        }
        segments.join(" / ")
    }
}

/// A spell card with its sub-type flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpellCard {
    pub name: String,
    #[serde(default)]
    pub passcode: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub normal: bool,
    #[serde(default)]
    pub continuous: bool,
    #[serde(default)]
    pub equip: bool,
    #[serde(default)]
    pub field: bool,
    #[serde(default)]
    pub quick_play: bool,
    #[serde(default)]
    pub ritual: bool,
    #[serde(skip)]
    pub artwork: Option<Artwork>,
}

impl SpellCard {
    /// Header icon implied by the sub-type flags; normal spells have none.
    pub fn icon(&self) -> Option<CardIcon> {
        if self.continuous {
            Some(CardIcon::Continuous)
        } else if self.equip {
            Some(CardIcon::Equip)
        } else if self.field {
            Some(CardIcon::Field)
        } else if self.quick_play {
            Some(CardIcon::QuickPlay)
        } else if self.ritual {
            Some(CardIcon::Ritual)
        } else {
            None
        }
    }
}

/// A trap card with its sub-type flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrapCard {
    pub name: String,
    #[serde(default)]
    pub passcode: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub normal: bool,
    #[serde(default)]
    pub continuous: bool,
    #[serde(default)]
    pub counter: bool,
    #[serde(skip)]
    pub artwork: Option<Artwork>,
}

impl TrapCard {
    /// Header icon implied by the sub-type flags; normal traps have none.
    pub fn icon(&self) -> Option<CardIcon> {
        if self.continuous {
            Some(CardIcon::Continuous)
        } else if self.counter {
            Some(CardIcon::Counter)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monster() -> MonsterCard {
        MonsterCard {
            name: "Test Subject".to_string(),
            passcode: "12345678".to_string(),
            text: String::new(),
            attribute: Attribute::Dark,
            monster_type: MonsterType::Fiend,
            level: 4,
            attack: 1800,
            defense: 1000,
            normal: true,
            effect: false,
            fusion: false,
            ritual: false,
            spirit: false,
            toon: false,
            union: false,
            gemini: false,
            artwork: None,
        }
    }

    #[test]
    fn test_type_line_normal() {
        assert_eq!(monster().type_line(), "Fiend");
    }

    #[test]
    fn test_type_line_fusion_effect() {
        let mut card = monster();
        card.normal = false;
        card.fusion = true;
        card.effect = true;
        assert_eq!(card.type_line(), "Fiend / Fusion / Effect");
    }

    #[test]
    fn test_spell_trap_attribute_is_fixed() {
        let spell = Card::Spell(SpellCard {
            name: "S".to_string(),
            passcode: String::new(),
            text: String::new(),
            normal: true,
            continuous: false,
            equip: false,
            field: false,
            quick_play: false,
            ritual: false,
            artwork: None,
        });
        assert_eq!(spell.attribute(), Attribute::Spell);

        let trap = Card::Trap(TrapCard {
            name: "T".to_string(),
            passcode: String::new(),
            text: String::new(),
            normal: false,
            continuous: false,
            counter: true,
            artwork: None,
        });
        assert_eq!(trap.attribute(), Attribute::Trap);
        let Card::Trap(ref t) = trap else { unreachable!() };
        assert_eq!(t.icon(), Some(CardIcon::Counter));
    }
}
