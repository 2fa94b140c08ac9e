//! Name fill selection.
//!
//! Real prints use foil treatments for higher rarities; a flat fill color
//! stands in for each treatment here.

use image::Rgba;

use crate::model::Rarity;

pub const SOLID_BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
pub const SOLID_WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const GOLD_FOIL: Rgba<u8> = Rgba([197, 160, 38, 255]);
pub const SILVER_FOIL: Rgba<u8> = Rgba([168, 172, 180, 255]);

/// Name fill for a printed card: gold and silver foils by rarity, otherwise
/// black on monster frames and white on spell/trap frames.
///
/// Total over the input domain; rarities without a foil treatment fall
/// through to the frame default.
pub fn from_rarity(monster: bool, rarity: Rarity) -> Rgba<u8> {
    match rarity {
        Rarity::GoldRare | Rarity::UltraRare | Rarity::UltraParallelRare => GOLD_FOIL,
        Rarity::Rare => SILVER_FOIL,
        _ => {
            if monster {
                SOLID_BLACK
            } else {
                SOLID_WHITE
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_selection_table() {
        assert_eq!(from_rarity(true, Rarity::Common), SOLID_BLACK);
        assert_eq!(from_rarity(false, Rarity::Common), SOLID_WHITE);
        assert_eq!(from_rarity(true, Rarity::Rare), SILVER_FOIL);
        assert_eq!(from_rarity(false, Rarity::Rare), SILVER_FOIL);
        assert_eq!(from_rarity(true, Rarity::UltraRare), GOLD_FOIL);
        assert_eq!(from_rarity(false, Rarity::GoldRare), GOLD_FOIL);
        assert_eq!(from_rarity(true, Rarity::UltraParallelRare), GOLD_FOIL);
        // No foil treatment for these; frame default wins.
        assert_eq!(from_rarity(true, Rarity::SecretRare), SOLID_BLACK);
        assert_eq!(from_rarity(false, Rarity::SuperRare), SOLID_WHITE);
    }
}
