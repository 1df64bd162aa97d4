use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CardCategory {
    Hermit,
    Effect,
    Item,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Common,
    Rare,
    UltraRare,
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::UltraRare => "Ultra rare",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TokenCost {
    Tokens(u32),
    Wild,
}

impl TokenCost {
    pub fn is_wild(self) -> bool {
        matches!(self, TokenCost::Wild)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CardInfo {
    pub id: String,
    pub numeric_id: u8,
    pub name: String,
    pub category: CardCategory,
    pub rarity: Rarity,
    pub cost: TokenCost,
}

impl CardInfo {
    pub fn rarity_name(&self) -> String {
        format!("{} ({})", self.name, self.rarity)
    }
}
