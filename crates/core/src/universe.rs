use crate::CardInfo;
use std::collections::HashMap;

/// Immutable snapshot of every card the remote game knows about, indexed by
/// text id and by the numeric id used in deck hashes. Always passed by
/// reference; nothing in this crate holds a universe of its own.
#[derive(Debug, Clone, Default)]
pub struct CardUniverse {
    cards: Vec<CardInfo>,
    by_id: HashMap<String, usize>,
    by_numeric: HashMap<u8, usize>,
}

impl CardUniverse {
    /// Duplicate text or numeric ids keep the first occurrence.
    pub fn from_cards(cards: Vec<CardInfo>) -> Self {
        let mut universe = Self::default();
        for card in cards {
            universe.insert(card);
        }
        universe
    }

    fn insert(&mut self, card: CardInfo) {
        if self.by_id.contains_key(&card.id) || self.by_numeric.contains_key(&card.numeric_id) {
            return;
        }
        let idx = self.cards.len();
        self.by_id.insert(card.id.clone(), idx);
        self.by_numeric.insert(card.numeric_id, idx);
        self.cards.push(card);
    }

    pub fn get(&self, id: &str) -> Option<&CardInfo> {
        self.by_id.get(id).map(|&idx| &self.cards[idx])
    }

    pub fn by_numeric_id(&self, numeric_id: u8) -> Option<&CardInfo> {
        self.by_numeric.get(&numeric_id).map(|&idx| &self.cards[idx])
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CardInfo> {
        self.cards.iter()
    }
}
