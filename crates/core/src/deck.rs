use crate::{CardInfo, CardUniverse, TokenCost};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;

pub const DECK_SIZE: u32 = 42;
pub const OPENING_HAND_SIZE: u32 = 7;

/// Wild cards cost nothing until the fourth copy.
pub const FREE_WILD_CARDS: u32 = 3;

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("unknown card id: {0}")]
    UnknownCard(String),
}

/// Encode a deck as the shareable hash: one byte per card (its numeric id),
/// base64 with the standard alphabet. Ids missing from the universe are an
/// error, never substituted.
pub fn encode_deck<S: AsRef<str>>(
    ids: &[S],
    universe: &CardUniverse,
) -> Result<String, DeckError> {
    let mut bytes = Vec::with_capacity(ids.len());
    for id in ids {
        let card = universe
            .get(id.as_ref())
            .ok_or_else(|| DeckError::UnknownCard(id.as_ref().to_string()))?;
        bytes.push(card.numeric_id);
    }
    Ok(STANDARD.encode(bytes))
}

/// Decode a deck hash against a universe snapshot. Malformed base64 yields an
/// empty deck and bytes with no matching card are dropped; callers treat an
/// empty result as an invalid deck.
pub fn decode_hash<'a>(hash: &str, universe: &'a CardUniverse) -> Vec<&'a CardInfo> {
    let Ok(bytes) = STANDARD.decode(hash) else {
        return Vec::new();
    };
    bytes
        .into_iter()
        .filter_map(|numeric_id| universe.by_numeric_id(numeric_id))
        .collect()
}

/// Token cost of a decoded deck: literal sum of fixed costs, while wild cards
/// contribute only the count past the first three.
pub fn deck_cost(deck: &[&CardInfo]) -> u32 {
    let mut cost = 0;
    let mut wilds: u32 = 0;
    for card in deck {
        match card.cost {
            TokenCost::Tokens(tokens) => cost += tokens,
            TokenCost::Wild => wilds += 1,
        }
    }
    cost + wilds.saturating_sub(FREE_WILD_CARDS)
}
