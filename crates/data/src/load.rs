use crate::schema::{CardDump, TokenField};
use anyhow::{bail, Context};
use deckhand_core::{CardCategory, CardInfo, CardUniverse, Rarity, TokenCost};
use std::fs;
use std::path::Path;

pub fn load_cards(path: &Path) -> anyhow::Result<CardUniverse> {
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    parse_cards(&raw).with_context(|| format!("parse {}", path.display()))
}

pub fn parse_cards(raw: &str) -> anyhow::Result<CardUniverse> {
    let dumps: Vec<CardDump> = serde_json::from_str(raw).context("parse card dump")?;
    let mut cards = Vec::with_capacity(dumps.len());
    for dump in dumps {
        cards.push(card_from_dump(dump)?);
    }
    Ok(CardUniverse::from_cards(cards))
}

fn card_from_dump(dump: CardDump) -> anyhow::Result<CardInfo> {
    let category = match dump.category.as_str() {
        "hermit" => CardCategory::Hermit,
        "attach" | "single_use" => CardCategory::Effect,
        "item" => CardCategory::Item,
        other => bail!("invalid category for {}: {other}", dump.id),
    };
    let rarity = match dump.rarity.as_str() {
        "common" => Rarity::Common,
        "rare" => Rarity::Rare,
        "ultra_rare" => Rarity::UltraRare,
        other => bail!("invalid rarity for {}: {other}", dump.id),
    };
    let cost = match dump.tokens {
        TokenField::Cost(tokens) => TokenCost::Tokens(tokens),
        TokenField::Keyword(keyword) if keyword == "wild" => TokenCost::Wild,
        TokenField::Keyword(keyword) => bail!("invalid token cost for {}: {keyword}", dump.id),
    };
    Ok(CardInfo {
        id: dump.id,
        numeric_id: dump.numeric_id,
        name: dump.name,
        category,
        rarity,
        cost,
    })
}
