use serde::Deserialize;

/// One entry of the server's `cards` dump, as served. Categories and rarities
/// stay raw strings here; `load` maps them into core enums.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDump {
    pub id: String,
    pub numeric_id: u8,
    pub name: String,
    pub category: String,
    pub rarity: String,
    pub tokens: TokenField,
}

/// The `tokens` field is an integer for fixed costs or the string `"wild"`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TokenField {
    Cost(u32),
    Keyword(String),
}
