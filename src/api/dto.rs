//! Wire records returned by the card API and their mapping to [`Card`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::card::Card;

/// Top-level response body of `GET /cards`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardResponseDto {
    pub cards: Vec<CardDto>,
}

/// Numeric identifiers arrive as either strings or numbers depending on the
/// API version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireId {
    Text(String),
    Number(u64),
}

impl fmt::Display for WireId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireId::Text(s) => f.write_str(s),
            WireId::Number(n) => write!(f, "{}", n),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForeignNameDto {
    pub name: Option<String>,
    pub language: Option<String>,
    pub multiverseid: Option<WireId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RulingDto {
    pub date: Option<String>,
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegalityDto {
    pub format: Option<String>,
    pub legality: Option<String>,
}

/// A single card record as sent by the API.
///
/// `name` and `type` are required; a record without them fails the whole
/// page. Everything else is optional and `null` is treated as absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDto {
    pub name: String,
    #[serde(rename = "type")]
    pub card_type: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub multiverseid: Option<WireId>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub rarity: Option<String>,
    /// Set code, e.g. `"LEA"`.
    #[serde(default)]
    pub set: Option<String>,
    /// Human readable set name, e.g. `"Limited Edition Alpha"`.
    #[serde(default)]
    pub set_name: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub flavor: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub mana_cost: Option<String>,
    #[serde(default)]
    pub cmc: Option<f64>,
    #[serde(default)]
    pub colors: Option<Vec<String>>,
    #[serde(default)]
    pub types: Option<Vec<String>>,
    #[serde(default)]
    pub subtypes: Option<Vec<String>>,
    #[serde(default)]
    pub power: Option<String>,
    #[serde(default)]
    pub toughness: Option<String>,
    #[serde(default)]
    pub foreign_names: Option<Vec<ForeignNameDto>>,
    #[serde(default)]
    pub rulings: Option<Vec<RulingDto>>,
    #[serde(default)]
    pub legalities: Option<Vec<LegalityDto>>,
}

impl CardDto {
    /// Identifier for the domain record.
    ///
    /// Falls back from the API `id` to `multiverseid`, then to a key built
    /// from set, collector number and name.
    pub fn derive_id(&self) -> String {
        if let Some(id) = self.id.as_deref().filter(|id| !id.is_empty()) {
            return id.to_string();
        }
        if let Some(multiverseid) = &self.multiverseid {
            let text = multiverseid.to_string();
            if !text.is_empty() {
                return text;
            }
        }
        format!(
            "{}:{}:{}",
            self.set.as_deref().unwrap_or_default(),
            self.number.as_deref().unwrap_or_default(),
            self.name
        )
    }

    /// Maps the wire record to a domain [`Card`]. Pure.
    pub fn to_card(&self) -> Card {
        Card {
            id: self.derive_id(),
            name: self.name.clone(),
            card_type: self.card_type.clone(),
            image_url: non_empty(&self.image_url),
            text: non_empty(&self.text),
            rarity: non_empty(&self.rarity),
            set_name: non_empty(&self.set_name).or_else(|| non_empty(&self.set)),
            artist: non_empty(&self.artist),
            flavor_text: non_empty(&self.flavor),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}
