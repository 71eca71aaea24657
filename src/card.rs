//! Domain model for a single trading card.

/// A card as the rest of the application sees it.
///
/// Cards are read-only projections of one page of API results; they are
/// only ever produced by mapping a wire record (see [`crate::api::CardDto`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// Identifier, unique within a result set.
    pub id: String,
    pub name: String,
    pub card_type: String,
    pub image_url: Option<String>,
    /// Rules text.
    pub text: Option<String>,
    pub rarity: Option<String>,
    pub set_name: Option<String>,
    pub artist: Option<String>,
    pub flavor_text: Option<String>,
}

impl Card {
    /// One-line summary used by compact list cells.
    pub fn subtitle(&self) -> String {
        match (&self.set_name, &self.rarity) {
            (Some(set), Some(rarity)) => format!("{} · {}", set, rarity),
            (Some(set), None) => set.clone(),
            (None, Some(rarity)) => rarity.clone(),
            (None, None) => self.card_type.clone(),
        }
    }
}
