//! View state for the card list screen.

use crate::card::Card;
use crate::ui::mvi::UiState;

/// Everything the list screen needs to draw itself.
///
/// A fresh fetch clears `error`; a finished fetch clears `is_loading`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CardListState {
    pub is_loading: bool,
    pub cards: Vec<Card>,
    /// Empty when there is nothing to report.
    pub error: String,
}

impl UiState for CardListState {}

impl CardListState {
    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }

    /// The first `count` cards, shown in the featured strip.
    pub fn featured(&self, count: usize) -> &[Card] {
        &self.cards[..count.min(self.cards.len())]
    }

    /// Cards after the featured strip, shown in the grid.
    pub fn latest(&self, count: usize) -> &[Card] {
        &self.cards[count.min(self.cards.len())..]
    }

    pub fn find(&self, card_id: &str) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == card_id)
    }
}
