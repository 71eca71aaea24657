//! Intents for the card list state.

use crate::card::Card;
use crate::ui::mvi::Intent;
use crate::usecase::Resource;

#[derive(Debug, Clone)]
pub enum CardListIntent {
    /// A fetch attempt started.
    FetchStarted,

    /// The current fetch attempt returned a page of cards.
    FetchSucceeded { cards: Vec<Card> },

    /// The current fetch attempt failed.
    FetchFailed { message: String },
}

impl Intent for CardListIntent {}

impl From<Resource<Vec<Card>>> for CardListIntent {
    fn from(resource: Resource<Vec<Card>>) -> Self {
        match resource {
            Resource::Loading => CardListIntent::FetchStarted,
            Resource::Success(cards) => CardListIntent::FetchSucceeded { cards },
            Resource::Error(message) => CardListIntent::FetchFailed { message },
        }
    }
}
