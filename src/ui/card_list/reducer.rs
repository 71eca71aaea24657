//! Reducer for the card list state.

use crate::ui::mvi::Reducer;

use super::intent::CardListIntent;
use super::state::CardListState;

/// Projects fetch progress 1:1 into a replacement state.
pub struct CardListReducer;

impl Reducer for CardListReducer {
    type State = CardListState;
    type Intent = CardListIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // Previous cards stay visible while loading.
            CardListIntent::FetchStarted => CardListState {
                is_loading: true,
                cards: state.cards,
                error: String::new(),
            },

            CardListIntent::FetchSucceeded { cards } => CardListState {
                is_loading: false,
                cards,
                error: String::new(),
            },

            CardListIntent::FetchFailed { message } => CardListState {
                is_loading: false,
                cards: state.cards,
                error: message,
            },
        }
    }
}
