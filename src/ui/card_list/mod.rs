//! Card list screen state.
//!
//! - `state.rs` - the view state rendered by the list screen
//! - `intent.rs` - fetch progress events
//! - `reducer.rs` - projection of fetch progress into view state

mod intent;
mod reducer;
mod state;

pub use intent::CardListIntent;
pub use reducer::CardListReducer;
pub use state::CardListState;
