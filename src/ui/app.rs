use crate::card::Card;
use crate::controller::CardListController;
use crate::ui::card_list::CardListState;
use crate::ui::layout::grid_columns;
use crate::ui::route::Route;

/// Direction for moving the card selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Left,
    Right,
    Up,
    Down,
}

pub struct App {
    should_quit: bool,
    route: Route,
    controller: CardListController,
    /// Last state published by the controller.
    state: CardListState,
    /// Index into `state.cards`; featured cards come first.
    selection: usize,
    featured_count: usize,
    size: Option<(u16, u16)>,
    animation_tick: u8,
}

impl App {
    pub fn new(controller: CardListController, featured_count: usize) -> Self {
        let state = controller.state();
        Self {
            should_quit: false,
            route: Route::CardList,
            controller,
            state,
            selection: 0,
            featured_count: featured_count.max(1),
            size: None,
            animation_tick: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn state(&self) -> &CardListState {
        &self.state
    }

    pub fn query(&self) -> String {
        self.controller.query()
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn featured_count(&self) -> usize {
        self.featured_count
    }

    pub fn controller(&self) -> &CardListController {
        &self.controller
    }

    pub fn animation_tick(&self) -> u8 {
        self.animation_tick
    }

    pub fn on_tick(&mut self) {
        if self.state.is_loading {
            self.animation_tick = self.animation_tick.wrapping_add(1);
        }
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    pub fn grid_columns(&self) -> usize {
        self.size.map(|(cols, _)| grid_columns(cols)).unwrap_or(1)
    }

    /// Pull the latest view state from the controller.
    pub fn on_state_changed(&mut self) {
        self.state = self.controller.state();
        let len = self.state.cards.len();
        if len == 0 {
            self.selection = 0;
        } else if self.selection >= len {
            self.selection = len - 1;
        }
    }

    // -- Search ---------------------------------------------------------------

    pub fn push_query_char(&mut self, c: char) {
        let mut query = self.controller.query();
        query.push(c);
        self.set_query(query);
    }

    pub fn pop_query_char(&mut self) {
        let mut query = self.controller.query();
        if query.pop().is_some() {
            self.set_query(query);
        }
    }

    pub fn clear_query(&mut self) {
        if !self.controller.query().is_empty() {
            self.set_query(String::new());
        }
    }

    fn set_query(&mut self, query: String) {
        self.selection = 0;
        self.controller.on_query_change(&query);
    }

    pub fn refresh(&mut self) {
        self.controller.refresh();
    }

    // -- Selection & navigation -----------------------------------------------

    pub fn selected_card(&self) -> Option<&Card> {
        self.state.cards.get(self.selection)
    }

    pub fn move_selection(&mut self, direction: Move) {
        let total = self.state.cards.len();
        if total == 0 {
            return;
        }
        let featured = self.featured_count.min(total);
        let cols = self.grid_columns();
        let sel = self.selection.min(total - 1);

        self.selection = match direction {
            Move::Left => sel.saturating_sub(1),
            Move::Right => (sel + 1).min(total - 1),
            Move::Down if sel < featured => featured.min(total - 1),
            Move::Down => (sel + cols).min(total - 1),
            Move::Up if sel < featured => sel,
            // First grid row goes back up to the featured strip.
            Move::Up if sel - featured < cols => featured.saturating_sub(1),
            Move::Up => sel - cols,
        };
    }

    /// Open the selected card's detail screen.
    pub fn activate_selection(&mut self) {
        if let Some(card_id) = self.selected_card().map(|card| card.id.clone()) {
            self.open_details(&card_id);
        }
    }

    /// Navigation callback: show the detail screen for `card_id`.
    pub fn open_details(&mut self, card_id: &str) {
        tracing::debug!(card_id, "opening card details");
        self.route = Route::card_details(card_id);
    }

    pub fn back(&mut self) {
        self.route = Route::CardList;
    }

    /// Card shown on the detail route, if it is still in the current list.
    pub fn detail_card(&self) -> Option<&Card> {
        match &self.route {
            Route::CardDetails { card_id } => self.state.find(card_id),
            Route::CardList => None,
        }
    }

    /// Stop the controller and everything it spawned.
    pub fn teardown(&self) {
        self.controller.shutdown();
    }
}
