//! Search/list state controller.
//!
//! A single actor task owns the debounce timer, the request counter and the
//! view state. The [`CardListController`] handle only forwards commands and
//! exposes watch channels for rendering.
//!
//! ```text
//! on_query_change ──→ restart timer ──(quiet for `debounce`)──→ fetch
//!                                                                 │
//!      watch<CardListState> ←── reducer ←── Resource (latest token only)
//! ```

use futures_util::StreamExt;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::card::Card;
use crate::config::SearchConfig;
use crate::scope::TaskScope;
use crate::ui::card_list::{CardListIntent, CardListReducer, CardListState};
use crate::ui::mvi::Reducer;
use crate::usecase::{GetCardsUseCase, Resource};

/// Search always starts from the first page.
pub const FIRST_PAGE: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerSettings {
    /// Quiet period after the last edit before a fetch is issued.
    pub debounce: Duration,
    pub page_size: u32,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(500),
            page_size: 20,
        }
    }
}

impl From<&SearchConfig> for ControllerSettings {
    fn from(search: &SearchConfig) -> Self {
        Self {
            debounce: Duration::from_millis(search.debounce_ms),
            page_size: search.page_size,
        }
    }
}

#[derive(Debug)]
enum Command {
    QueryChanged,
    Refresh,
}

#[derive(Debug)]
enum Event {
    TimerFired { generation: u64 },
    Progress { token: u64, resource: Resource<Vec<Card>> },
}

/// Handle to the card list controller.
///
/// Dropping the handle stops the actor; cancelling the scope additionally
/// stops any pending timer and in-flight fetch.
pub struct CardListController {
    commands: mpsc::UnboundedSender<Command>,
    query: watch::Sender<String>,
    state: watch::Receiver<CardListState>,
    scope: TaskScope,
}

impl CardListController {
    /// Create the controller and issue the initial fetch with an empty query.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(use_case: GetCardsUseCase, settings: ControllerSettings, scope: TaskScope) -> Self {
        let (commands_tx, commands_rx) = mpsc::unbounded_channel();
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (query_tx, query_rx) = watch::channel(String::new());
        let (state_tx, state_rx) = watch::channel(CardListState::default());

        let actor = Actor {
            use_case,
            settings,
            scope: scope.clone(),
            query: query_rx,
            state: CardListState::default(),
            state_tx,
            events_tx,
            timer: None,
            timer_generation: 0,
            latest_token: 0,
        };
        scope.spawn(actor.run(commands_rx, events_rx));

        Self {
            commands: commands_tx,
            query: query_tx,
            state: state_rx,
            scope,
        }
    }

    /// Replace the query and restart the debounce timer.
    pub fn on_query_change(&self, text: &str) {
        self.query.send_replace(text.to_string());
        self.send(Command::QueryChanged);
    }

    /// Fetch immediately with the current query, skipping the debounce.
    pub fn refresh(&self) {
        self.send(Command::Refresh);
    }

    pub fn query(&self) -> String {
        self.query.borrow().clone()
    }

    /// Snapshot of the current view state.
    pub fn state(&self) -> CardListState {
        self.state.borrow().clone()
    }

    /// Receiver that is notified on every state transition.
    pub fn subscribe(&self) -> watch::Receiver<CardListState> {
        self.state.clone()
    }

    pub fn scope(&self) -> &TaskScope {
        &self.scope
    }

    /// Cancel the controller's scope.
    pub fn shutdown(&self) {
        self.scope.cancel();
    }

    fn send(&self, command: Command) {
        if self.commands.send(command).is_err() {
            tracing::trace!("card list controller stopped, command dropped");
        }
    }
}

struct Actor {
    use_case: GetCardsUseCase,
    settings: ControllerSettings,
    scope: TaskScope,
    query: watch::Receiver<String>,
    state: CardListState,
    state_tx: watch::Sender<CardListState>,
    events_tx: mpsc::UnboundedSender<Event>,
    timer: Option<JoinHandle<Option<()>>>,
    timer_generation: u64,
    latest_token: u64,
}

impl Actor {
    async fn run(
        mut self,
        mut commands: mpsc::UnboundedReceiver<Command>,
        mut events: mpsc::UnboundedReceiver<Event>,
    ) {
        // The initial load is always unfiltered, even if an edit is queued.
        self.start_fetch(String::new());

        loop {
            tokio::select! {
                command = commands.recv() => match command {
                    Some(command) => self.on_command(command),
                    None => break,
                },
                Some(event) = events.recv() => self.on_event(event),
            }
        }

        self.cancel_timer();
        tracing::debug!("card list controller stopped");
    }

    fn on_command(&mut self, command: Command) {
        match command {
            Command::QueryChanged => self.restart_timer(),
            Command::Refresh => {
                self.cancel_timer();
                self.start_fetch(self.current_query());
            }
        }
    }

    fn on_event(&mut self, event: Event) {
        match event {
            Event::TimerFired { generation } => {
                if generation != self.timer_generation || self.timer.is_none() {
                    tracing::trace!(generation, "ignoring superseded debounce timer");
                    return;
                }
                self.timer = None;
                self.start_fetch(self.current_query());
            }
            Event::Progress { token, resource } => {
                if token != self.latest_token {
                    tracing::debug!(token, latest = self.latest_token, "dropping stale fetch result");
                    return;
                }
                let state = std::mem::take(&mut self.state);
                self.state = CardListReducer::reduce(state, CardListIntent::from(resource));
                self.state_tx.send_replace(self.state.clone());
            }
        }
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
        // Bumping the generation also invalidates a fire already queued.
        self.timer_generation += 1;
    }

    fn restart_timer(&mut self) {
        self.cancel_timer();
        let generation = self.timer_generation;
        let delay = self.settings.debounce;
        let events = self.events_tx.clone();
        self.timer = Some(self.scope.spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = events.send(Event::TimerFired { generation });
        }));
    }

    fn current_query(&self) -> String {
        self.query.borrow().clone()
    }

    fn start_fetch(&mut self, query: String) {
        if self.scope.is_cancelled() {
            return;
        }
        self.latest_token += 1;
        let token = self.latest_token;
        tracing::debug!(token, query = %query, "starting card fetch");

        let stream = self.use_case.run(&query, FIRST_PAGE, self.settings.page_size);
        let events = self.events_tx.clone();
        self.scope.spawn(async move {
            futures_util::pin_mut!(stream);
            while let Some(resource) = stream.next().await {
                if events.send(Event::Progress { token, resource }).is_err() {
                    break;
                }
            }
        });
    }
}
