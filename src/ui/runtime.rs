use std::io;
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;

use ratatui::layout::Rect;

use crate::api::{CardApiClient, FetchError};
use crate::config::Config;
use crate::controller::{CardListController, ControllerSettings};
use crate::repository::ApiCardRepository;
use crate::scope::TaskScope;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::layout::body_rect;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::usecase::GetCardsUseCase;

/// Build the controller for `config` inside `scope`.
///
/// Must be called from within a Tokio runtime.
pub fn build_controller(config: &Config, scope: TaskScope) -> Result<CardListController, FetchError> {
    let client = CardApiClient::from_config(&config.api)?;
    let repository = Arc::new(ApiCardRepository::new(client));
    let use_case = GetCardsUseCase::new(repository);
    Ok(CardListController::new(
        use_case,
        ControllerSettings::from(&config.search),
        scope,
    ))
}

/// Run the terminal UI until the user quits.
///
/// The caller must have entered a Tokio runtime; the UI loop itself runs on
/// the current thread while fetches run on the runtime's workers.
pub fn run(config: &Config, scope: TaskScope) -> io::Result<()> {
    let controller = build_controller(config, scope.child())
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err.to_string()))?;

    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(120);
    let events = EventHandler::new(tick_rate);
    forward_state_changes(&controller, events.sender());

    let mut app = App::new(controller, config.search.featured_count);
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        resize(&mut app, cols, rows);
    }

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => resize(&mut app, cols, rows),
            Ok(AppEvent::StateChanged) => app.on_state_changed(),
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    app.teardown();
    drop(guard);
    Ok(())
}

fn resize(app: &mut App, cols: u16, rows: u16) {
    let body = body_rect(Rect {
        x: 0,
        y: 0,
        width: cols,
        height: rows,
    });
    app.on_resize(body.width.max(1), body.height.max(1));
}

/// Relay controller state transitions into the UI event queue.
fn forward_state_changes(controller: &CardListController, tx: mpsc::Sender<AppEvent>) {
    let mut states = controller.subscribe();
    controller.scope().spawn(async move {
        while states.changed().await.is_ok() {
            if tx.send(AppEvent::StateChanged).is_err() {
                break;
            }
        }
    });
}
