//! Rendering of the list and detail screens into an in-memory terminal.

mod common;

use cardlister::ui::app::App;
use cardlister::ui::render::draw;
use common::{advance, cards, controller_for, Outcome, RecordingRepository};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::time::Duration;

fn screen(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    screen(&terminal)
}

async fn app_with(outcome: Outcome) -> (App, std::sync::Arc<RecordingRepository>) {
    let repo = RecordingRepository::with_default(outcome);
    let (controller, _scope) = controller_for(&repo);
    let mut app = App::new(controller, 2);
    app.on_resize(100, 24);
    advance(1).await;
    app.on_state_changed();
    (app, repo)
}

#[tokio::test(start_paused = true)]
async fn list_shows_featured_strip_and_grid() {
    let (app, _repo) = app_with(Outcome::Cards(cards("card", 4))).await;
    let text = render(&app);

    assert!(text.contains("Featured Cards"));
    assert!(text.contains("Latest Additions"));
    assert!(text.contains("card 1"));
    assert!(text.contains("card 4"));
    assert!(text.contains("4 cards"));
    assert!(text.contains("Search cards by name"));
}

#[tokio::test(start_paused = true)]
async fn empty_result_shows_placeholder() {
    let (app, _repo) = app_with(Outcome::Cards(Vec::new())).await;
    assert!(render(&app).contains("No cards found."));
}

#[tokio::test(start_paused = true)]
async fn error_is_shown_in_header() {
    let (app, _repo) = app_with(Outcome::ApiError("HTTP 503: Service Unavailable".into())).await;
    assert!(render(&app).contains("HTTP 503: Service Unavailable"));
}

#[tokio::test(start_paused = true)]
async fn loading_placeholder_before_first_result() {
    let repo = RecordingRepository::with_default(Outcome::Cards(cards("card", 1)));
    repo.set_default_delay(Duration::from_millis(500));
    let (controller, _scope) = controller_for(&repo);
    let mut app = App::new(controller, 2);
    advance(1).await;
    app.on_state_changed();

    assert!(render(&app).contains("Loading cards..."));
}

#[tokio::test(start_paused = true)]
async fn details_screen_lists_card_fields() {
    let (mut app, _repo) = app_with(Outcome::Cards(cards("card", 3))).await;
    app.open_details("card-3");

    let text = render(&app);
    assert!(text.contains("Card Details"));
    assert!(text.contains("card 3"));
    assert!(text.contains("Rarity"));
    assert!(text.contains("Alpha"));
    assert!(text.contains("Esc: Back"));
}

#[tokio::test(start_paused = true)]
async fn details_for_unknown_card_shows_notice() {
    let (mut app, _repo) = app_with(Outcome::Cards(cards("card", 1))).await;
    app.open_details("gone");
    assert!(render(&app).contains("no longer in the current results"));
}
