use ratatui::widgets::Clear;
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::details_view::render_details;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::list_view::render_list;
use crate::ui::route::Route;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.state(), app.animation_tick()), header);
    frame.render_widget(Clear, body);

    match app.route() {
        Route::CardList => render_list(frame, body, app),
        Route::CardDetails { .. } => render_details(frame, body, app.detail_card()),
    }

    frame.render_widget(Footer::new().widget(app.route(), footer), footer);
}
