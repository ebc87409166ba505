pub mod components;
pub mod layout;
pub mod utils;

use crate::app::App;
use layout::ContentRegion;
use ratatui::Frame;

pub fn ui(f: &mut Frame, app: &App) {
    let main_layout = layout::get_main_layout(f.area());

    // Body: whichever region the layout controller currently holds.
    match app.layout().content() {
        ContentRegion::ResultList => components::results::render(f, main_layout.body_area, app),
        ContentRegion::LyricsPanel { title } => {
            components::lyrics::render(f, main_layout.body_area, app, title)
        }
        ContentRegion::Blank => {}
    }

    components::status::render(f, main_layout.footer_area, app);
}
