use crossterm::event::Event;

pub enum AppEvent {
    Input(Event),
    InputError(std::io::Error),
}
