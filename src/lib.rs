pub mod app;
pub mod error;
pub mod lyrics;
pub mod theme;
pub mod tui;
pub mod ui;

pub use error::{Error, Result};
