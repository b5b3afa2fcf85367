//! Ratatui front-end: application state in `app`, the crossterm event loop
//! in `terminal`, and grid/layout helpers shared between them.

mod app;
mod helpers;
mod terminal;

pub use app::App;
pub use terminal::run_app;
