// Terminal UI implementation using ratatui
// Profile card on top, repository table below

pub mod app;
pub mod runner;
pub mod ui;

pub use app::{Action, App, ErrorBanner, InputMode};
pub use runner::{run_tui, AppEvent, Services};
