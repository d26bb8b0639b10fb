pub mod terminal;
pub mod tui_ratatui;
