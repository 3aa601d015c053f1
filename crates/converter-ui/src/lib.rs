//! egui front end: toolbar, code editor, chat panel and alert.
//!
//! Panels read and mutate [`state::UiState`]; anything that needs the
//! network is handed back to the caller as a request value.

pub mod editor;
pub mod panels;
pub mod quick_actions;
pub mod state;
pub mod theme;

#[cfg(test)]
mod tests;
