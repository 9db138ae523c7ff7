//! Ratatui front-end for the character picker. The session state machine, the
//! keymap and the text renderer are plain Rust and testable on their own; only
//! `terminal` touches the real terminal.

mod app;
mod helpers;
mod keymap;
mod render;
mod terminal;

pub use app::{App, Flow};
pub use keymap::Action;
pub use render::{field_block, render_body, render_entry};
pub use terminal::run_app;
