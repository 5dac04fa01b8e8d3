pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_escape_closes_panel;
pub use pointer::{wire_outside_click, wire_panel_controls};
