pub mod colors;
mod input;
mod layout;

pub use colors::ColorScheme;
pub use input::{handle_key, Command, InputMode};
pub use layout::render_ui;
