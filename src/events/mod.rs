pub mod keyboard;
pub mod pointer;

pub use keyboard::{wire_global_keydown, wire_help_toggle_h};
pub use pointer::{wire_input_handlers, InputWiring};
