//! Input widget - a text input field with shared state.

mod state;

pub use state::Input;
