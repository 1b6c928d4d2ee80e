//! Terminal presentation adapter.

mod renderer;

pub use renderer::{format_message, TerminalRenderer, EMPTY_STATE, INPUT_TIP, PENDING_INDICATOR};
