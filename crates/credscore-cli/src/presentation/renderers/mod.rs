pub mod console;
pub mod tui;

pub use console::ConsoleRenderer;
pub use tui::{RendererSignal, SearchInput, TuiEvent, TuiRenderer};
