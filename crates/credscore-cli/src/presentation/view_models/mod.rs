pub mod common;
pub mod screen;

pub use common::StatusLevel;
pub use screen::*;
