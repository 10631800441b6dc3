pub mod direction;
pub mod report;

pub use direction::*;
pub use report::*;
