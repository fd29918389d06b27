//! Report formatting and emission.

mod console;
pub use console::*;
