//! Fixed-grid text formatting.

pub mod grid;

pub use grid::{fit_line, format_block};
