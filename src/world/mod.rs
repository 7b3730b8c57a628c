pub mod grid;
pub mod loader;

pub use grid::Grid;
