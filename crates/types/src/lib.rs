pub mod grid;
pub mod params;
pub mod commands;

pub use grid::*;
pub use params::*;
pub use commands::*;
