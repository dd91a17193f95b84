pub mod cell;
pub use cell::{Cell, CellId, Direction};
#[allow(clippy::module_inception)]
pub mod grid;
pub use grid::Grid;
pub mod render;
pub use render::Charset;

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("Invalid grid size {width}x{height}, both dimensions must be positive")]
    InvalidSize { width: usize, height: usize },
    #[error("Grid size {width}x{height} is too large")]
    TooLarge { width: usize, height: usize },
}
