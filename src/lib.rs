//! Rectangular grid of cells with passages between them, the board maze generators carve into.
//!
//! ```
//! use mazegrid::{Charset, Grid};
//!
//! let mut grid = Grid::new(2, 1).unwrap();
//! let (a, b) = (grid.get(0, 0).unwrap().id(), grid.get(0, 1).unwrap().id());
//! grid.link(a, b);
//!
//! assert_eq!(grid.render(&Charset::ASCII), "#########\n#       #\n#########");
//! ```

pub mod array;
pub mod dims;
pub mod grid;

pub use dims::Dims;
pub use grid::{Cell, CellId, Charset, Direction, Grid, GridError};

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;
