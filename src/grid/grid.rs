use std::ops;

use rand::{thread_rng, Rng};

use super::{Cell, CellId, Direction, GridError};
use crate::{array::Array2D, dims::Dims};

/// Rectangular maze board, `height` rows of `width` cells.
///
/// The grid owns every cell. Cells refer to each other only by [`CellId`], so neighbors and
/// links are resolved through the grid.
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Array2D<Cell>,
}

impl Grid {
    /// Builds a grid with all neighbors wired and no links.
    ///
    /// Fails with [`GridError::InvalidSize`] if either dimension is zero and with
    /// [`GridError::TooLarge`] if the cell count or a coordinate wouldn't fit.
    pub fn new(width: usize, height: usize) -> Result<Grid, GridError> {
        if width == 0 || height == 0 {
            log::warn!("Refusing to build grid of size {}x{}", width, height);
            return Err(GridError::InvalidSize { width, height });
        }

        let fits = width
            .checked_mul(height)
            .is_some_and(|count| count <= i32::MAX as usize)
            && width <= i32::MAX as usize
            && height <= i32::MAX as usize;
        if !fits {
            log::warn!("Refusing to build grid of size {}x{}", width, height);
            return Err(GridError::TooLarge { width, height });
        }

        let cells = Array2D::from_fn(width, height, |i, pos| Cell::new(CellId(i), pos));
        let mut grid = Grid { cells };
        grid.configure_cells();

        log::debug!("Built {}x{} grid", width, height);

        Ok(grid)
    }

    fn configure_cells(&mut self) {
        for idx in 0..self.cells.len() {
            let Some(pos) = self.cells.idx_to_dim(idx) else {
                continue;
            };

            let neighbors = Direction::get_in_order().map(|dir| {
                let id = self.cells.dim_to_idx(pos + dir.offset()).map(CellId);
                (dir, id)
            });

            if let Some(cell) = self.cells.get_idx_mut(idx) {
                for (dir, id) in neighbors {
                    cell.set_neighbor(dir, id);
                }
            }
        }
    }

    pub fn width(&self) -> usize {
        self.cells.width()
    }

    pub fn height(&self) -> usize {
        self.cells.height()
    }

    pub fn size(&self) -> Dims {
        self.cells.size()
    }

    /// Number of cells, always `width * height`.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`, a grid has at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the cell at `row`, `column`, or `None` if the position is outside the grid.
    pub fn get(&self, row: i32, column: i32) -> Option<&Cell> {
        self.cells.get(Dims(column, row))
    }

    pub fn get_dims(&self, pos: Dims) -> Option<&Cell> {
        self.cells.get(pos)
    }

    /// # Panics
    ///
    /// If `id` wasn't produced by a grid of this size.
    pub fn cell(&self, id: CellId) -> &Cell {
        &self[id]
    }

    /// Chooses a cell uniformly at random.
    ///
    /// Pass a seeded [`Random`](crate::Random) for reproducible picks.
    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> &Cell {
        let idx = rng.gen_range(0..self.len());
        &self.cells.as_slice()[idx]
    }

    pub fn random_cell_thread(&self) -> &Cell {
        self.random_cell(&mut thread_rng())
    }

    /// Rows from top to bottom, each from left to right.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Cell]> {
        self.cells.rows()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        self.cells.as_slice()
    }

    pub fn positions(&self) -> impl Iterator<Item = Dims> + '_ {
        self.cells.iter_pos()
    }

    /// Cells with exactly one passage.
    pub fn dead_ends(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|cell| cell.link_count() == 1)
    }

    /// Opens a passage between `a` and `b` in both directions.
    ///
    /// Linking already linked cells does nothing. The cells don't have to be neighbors.
    ///
    /// # Panics
    ///
    /// If either handle doesn't belong to this grid. Neither cell is changed in that case.
    pub fn link(&mut self, a: CellId, b: CellId) -> &mut Self {
        self.link_with(a, b, true)
    }

    /// Opens a passage from `a` to `b` only, `b` stays unaware of it.
    pub fn link_oneway(&mut self, a: CellId, b: CellId) -> &mut Self {
        self.link_with(a, b, false)
    }

    /// Closes the passage between `a` and `b` in both directions, if there is one.
    pub fn unlink(&mut self, a: CellId, b: CellId) -> &mut Self {
        self.unlink_with(a, b, true)
    }

    pub fn unlink_oneway(&mut self, a: CellId, b: CellId) -> &mut Self {
        self.unlink_with(a, b, false)
    }

    /// Links the cell with its neighbor in `dir` and returns the neighbor.
    ///
    /// Returns `None` and changes nothing when there's no neighbor that way.
    pub fn link_towards(&mut self, id: CellId, dir: Direction) -> Option<CellId> {
        let neighbor = self[id].neighbor(dir)?;
        self.link(id, neighbor);
        Some(neighbor)
    }

    /// Whether `a` and `b` are structural neighbors.
    ///
    /// Looks both cells up, so a handle outside this grid panics here, before anything changes.
    fn adjacent(&self, a: CellId, b: CellId) -> bool {
        Direction::between(self[a].pos(), self[b].pos()).is_some()
    }

    fn link_with(&mut self, a: CellId, b: CellId, bidirectional: bool) -> &mut Self {
        if !self.adjacent(a, b) {
            log::trace!("Linking non-adjacent cells {:?} and {:?}", a, b);
        }

        self[a].add_link(b);
        if bidirectional {
            self[b].add_link(a);
        }

        self
    }

    fn unlink_with(&mut self, a: CellId, b: CellId, bidirectional: bool) -> &mut Self {
        let adjacent = self.adjacent(a, b);

        let removed = self[a].remove_link(b);
        if bidirectional {
            self[b].remove_link(a);
        }

        if removed && !adjacent {
            log::trace!("Unlinked non-adjacent cells {:?} and {:?}", a, b);
        }

        self
    }
}

impl ops::Index<CellId> for Grid {
    type Output = Cell;

    fn index(&self, index: CellId) -> &Self::Output {
        self.cells
            .get_idx(index.0)
            .unwrap_or_else(|| panic!("Index out of bounds: {:?}", index))
    }
}

impl ops::IndexMut<CellId> for Grid {
    fn index_mut(&mut self, index: CellId) -> &mut Self::Output {
        self.cells
            .get_idx_mut(index.0)
            .unwrap_or_else(|| panic!("Index out of bounds: {:?}", index))
    }
}
