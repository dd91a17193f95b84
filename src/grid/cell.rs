use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::dims::Dims;

/// Handle of a cell inside its [`Grid`](super::Grid).
///
/// It's the row-major index of the cell, so it's only meaningful for the grid that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(pub(crate) usize);

impl CellId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All directions in the order used everywhere neighbors are listed.
    pub const fn get_in_order() -> [Direction; 4] {
        use Direction::*;
        [North, South, East, West]
    }

    pub fn offset(self) -> Dims {
        match self {
            Self::North => Dims(0, -1),
            Self::South => Dims(0, 1),
            Self::East => Dims(1, 0),
            Self::West => Dims(-1, 0),
        }
    }

    pub fn reverse(self) -> Direction {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }

    /// Returns the direction leading from `from` to `to`, if they are adjacent
    pub fn between(from: Dims, to: Dims) -> Option<Direction> {
        Self::get_in_order()
            .into_iter()
            .find(|dir| from + dir.offset() == to)
    }

    fn slot(self) -> usize {
        self as usize
    }
}

/// Single node of the grid.
///
/// Neighbors are structural, set once when the grid is built. Links are passages and change
/// through [`Grid::link`](super::Grid::link) and [`Grid::unlink`](super::Grid::unlink).
///
/// Two cells are equal only if their handle, position, neighbors and links all match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    id: CellId,
    pos: Dims,
    neighbors: [Option<CellId>; 4],
    links: HashSet<CellId>,
}

impl Cell {
    pub(crate) fn new(id: CellId, pos: Dims) -> Cell {
        Cell {
            id,
            pos,
            neighbors: [None; 4],
            links: HashSet::new(),
        }
    }

    pub fn id(&self) -> CellId {
        self.id
    }

    pub fn row(&self) -> usize {
        self.pos.1 as usize
    }

    pub fn column(&self) -> usize {
        self.pos.0 as usize
    }

    pub fn pos(&self) -> Dims {
        self.pos
    }

    pub fn neighbor(&self, dir: Direction) -> Option<CellId> {
        self.neighbors[dir.slot()]
    }

    pub fn north(&self) -> Option<CellId> {
        self.neighbor(Direction::North)
    }

    pub fn south(&self) -> Option<CellId> {
        self.neighbor(Direction::South)
    }

    pub fn east(&self) -> Option<CellId> {
        self.neighbor(Direction::East)
    }

    pub fn west(&self) -> Option<CellId> {
        self.neighbor(Direction::West)
    }

    /// Existing neighbors in north, south, east, west order, regardless of links.
    pub fn neighbors(&self) -> SmallVec<[CellId; 4]> {
        self.neighbors.iter().flatten().copied().collect()
    }

    /// Linked cells, in no particular order.
    pub fn links(&self) -> impl Iterator<Item = CellId> + '_ {
        self.links.iter().copied()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Accepts either a [`CellId`] or an `Option<CellId>`, so a missing neighbor can be passed
    /// directly, e.g. `cell.is_linked(cell.east())`. Missing cells are never linked.
    pub fn is_linked(&self, other: impl Into<Option<CellId>>) -> bool {
        other
            .into()
            .map_or(false, |other| self.links.contains(&other))
    }

    /// Whether there is a passage to the neighbor in the given direction
    pub fn is_open(&self, dir: Direction) -> bool {
        self.is_linked(self.neighbor(dir))
    }

    pub(crate) fn set_neighbor(&mut self, dir: Direction, neighbor: Option<CellId>) {
        self.neighbors[dir.slot()] = neighbor;
    }

    pub(crate) fn add_link(&mut self, other: CellId) -> bool {
        self.links.insert(other)
    }

    pub(crate) fn remove_link(&mut self, other: CellId) -> bool {
        self.links.remove(&other)
    }
}
