//! The square grid of cells.
//!
//! # Layout
//!
//! Cells are stored row-major in one flat `Vec<Cell>` of length `side²`:
//!
//!   index = row * side + col
//!
//! A flat buffer keeps whole-board copies (one per simulation step) to a
//! single allocation and lets relocation address cells by plain index.
//! `Clone` yields a structurally independent snapshot; nothing is shared
//! between boards.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::{AgentType, Cell, ConfigIssue, SatisfactionState, SegResult};

// ── Coord ─────────────────────────────────────────────────────────────────────

/// A `(row, col)` grid address.  Valid iff both components are `< side`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// ── TypeCounts ────────────────────────────────────────────────────────────────

/// The multiset of agent types on a board.  Relocation must leave it
/// unchanged.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeCounts {
    pub type_a: usize,
    pub type_b: usize,
    pub empty:  usize,
}

impl TypeCounts {
    pub fn total(&self) -> usize {
        self.type_a + self.type_b + self.empty
    }
}

// ── Board ─────────────────────────────────────────────────────────────────────

/// An `N × N` snapshot of the model.
///
/// Deserializing goes through [`Board::from_cells`], so a board read from
/// JSON has the same guarantees as one built in code.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawBoard"))]
pub struct Board {
    side:  usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Wrap a row-major cell buffer.
    ///
    /// Fails if `side == 0` or `cells.len() != side²`.
    pub fn from_cells(side: usize, cells: Vec<Cell>) -> SegResult<Self> {
        if side == 0 {
            return Err(ConfigIssue::ZeroSideLength.into());
        }
        let expected = side * side;
        if cells.len() != expected {
            return Err(ConfigIssue::SequenceLength { expected, got: cells.len() }.into());
        }
        Ok(Self { side, cells })
    }

    /// Side length `N`.
    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Total cell count, `N²`.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false` for a board built through [`Board::from_cells`].
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.side && coord.col < self.side
    }

    /// Flat index of `coord`.  Caller guarantees `contains(coord)`.
    #[inline]
    pub fn index_of(&self, coord: Coord) -> usize {
        debug_assert!(self.contains(coord), "{coord} outside {0}x{0} board", self.side);
        coord.row * self.side + coord.col
    }

    #[inline]
    pub fn coord_of(&self, index: usize) -> Coord {
        Coord::new(index / self.side, index % self.side)
    }

    pub fn get(&self, coord: Coord) -> Option<&Cell> {
        if self.contains(coord) {
            self.cells.get(self.index_of(coord))
        } else {
            None
        }
    }

    /// Row-major view of every cell.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Mutable row-major view.  The slice cannot change the board's size.
    #[inline]
    pub fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Rows as slices of length `N`, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(self.side)
    }

    /// Every coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.cells.len()).map(|i| self.coord_of(i))
    }

    /// `(coord, cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (self.coord_of(i), cell))
    }

    /// Count cells by agent type.
    pub fn type_counts(&self) -> TypeCounts {
        let mut counts = TypeCounts::default();
        for cell in &self.cells {
            match cell.kind {
                AgentType::TypeA => counts.type_a += 1,
                AgentType::TypeB => counts.type_b += 1,
                AgentType::Empty => counts.empty += 1,
            }
        }
        counts
    }

    /// Number of *occupied* cells currently in `state`.
    ///
    /// Empty cells are excluded: their state is never meaningful.
    pub fn count_state(&self, state: SatisfactionState) -> usize {
        self.cells
            .iter()
            .filter(|c| c.is_occupied() && c.satisfaction == state)
            .count()
    }
}

impl Index<Coord> for Board {
    type Output = Cell;

    #[inline]
    fn index(&self, coord: Coord) -> &Cell {
        assert!(self.contains(coord), "{coord} outside {0}x{0} board", self.side);
        &self.cells[coord.row * self.side + coord.col]
    }
}

impl IndexMut<Coord> for Board {
    #[inline]
    fn index_mut(&mut self, coord: Coord) -> &mut Cell {
        assert!(self.contains(coord), "{coord} outside {0}x{0} board", self.side);
        &mut self.cells[coord.row * self.side + coord.col]
    }
}

// ── Deserialization ───────────────────────────────────────────────────────────

/// Unchecked wire form of [`Board`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawBoard {
    side:  usize,
    cells: Vec<Cell>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawBoard> for Board {
    type Error = crate::SegError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        Board::from_cells(raw.side, raw.cells)
    }
}
