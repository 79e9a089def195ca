//! Edge-clipped Moore neighborhood lookup.
//!
//! The neighborhood of `(row, col)` is the 3×3 block centred on it,
//! intersected with the board and minus the centre itself:
//!
//!   rows `max(row-1, 0) ..= min(row+1, N-1)`, cols likewise.
//!
//! There is no wraparound, so corners have 3 neighbors, non-corner edge
//! cells 5 and interior cells 8.  Iteration is row-major within the block;
//! callers must not depend on the order.

use std::iter::FusedIterator;

use crate::{Board, Cell, Coord};

/// Iterator over the in-bounds neighbor coordinates of one cell.
#[derive(Clone, Debug)]
pub struct NeighborCoords {
    center:    Coord,
    row:       usize,
    col:       usize,
    row_end:   usize,
    col_start: usize,
    col_end:   usize,
}

impl NeighborCoords {
    /// Neighbors of `center` on a `side × side` board.  A `center` outside
    /// the board yields nothing.
    pub fn new(side: usize, center: Coord) -> Self {
        if center.row >= side || center.col >= side {
            return Self { center, row: 1, col: 0, row_end: 0, col_start: 0, col_end: 0 };
        }
        let col_start = center.col.saturating_sub(1);
        Self {
            center,
            row:     center.row.saturating_sub(1),
            col:     col_start,
            row_end: (center.row + 1).min(side - 1),
            col_start,
            col_end: (center.col + 1).min(side - 1),
        }
    }
}

impl Iterator for NeighborCoords {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        while self.row <= self.row_end {
            let here = Coord::new(self.row, self.col);
            if self.col == self.col_end {
                self.row += 1;
                self.col = self.col_start;
            } else {
                self.col += 1;
            }
            if here != self.center {
                return Some(here);
            }
        }
        None
    }
}

impl FusedIterator for NeighborCoords {}

/// Iterator over references to the neighbor cells of one cell.
#[derive(Clone, Debug)]
pub struct Neighbors<'a> {
    board:  &'a Board,
    coords: NeighborCoords,
}

impl<'a> Iterator for Neighbors<'a> {
    type Item = &'a Cell;

    #[inline]
    fn next(&mut self) -> Option<&'a Cell> {
        let coord = self.coords.next()?;
        Some(&self.board.cells()[self.board.index_of(coord)])
    }
}

impl FusedIterator for Neighbors<'_> {}

impl Board {
    /// In-bounds neighbor coordinates of `coord`.
    pub fn neighbor_coords(&self, coord: Coord) -> NeighborCoords {
        NeighborCoords::new(self.side(), coord)
    }

    /// In-bounds neighbor cells of `coord`, borrowed from the board.
    pub fn neighbors(&self, coord: Coord) -> Neighbors<'_> {
        Neighbors { board: self, coords: self.neighbor_coords(coord) }
    }
}

/// Free-function form of [`Board::neighbors`].
pub fn neighbors_of(board: &Board, row: usize, col: usize) -> Neighbors<'_> {
    board.neighbors(Coord::new(row, col))
}
