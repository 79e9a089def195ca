//! Random relocation of the mobile set.
//!
//! The mobile set is every empty cell plus every occupied cell last
//! classified `NotSatisfied`.  A uniform permutation of that set pairs each
//! destination (mobile coordinates in row-major order) with a source
//! (the same coordinates, shuffled):
//!
//!   next[dest_i] = current[shuffled_i]
//!
//! Whole cells move, satisfaction state included.  Self-mapping is allowed;
//! no bias against it is applied.  Cells outside the mobile set are copied
//! unchanged, so the type multiset of the board is conserved.

use seg_core::{Board, Coord, Permuter};

/// Coordinates eligible for relocation, row-major.
pub fn mobile_set(board: &Board) -> Vec<Coord> {
    board
        .iter()
        .filter(|(_, cell)| cell.is_mobile())
        .map(|(coord, _)| coord)
        .collect()
}

/// Produce the next board by reshuffling the mobile set of `board`.
///
/// `board` is not modified; the result shares nothing with it.
pub fn relocate_unsatisfied<P: Permuter>(board: &Board, rng: &mut P) -> Board {
    let destinations = mobile_set(board);
    let sources = rng.uniform_permutation(&destinations);

    let mut next = board.clone();
    for (&to, &from) in destinations.iter().zip(&sources) {
        next[to] = board[from];
    }
    next
}
