use arrayvec::ArrayVec;

use crate::board::{Board, Cell, PieceKind};

/// A node on the search frontier: `(board, remaining, remaining_sum,
/// next_cell_index)`.
///
/// Invariants while held by the search (enforced by construction, never
/// checked redundantly on the hot path): every cell in `board` is
/// pairwise non-attacking, and every cell in `board` has cell-index less
/// than `next_cell_index`.
#[derive(Clone, Debug)]
pub struct SearchState {
    pub board: Board,
    pub remaining: [u32; PieceKind::COUNT],
    pub remaining_sum: u32,
    pub next_cell_index: usize,
}

impl SearchState {
    pub fn seed(counts: [u32; PieceKind::COUNT]) -> Self {
        SearchState {
            board: Board::empty(),
            remaining_sum: counts.iter().sum(),
            remaining: counts,
            next_cell_index: 0,
        }
    }

    /// The state reached by leaving the current cell empty.
    pub fn skip(&self) -> Self {
        SearchState {
            board: self.board.clone(),
            remaining: self.remaining,
            remaining_sum: self.remaining_sum,
            next_cell_index: self.next_cell_index + 1,
        }
    }

    /// The state reached by placing `kind` at `cell`. The caller has
    /// already verified the placement is legal.
    pub fn place(&self, cell: Cell, kind: PieceKind) -> Self {
        let mut remaining = self.remaining;
        let k = kind.to_index();
        debug_assert!(remaining[k] > 0, "placed a kind with no remaining count");
        remaining[k] -= 1;
        SearchState {
            board: self.board.with_placed(cell, kind),
            remaining,
            remaining_sum: self.remaining_sum - 1,
            next_cell_index: self.next_cell_index + 1,
        }
    }
}

/// Up to five placements plus one skip: the maximum fan-out of a single
/// search node.
pub type Children = ArrayVec<SearchState, { PieceKind::COUNT + 1 }>;
