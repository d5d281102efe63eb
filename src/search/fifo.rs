//! A breadth-first alternative traversal, used only to check property P5
//! (traversal-strategy equivalence): it must yield the same *set* of
//! boards as the canonical DFS driver, though not the same order, and it
//! does not carry the strictly-decreasing canonical-key property.

use std::collections::VecDeque;

use crate::board::{Board, PieceKind};

use super::driver::expand;
use super::state::SearchState;

pub struct FifoSolutions {
    rows: u32,
    cols: u32,
    queue: VecDeque<SearchState>,
}

impl FifoSolutions {
    pub(super) fn new(rows: u32, cols: u32, counts: [u32; PieceKind::COUNT]) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back(SearchState::seed(counts));
        FifoSolutions { rows, cols, queue }
    }
}

impl Iterator for FifoSolutions {
    type Item = Board;

    fn next(&mut self) -> Option<Board> {
        while let Some(state) = self.queue.pop_front() {
            if state.remaining_sum == 0 {
                return Some(state.board);
            }
            for child in expand(&state, self.rows, self.cols) {
                self.queue.push_back(child);
            }
        }
        None
    }
}
