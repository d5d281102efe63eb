//! Pure queries over a [`Board`] and a candidate cell. Both functions are
//! O(|board|) and short-circuit on the first hit; neither allocates.

use super::board::Board;
use super::cell::Cell;

/// True iff some piece already on `board` attacks `cell`.
///
/// The candidate cell is never itself occupied at the call site (the search
/// driver only calls this before placing), so the zero-displacement case
/// never actually triggers here — but [`crate::board::piece::PieceKind::attacks`]
/// is defined to return false at zero displacement regardless, so this
/// stays correct even if called symmetrically.
pub fn pos_attacked_by_board(cell: Cell, board: &Board) -> bool {
    board.entries().any(|(occupied, kind)| {
        let (dr, dc) = occupied.displacement_to(cell);
        kind.attacks(dr, dc)
    })
}

/// True iff a piece of `kind` placed at `cell` would attack some piece
/// already on `board`.
pub fn piece_attacks_board(kind: crate::board::piece::PieceKind, cell: Cell, board: &Board) -> bool {
    board.entries().any(|(occupied, _)| {
        let (dr, dc) = cell.displacement_to(occupied);
        kind.attacks(dr, dc)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::piece::PieceKind;

    fn sample_board() -> Board {
        // 5x5 board: Q@(0,0), K@(0,4), R@(2,4), B@(3,0), N@(4,4)
        Board::empty()
            .with_placed(Cell::new(0, 0), PieceKind::Queen)
            .with_placed(Cell::new(0, 4), PieceKind::King)
            .with_placed(Cell::new(2, 4), PieceKind::Rook)
            .with_placed(Cell::new(3, 0), PieceKind::Bishop)
            .with_placed(Cell::new(4, 4), PieceKind::Knight)
    }

    #[test]
    fn test_attack_by_board_vectors() {
        let board = sample_board();
        let unattacked = [Cell::new(3, 1), Cell::new(4, 2), Cell::new(4, 3)];
        for row in 0..5 {
            for col in 0..5 {
                let cell = Cell::new(row, col);
                if board.contains(cell) {
                    continue;
                }
                let expect_attacked = !unattacked.contains(&cell);
                assert_eq!(
                    pos_attacked_by_board(cell, &board),
                    expect_attacked,
                    "cell {cell} attacked mismatch"
                );
            }
        }
    }

    #[test]
    fn test_piece_attacks_board_matches_pos_attacked() {
        // attacks are symmetric under this model: if X at `from` attacks
        // `to`, then a piece of the same kind placed at `to` attacks `from`.
        let board = sample_board();
        let candidate = Cell::new(3, 1);
        for kind in PieceKind::ALL {
            let a = piece_attacks_board(kind, candidate, &board);
            let b = board
                .entries()
                .any(|(occ, k)| *k == kind && kind.attacks(occ.displacement_to(candidate).0, occ.displacement_to(candidate).1));
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_empty_board_attacks_nothing() {
        let board = Board::empty();
        assert!(!pos_attacked_by_board(Cell::new(2, 2), &board));
        assert!(!piece_attacks_board(PieceKind::Queen, Cell::new(2, 2), &board));
    }
}
