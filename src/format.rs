//! Board pretty-printing. Not part of the enumerator's correctness
//! surface — an external collaborator per the core's contract — but
//! shipped here since every caller of the CLI needs it.

use crate::board::{Board, Cell};

/// Renders `board` as a printable `rows x cols` grid:
///
/// ```text
/// -------------
/// |   |   | K |
/// -------------
/// | Q |   |   |
/// -------------
/// ```
///
/// A separator line of `'-' * (cols*4 + 1)` opens the grid and follows
/// every row; each row is `"| "` then cell contents joined by `" | "`
/// then `" |"`, where a cell's contents is its piece symbol or a single
/// space.
pub fn format_board(board: &Board, rows: u32, cols: u32) -> String {
    let separator = "-".repeat((cols * 4 + 1) as usize);
    let mut lines = vec![separator.clone()];
    for row in 0..rows {
        let cells: Vec<String> = (0..cols)
            .map(|col| match board.get(Cell::new(row, col)) {
                Some(kind) => kind.symbol().to_string(),
                None => " ".to_string(),
            })
            .collect();
        lines.push(format!("| {} |", cells.join(" | ")));
        lines.push(separator.clone());
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PieceKind;

    #[test]
    fn test_empty_board_layout() {
        let board = Board::empty();
        let rendered = format_board(&board, 2, 2);
        let expected = "\
---------
|   |   |
---------
|   |   |
---------";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_placed_piece_renders_symbol() {
        let board = Board::empty().with_placed(Cell::new(0, 1), PieceKind::King);
        let rendered = format_board(&board, 1, 2);
        let expected = "\
---------
|  | K |
---------";
        assert_eq!(rendered, expected);
    }
}
