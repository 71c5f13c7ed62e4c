//! Threat and fork analysis over a bare board.
//!
//! A threat is a line holding two marks of one player and an empty third
//! cell. Counting the threats a move would create is the basis of the fork
//! and block-fork rules.

use crate::rules::lines::{LINES, others};
use crate::rules::lines_through;
use crate::{Board, Cell, Player};

/// Number of threats `player` would create by marking the empty `cell`.
///
/// Each line through `cell` (row, column, and 0-2 diagonals) counts once
/// when its other two cells hold exactly one `player` mark and no opponent
/// mark. Occupied or off-board cells create no threats.
pub fn threat_count(board: &Board, cell: Cell, player: Player) -> usize {
    if !board.is_empty(cell) {
        return 0;
    }
    let opponent = player.opponent();

    lines_through(cell)
        .filter(|line| {
            let (mine, theirs) = others(line, cell).fold((0, 0), |(mine, theirs), c| {
                let mark = board.get(c);
                (
                    mine + usize::from(mark.is(player)),
                    theirs + usize::from(mark.is(opponent)),
                )
            });
            mine == 1 && theirs == 0
        })
        .count()
}

/// True if marking `cell` would give `player` two or more threats at once.
pub fn is_forking(board: &Board, cell: Cell, player: Player) -> bool {
    threat_count(board, cell, player) >= 2
}

/// Every forking cell for `player`, in row-major order.
pub fn forking_cells(board: &Board, player: Player) -> Vec<Cell> {
    board
        .empty_cells()
        .into_iter()
        .filter(|cell| is_forking(board, *cell, player))
        .collect()
}

/// A cell that completes a line for `player`.
///
/// Lines are scanned rows, then columns, then diagonals.
pub fn winning_cell(board: &Board, player: Player) -> Option<Cell> {
    LINES.iter().find_map(|line| {
        let owned = line.iter().filter(|c| board.get(**c).is(player)).count();
        let mut empty = line.iter().copied().filter(|c| board.is_empty(*c));
        match (owned, empty.next(), empty.next()) {
            (2, Some(cell), None) => Some(cell),
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threat_count_row_and_column() {
        // X at (0,0): (0,1) shares the row, (1,0) shares the column.
        let board = Board::from_rows(["X..", "...", "..."]);
        assert_eq!(threat_count(&board, Cell::new(0, 1), Player::Cross), 1);
        assert_eq!(threat_count(&board, Cell::new(1, 0), Player::Cross), 1);
        assert_eq!(threat_count(&board, Cell::new(1, 2), Player::Cross), 0);
    }

    #[test]
    fn test_threat_count_blocked_line_does_not_count() {
        let board = Board::from_rows(["X.O", "...", "..."]);
        assert_eq!(threat_count(&board, Cell::new(0, 1), Player::Cross), 0);
    }

    #[test]
    fn test_threat_count_center_sees_both_diagonals() {
        let board = Board::from_rows(["X.X", "...", "..."]);
        // Center lies on both diagonals, each holding one X.
        assert_eq!(threat_count(&board, Cell::CENTER, Player::Cross), 2);
        assert!(is_forking(&board, Cell::CENTER, Player::Cross));
    }

    #[test]
    fn test_threat_count_on_occupied_cell_is_zero() {
        let board = Board::from_rows(["X..", "...", "..."]);
        assert_eq!(threat_count(&board, Cell::new(0, 0), Player::Cross), 0);
    }

    #[test]
    fn test_forking_cells_row_major() {
        // X on opposite corners, O in the center.
        let board = Board::from_rows(["X..", ".O.", "..X"]);
        assert_eq!(
            forking_cells(&board, Player::Cross),
            vec![Cell::new(0, 2), Cell::new(2, 0)]
        );
        assert!(forking_cells(&board, Player::Circle).is_empty());
    }

    #[test]
    fn test_winning_cell_prefers_rows() {
        let board = Board::from_rows(["OO.", "O..", "..."]);
        assert_eq!(winning_cell(&board, Player::Circle), Some(Cell::new(0, 2)));
    }

    #[test]
    fn test_winning_cell_column_and_diagonal() {
        let board = Board::from_rows([".X.", ".X.", "..."]);
        assert_eq!(winning_cell(&board, Player::Cross), Some(Cell::new(2, 1)));

        let board = Board::from_rows(["..O", "...", "O.."]);
        assert_eq!(winning_cell(&board, Player::Circle), Some(Cell::CENTER));
    }

    #[test]
    fn test_winning_cell_none_when_blocked() {
        let board = Board::from_rows(["XXO", "...", "..."]);
        assert_eq!(winning_cell(&board, Player::Cross), None);
    }
}
