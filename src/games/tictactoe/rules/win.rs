//! Win detection logic for tic-tac-toe.

use super::super::{Board, Side, WinningLine};

/// Lines in the order they are scanned.
///
/// Diagonals come first, then rows, then columns. When several lines are
/// complete at once the earliest one here is reported, which decides
/// which cells get highlighted.
pub const LINES: [[usize; 3]; 8] = [
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
];

/// Finds the first completed line and the side that owns it.
pub fn find_winning_line(board: &Board) -> Option<(Side, WinningLine)> {
    let cells = board.cells();
    LINES.iter().find_map(|&[a, b, c]| {
        let side = cells[a].side()?;
        (cells[a] == cells[b] && cells[b] == cells[c]).then_some((side, WinningLine([a, b, c])))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(find_winning_line(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board: Board = "UUU|CC.|...".parse().unwrap();
        assert_eq!(
            find_winning_line(&board),
            Some((Side::User, WinningLine([0, 1, 2])))
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board: Board = "U.C|UC.|C..".parse().unwrap();
        assert_eq!(
            find_winning_line(&board),
            Some((Side::Computer, WinningLine([2, 4, 6])))
        );
    }

    #[test]
    fn test_winner_column() {
        let board: Board = ".CU|.CU|..U".parse().unwrap();
        assert_eq!(
            find_winning_line(&board),
            Some((Side::User, WinningLine([2, 5, 8])))
        );
    }

    #[test]
    fn test_diagonal_reported_before_row() {
        let board: Board = "CCC|.C.|..C".parse().unwrap();
        assert_eq!(
            find_winning_line(&board),
            Some((Side::Computer, WinningLine([0, 4, 8])))
        );
    }

    #[test]
    fn test_row_reported_before_column() {
        let board: Board = "UUU|U..|U..".parse().unwrap();
        assert_eq!(
            find_winning_line(&board),
            Some((Side::User, WinningLine([0, 1, 2])))
        );
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board: Board = "UCU|...|...".parse().unwrap();
        assert_eq!(find_winning_line(&board), None);
    }
}
