//! Tests for the board model: terminal detection and successor generation.

use minimax_tictactoe::{
    Board, Cell, InvalidMoveReason, MoveError, Side, TerminalOutcome, WinningLine, apply_move,
    changed_index, legal_children, terminal_outcome,
};

#[test]
fn test_children_match_empty_cells() {
    let boards = [
        ".........",
        "....U....",
        "U...C...U",
        "UC.CU.U.C",
        "UCUUCCCU.",
    ];

    for text in boards {
        let board: Board = text.parse().unwrap();
        let empties = board.empty_indices().count();

        for mover in [Side::Computer, Side::User] {
            let children = legal_children(&board, mover);
            assert_eq!(children.len(), empties, "board {}", text);

            for child in &children {
                let index = changed_index(&board, child).expect("exactly one cell changes");
                assert_eq!(board.get(index), Some(Cell::Empty));
                assert_eq!(child.get(index), Some(Cell::from(mover)));
            }
        }
    }
}

#[test]
fn test_children_are_in_ascending_index_order() {
    let board: Board = ".U..C..U.".parse().unwrap();
    let indices: Vec<usize> = legal_children(&board, Side::Computer)
        .iter()
        .filter_map(|child| changed_index(&board, child))
        .collect();
    assert_eq!(indices, vec![0, 2, 3, 5, 6, 8]);
}

#[test]
fn test_center_opening_scenario() {
    let board = apply_move(&Board::new(), 4, Side::User).unwrap();
    assert_eq!(terminal_outcome(&board), TerminalOutcome::Ongoing);

    let children = legal_children(&board, Side::Computer);
    let indices: Vec<usize> = children
        .iter()
        .filter_map(|child| changed_index(&board, child))
        .collect();
    assert_eq!(indices, vec![0, 1, 2, 3, 5, 6, 7, 8]);
    for (child, index) in children.iter().zip(indices) {
        assert_eq!(child.get(index), Some(Cell::Computer));
        assert_eq!(child.get(4), Some(Cell::User));
    }
}

#[test]
fn test_diagonal_has_priority_over_row() {
    let board: Board = "CCC|UC.|U.C".parse().unwrap();
    assert_eq!(
        terminal_outcome(&board),
        TerminalOutcome::Win {
            side: Side::Computer,
            line: WinningLine([0, 4, 8]),
        }
    );
}

#[test]
fn test_anti_diagonal_has_priority_over_column() {
    let board: Board = "..U|.UU|U.U".parse().unwrap();
    assert_eq!(
        terminal_outcome(&board).winning_line(),
        Some(WinningLine([2, 4, 6]))
    );
}

#[test]
fn test_full_board_without_line_is_tie() {
    let board: Board = "CUC|CUU|UCC".parse().unwrap();
    assert_eq!(terminal_outcome(&board), TerminalOutcome::Tie);
}

#[test]
fn test_terminal_check_is_idempotent() {
    let board: Board = "UU.|CC.|...".parse().unwrap();
    let copy = board;
    let first = terminal_outcome(&board);
    let second = terminal_outcome(&board);
    assert_eq!(first, second);
    assert_eq!(board, copy);
}

#[test]
fn test_apply_move_rejects_bad_indices() {
    let board: Board = "U........".parse().unwrap();
    assert_eq!(
        apply_move(&board, 0, Side::Computer),
        Err(MoveError::InvalidMove {
            index: 0,
            reason: InvalidMoveReason::Occupied(Side::User),
        })
    );
    assert!(matches!(
        apply_move(&board, 42, Side::Computer),
        Err(MoveError::InvalidMove {
            reason: InvalidMoveReason::OutOfRange,
            ..
        })
    ));
}

#[test]
fn test_apply_move_leaves_input_untouched() {
    let board = Board::new();
    let next = apply_move(&board, 8, Side::Computer).unwrap();
    assert_eq!(board, Board::new());
    assert_eq!(next.occupied(), 1);
}
