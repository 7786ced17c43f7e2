//! Exhaustive minimax over tic-tac-toe boards.
//!
//! Scores are always from the computer's point of view: positive means
//! the computer wins, negative means the user wins, zero is a tie. Wins
//! are worth less the longer they take and losses cost less the later
//! they come, so the search prefers quick wins and slow defeats.
//!
//! There is no pruning and no transposition table: the full tree from an
//! empty board is a few hundred thousand nodes.

use super::super::action::legal_children;
use super::super::phases::TerminalOutcome;
use super::super::rules::terminal_outcome;
use super::super::types::{Board, Side};
use serde::{Deserialize, Serialize};

/// Search horizon. Larger than any game, so it never truncates real play;
/// it only anchors the depth-adjusted scores.
pub const MAX_DEPTH: u32 = 100;

/// Base value of a win before the depth adjustment.
pub const WIN_SCORE: i32 = 10;

/// Minimax value of `board` with `depth_remaining` plies left.
///
/// `maximizing` is true when the computer is to move.
pub fn minimax_score(board: &Board, depth_remaining: u32, maximizing: bool) -> i32 {
    let outcome = terminal_outcome(board);
    if outcome.is_terminal() || depth_remaining == 0 {
        return terminal_score(outcome, depth_remaining);
    }

    let mover = if maximizing { Side::Computer } else { Side::User };
    let scores = legal_children(board, mover)
        .into_iter()
        .map(|child| minimax_score(&child, depth_remaining - 1, !maximizing));

    let best = if maximizing { scores.max() } else { scores.min() };
    // An ongoing board always has at least one empty cell.
    best.unwrap_or(0)
}

/// Score of a leaf reached with `depth_remaining` plies left.
///
/// A horizon cut on an ongoing board scores like a tie.
pub fn terminal_score(outcome: TerminalOutcome, depth_remaining: u32) -> i32 {
    let plies = MAX_DEPTH.saturating_sub(depth_remaining) as i32;
    match outcome.winner() {
        Some(Side::Computer) => WIN_SCORE - plies,
        Some(Side::User) => -WIN_SCORE + plies,
        None => 0,
    }
}

/// A legal move together with its minimax value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMove {
    /// Index the mover plays.
    pub index: usize,
    /// Board after the move.
    pub board: Board,
    /// Minimax value of `board`, computer's point of view.
    pub score: i32,
}

/// Scores every legal move of `mover`, in ascending index order.
pub fn score_moves(board: &Board, mover: Side) -> Vec<ScoredMove> {
    // After the mover plays, the other side is to move.
    let next_maximizing = mover == Side::User;
    board
        .empty_indices()
        .zip(legal_children(board, mover))
        .map(|(index, child)| ScoredMove {
            index,
            board: child,
            score: minimax_score(&child, MAX_DEPTH, next_maximizing),
        })
        .collect()
}

/// First move with the highest score. Ties go to the lowest index.
pub fn first_max(moves: &[ScoredMove]) -> Option<ScoredMove> {
    let mut best: Option<ScoredMove> = None;
    for candidate in moves {
        if best.is_none_or(|b| candidate.score > b.score) {
            best = Some(*candidate);
        }
    }
    best
}

/// First move with the lowest score. Ties go to the lowest index.
pub fn first_min(moves: &[ScoredMove]) -> Option<ScoredMove> {
    let mut best: Option<ScoredMove> = None;
    for candidate in moves {
        if best.is_none_or(|b| candidate.score < b.score) {
            best = Some(*candidate);
        }
    }
    best
}

/// The computer's optimal move, or `None` on a full board.
pub fn best_computer_move(board: &Board) -> Option<ScoredMove> {
    first_max(&score_moves(board, Side::Computer))
}

/// The user's optimal reply, or `None` on a full board.
pub fn best_user_move(board: &Board) -> Option<ScoredMove> {
    first_min(&score_moves(board, Side::User))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_immediate_win_scores_nine() {
        // Computer to move, 2 completes the top row.
        let board: Board = "CC.|UU.|U..".parse().unwrap();
        assert_eq!(minimax_score(&board, MAX_DEPTH, true), 9);
    }

    #[test]
    fn test_completed_board_scores_at_root_depth() {
        let won: Board = "CCC|UU.|...".parse().unwrap();
        assert_eq!(minimax_score(&won, MAX_DEPTH, false), WIN_SCORE);

        let lost: Board = "UUU|CC.|...".parse().unwrap();
        assert_eq!(minimax_score(&lost, MAX_DEPTH, true), -WIN_SCORE);
    }

    #[test]
    fn test_zero_depth_on_ongoing_board_is_neutral() {
        let board: Board = "CC.|UU.|...".parse().unwrap();
        assert_eq!(minimax_score(&board, 0, true), 0);
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        assert_eq!(minimax_score(&Board::new(), MAX_DEPTH, false), 0);
    }

    #[test]
    fn test_first_max_prefers_lowest_index() {
        let board = Board::new();
        let moves = vec![
            ScoredMove { index: 1, board, score: 3 },
            ScoredMove { index: 5, board, score: 3 },
            ScoredMove { index: 7, board, score: -2 },
        ];
        assert_eq!(first_max(&moves).map(|m| m.index), Some(1));
        assert_eq!(first_min(&moves).map(|m| m.index), Some(7));
        assert_eq!(first_max(&[]), None);
    }

    #[test]
    fn test_user_blocks_computer_threat() {
        // Computer threatens 0-1-2; the user must take 2.
        let board: Board = "CC.|U..|...".parse().unwrap();
        let reply = best_user_move(&board).unwrap();
        assert_eq!(reply.index, 2);
    }
}
