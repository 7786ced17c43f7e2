//! Difficulty policy: turns minimax scores into the move actually played.

use super::super::action::MoveError;
use super::super::types::{Board, Side};
use super::difficulty::Difficulty;
use super::minimax::{ScoredMove, first_max, score_moves};
use crate::games::SessionRng;
use tracing::{debug, instrument};

/// Picks the computer's move on `board`.
///
/// The optimal move is the first highest-scoring child in index order.
/// Easy and Medium flip a weighted coin and on a miss play a uniformly
/// random legal move instead (which may happen to be the optimal one).
/// Hard never draws from `rng`.
#[instrument(skip(board, rng), fields(board = %board))]
pub fn choose_computer_move(
    board: &Board,
    difficulty: Difficulty,
    rng: &mut SessionRng,
) -> Result<Board, MoveError> {
    select_move(board, difficulty, rng).map(|choice| choice.board)
}

/// Same as [`choose_computer_move`] but reports the index and score.
pub fn select_move(
    board: &Board,
    difficulty: Difficulty,
    rng: &mut SessionRng,
) -> Result<ScoredMove, MoveError> {
    let scored = score_moves(board, Side::Computer);
    let best = first_max(&scored).ok_or(MoveError::NoLegalMove)?;

    if difficulty.is_deterministic() || rng.unit() < difficulty.optimal_probability() {
        debug!(index = best.index, score = best.score, "Playing optimal move");
        return Ok(best);
    }

    let random = scored[rng.random_range(0..scored.len())];
    debug!(
        index = random.index,
        score = random.score,
        optimal = best.index,
        "Playing random move"
    );
    Ok(random)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_board_has_no_move() {
        let board: Board = "UCUUCCCUU".parse().unwrap();
        let mut rng = SessionRng::new(0);
        assert_eq!(
            choose_computer_move(&board, Difficulty::Hard, &mut rng),
            Err(MoveError::NoLegalMove)
        );
    }

    #[test]
    fn test_hard_does_not_consume_randomness() {
        let board: Board = "U........".parse().unwrap();
        let mut rng = SessionRng::new(3);
        let mut untouched = SessionRng::new(3);
        choose_computer_move(&board, Difficulty::Hard, &mut rng).unwrap();
        assert_eq!(rng.unit(), untouched.unit());
    }

    #[test]
    fn test_medium_returns_a_legal_child() {
        let board: Board = "U...C...U".parse().unwrap();
        for seed in 0..20 {
            let mut rng = SessionRng::new(seed);
            let choice = select_move(&board, Difficulty::Medium, &mut rng).unwrap();
            assert!(board.is_empty(choice.index));
            assert_eq!(choice.board.count(Side::Computer), 2);
        }
    }
}
