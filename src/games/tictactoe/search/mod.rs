//! Move search for the computer side.

pub mod difficulty;
pub mod minimax;
pub mod policy;

pub use difficulty::Difficulty;
pub use minimax::{
    MAX_DEPTH, ScoredMove, WIN_SCORE, best_computer_move, best_user_move, minimax_score,
    score_moves, terminal_score,
};
pub use policy::{choose_computer_move, select_move};
