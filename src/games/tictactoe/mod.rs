//! Tic-tac-toe for exercising the search.
//!
//! - `n × n` board, `n` in a row wins (3 ≤ n ≤ 8)
//! - Positions are kept canonical: the player to move at the root owns `X`
//! - `LineHeuristic` scores open lines; `TicTacToeEncoder` feeds networks

mod game;
mod heuristic;

pub use game::{
    piece_for, Board, BoardParseError, TicTacToe, CANONICAL_PIECE, EMPTY, OPPONENT_PIECE,
};
pub use heuristic::{LineHeuristic, TicTacToeEncoder};
