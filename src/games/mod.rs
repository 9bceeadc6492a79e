//! Reference games.
//!
//! - `tictactoe`: n × n tic-tac-toe with a line-counting heuristic
//! - `tree`: explicit game trees, hand-built or randomly generated

pub mod tictactoe;
pub mod tree;
