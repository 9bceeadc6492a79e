//! Heuristic evaluation and tensor encoding for tic-tac-toe.

use smallvec::SmallVec;

use crate::core::Value;
use crate::nn::{EncodedState, Evaluator, StateEncoder};

use super::game::{winning_lines, Board, CANONICAL_PIECE, OPPONENT_PIECE};

/// Open-line count heuristic.
///
/// A line is open for a player when it holds at least one of their pieces
/// and none of the other player's. The estimate is
/// `(open lines for X - open lines for O) / total lines`, which stays
/// inside `[-1, 1]`.
#[derive(Clone, Debug)]
pub struct LineHeuristic {
    lines: Vec<SmallVec<[usize; 8]>>,
}

impl LineHeuristic {
    /// Heuristic for an `n × n` board.
    pub fn new(size: usize) -> Self {
        Self {
            lines: winning_lines(size),
        }
    }
}

impl Evaluator<Board> for LineHeuristic {
    fn evaluate(&self, board: &Board) -> Value {
        let cells = board.cells();
        let score: i32 = self
            .lines
            .iter()
            .map(|line| {
                let has_x = line.iter().any(|&i| cells[i] == CANONICAL_PIECE);
                let has_o = line.iter().any(|&i| cells[i] == OPPONENT_PIECE);
                match (has_x, has_o) {
                    (true, false) => 1,
                    (false, true) => -1,
                    _ => 0,
                }
            })
            .sum();

        Value::from(score) / self.lines.len() as Value
    }
}

/// Encodes a board as an `[n, n]` tensor of its cell values.
#[derive(Clone, Debug)]
pub struct TicTacToeEncoder {
    size: usize,
}

impl TicTacToeEncoder {
    /// Encoder for an `n × n` board.
    pub fn new(size: usize) -> Self {
        Self { size }
    }
}

impl StateEncoder<Board> for TicTacToeEncoder {
    fn encode(&self, board: &Board) -> EncodedState {
        debug_assert_eq!(board.size(), self.size, "Board size mismatch");
        let tensor = board.cells().iter().map(|&c| f32::from(c)).collect();
        EncodedState::new(tensor, self.output_shape())
    }

    fn output_shape(&self) -> Vec<usize> {
        vec![self.size, self.size]
    }

    fn action_space_size(&self) -> usize {
        self.size * self.size
    }
}
