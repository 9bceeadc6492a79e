//! Tic-tac-toe rules on an `n × n` board.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::core::{Action, ActionMask, PlayerId};
use crate::rules::{GameResult, RulesEngine};

/// Cell owned by the canonical player.
pub const CANONICAL_PIECE: i8 = 1;
/// Cell owned by the opponent.
pub const OPPONENT_PIECE: i8 = -1;
/// Empty cell.
pub const EMPTY: i8 = 0;

/// Piece placed by `player`.
#[must_use]
pub const fn piece_for(player: PlayerId) -> i8 {
    if player.is_canonical() {
        CANONICAL_PIECE
    } else {
        OPPONENT_PIECE
    }
}

/// Cell indices of every row, column and both diagonals.
pub(crate) fn winning_lines(size: usize) -> Vec<SmallVec<[usize; 8]>> {
    let mut lines = Vec::with_capacity(2 * size + 2);

    for row in 0..size {
        lines.push((0..size).map(|col| row * size + col).collect());
    }
    for col in 0..size {
        lines.push((0..size).map(|row| row * size + col).collect());
    }
    lines.push((0..size).map(|i| i * size + i).collect());
    lines.push((0..size).map(|i| i * size + (size - 1 - i)).collect());

    lines
}

/// Errors from building a board out of text or raw cells.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardParseError {
    #[error("board has no cells")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid cell {0:?}, expected 'X', 'O' or '.'")]
    InvalidCell(char),

    #[error("invalid cell value {0}, expected 1, -1 or 0")]
    InvalidValue(i8),

    #[error("{found} cells cannot form a square board of size {size}")]
    WrongCellCount { size: usize, found: usize },
}

/// Tic-tac-toe position in canonical orientation.
///
/// `1` is the canonical player's piece, `-1` the opponent's, `0` empty.
/// Text form uses `X`, `O` and `.` with rows separated by `/`:
///
/// ```
/// use rust_alphabeta::games::tictactoe::Board;
///
/// let board: Board = "X.O/.X./..O".parse().unwrap();
/// assert_eq!(board.size(), 3);
/// assert_eq!(board.to_string(), "X.O/.X./..O");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    size: usize,
    cells: SmallVec<[i8; 16]>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "Board must have at least one cell");
        Self {
            size,
            cells: SmallVec::from_elem(EMPTY, size * size),
        }
    }

    /// Build a board from row-major cell values.
    pub fn from_cells(size: usize, cells: &[i8]) -> Result<Self, BoardParseError> {
        if size == 0 || cells.is_empty() {
            return Err(BoardParseError::Empty);
        }
        if cells.len() != size * size {
            return Err(BoardParseError::WrongCellCount {
                size,
                found: cells.len(),
            });
        }
        if let Some(&bad) = cells
            .iter()
            .find(|&&c| !matches!(c, CANONICAL_PIECE | OPPONENT_PIECE | EMPTY))
        {
            return Err(BoardParseError::InvalidValue(bad));
        }

        Ok(Self {
            size,
            cells: SmallVec::from_slice(cells),
        })
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Row-major cell values.
    #[must_use]
    pub fn cells(&self) -> &[i8] {
        &self.cells
    }

    /// Cell value at `(row, col)`.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> i8 {
        self.cells[row * self.size + col]
    }

    /// Check if no empty cell is left.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != EMPTY)
    }

    /// A copy of this board with `piece` placed at `index`.
    #[must_use]
    pub fn with_piece(&self, index: usize, piece: i8) -> Self {
        let mut next = self.clone();
        next.cells[index] = piece;
        next
    }

    /// This board as seen by `player`.
    ///
    /// The opponent's view swaps every piece, so the player to move always
    /// owns the `1` cells.
    #[must_use]
    pub fn canonical(&self, player: PlayerId) -> Self {
        if player.is_canonical() {
            return self.clone();
        }
        Self {
            size: self.size,
            cells: self.cells.iter().map(|&c| -c).collect(),
        }
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.trim().split('/').collect();
        let size = rows.len();
        if rows.iter().all(|r| r.is_empty()) {
            return Err(BoardParseError::Empty);
        }

        let mut cells = SmallVec::with_capacity(size * size);
        for (row, text) in rows.iter().enumerate() {
            let found = text.chars().count();
            if found != size {
                return Err(BoardParseError::RaggedRow {
                    row,
                    expected: size,
                    found,
                });
            }
            for ch in text.chars() {
                cells.push(match ch {
                    'X' | 'x' => CANONICAL_PIECE,
                    'O' | 'o' => OPPONENT_PIECE,
                    '.' => EMPTY,
                    other => return Err(BoardParseError::InvalidCell(other)),
                });
            }
        }

        Ok(Self { size, cells })
    }
}

/// Unchecked serialized form, validated through `Board::from_cells`.
#[derive(Deserialize)]
struct RawBoard {
    size: usize,
    cells: Vec<i8>,
}

impl TryFrom<RawBoard> for Board {
    type Error = BoardParseError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        Board::from_cells(raw.size, &raw.cells)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(self.size).enumerate() {
            if row > 0 {
                f.write_str("/")?;
            }
            for &cell in chunk {
                let ch = match cell {
                    CANONICAL_PIECE => 'X',
                    OPPONENT_PIECE => 'O',
                    _ => '.',
                };
                write!(f, "{}", ch)?;
            }
        }
        Ok(())
    }
}

/// Tic-tac-toe rules: `n` in a row on an `n × n` board.
///
/// The canonical player places `1`, the opponent `-1`. One action per
/// cell; an action is legal when its cell is empty.
#[derive(Clone, Debug)]
pub struct TicTacToe {
    size: usize,
    lines: Vec<SmallVec<[usize; 8]>>,
}

impl TicTacToe {
    /// Create the rules for an `n × n` board.
    pub fn new(size: usize) -> Self {
        assert!((3..=8).contains(&size), "Board size must be 3-8");
        Self {
            size,
            lines: winning_lines(size),
        }
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Empty board of the right size.
    pub fn initial_board(&self) -> Board {
        Board::new(self.size)
    }

    /// Piece that completed a line, if any.
    fn line_winner(&self, board: &Board) -> Option<i8> {
        let n = self.size as i32;
        self.lines.iter().find_map(|line| {
            let sum: i32 = line.iter().map(|&i| i32::from(board.cells[i])).sum();
            match sum {
                s if s == n => Some(CANONICAL_PIECE),
                s if s == -n => Some(OPPONENT_PIECE),
                _ => None,
            }
        })
    }
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new(3)
    }
}

impl RulesEngine for TicTacToe {
    type Position = Board;

    fn action_size(&self) -> usize {
        self.size * self.size
    }

    fn valid_moves(&self, board: &Board, _player: PlayerId) -> ActionMask {
        let mut mask = ActionMask::new(self.action_size());
        for (index, _) in board.cells.iter().enumerate().filter(|(_, c)| **c == EMPTY) {
            mask.set(Action::new(index as u16));
        }
        mask
    }

    fn next_state(&self, board: &Board, player: PlayerId, action: Action) -> (Board, PlayerId) {
        debug_assert_eq!(board.cells[action.index()], EMPTY, "Cell already taken");
        (board.with_piece(action.index(), piece_for(player)), player.opponent())
    }

    fn outcome(&self, board: &Board, perspective: PlayerId) -> Option<GameResult> {
        match self.line_winner(board) {
            Some(piece) if piece == piece_for(perspective) => Some(GameResult::Win),
            Some(_) => Some(GameResult::Loss),
            None if board.is_full() => Some(GameResult::Draw),
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_winning_lines() {
        let lines = winning_lines(3);
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0].as_slice(), &[0, 1, 2]);
        assert_eq!(lines[3].as_slice(), &[0, 3, 6]);
        assert_eq!(lines[6].as_slice(), &[0, 4, 8]);
        assert_eq!(lines[7].as_slice(), &[2, 4, 6]);
    }

    #[test]
    fn test_parse_and_display() {
        let b = board("XO./.X./..O");
        assert_eq!(b.get(0, 0), CANONICAL_PIECE);
        assert_eq!(b.get(0, 1), OPPONENT_PIECE);
        assert_eq!(b.get(2, 2), OPPONENT_PIECE);
        assert_eq!(b.to_string(), "XO./.X./..O");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Board>(), Err(BoardParseError::Empty));
        assert_eq!(
            "XO/.X./..O".parse::<Board>(),
            Err(BoardParseError::RaggedRow {
                row: 0,
                expected: 3,
                found: 2
            })
        );
        assert_eq!("XQ./.../...".parse::<Board>(), Err(BoardParseError::InvalidCell('Q')));
    }

    #[test]
    fn test_from_cells() {
        let b = Board::from_cells(3, &[1, 0, 0, 0, -1, 0, 0, 0, 0]).unwrap();
        assert_eq!(b.to_string(), "X../.O./...");

        assert_eq!(
            Board::from_cells(3, &[0; 8]),
            Err(BoardParseError::WrongCellCount { size: 3, found: 8 })
        );
        assert_eq!(
            Board::from_cells(2, &[0, 2, 0, 0]),
            Err(BoardParseError::InvalidValue(2))
        );
    }

    #[test]
    fn test_canonical_flips_for_opponent() {
        let b = board("XO./.../...");
        assert_eq!(b.canonical(PlayerId::CANONICAL), b);
        assert_eq!(b.canonical(PlayerId::OPPONENT).to_string(), "OX./.../...");
    }

    #[test]
    fn test_valid_moves_are_empty_cells() {
        let game = TicTacToe::new(3);
        let mask = game.valid_moves(&board("XO./.X./..O"), PlayerId::CANONICAL);
        let legal: Vec<u16> = mask.iter().map(|a| a.0).collect();
        assert_eq!(legal, vec![2, 3, 5, 6, 7]);
    }

    #[test]
    fn test_next_state_places_piece_and_passes_turn() {
        let game = TicTacToe::new(3);
        let start = game.initial_board();

        let (after_x, next) = game.next_state(&start, PlayerId::CANONICAL, Action::new(4));
        assert_eq!(after_x.to_string(), ".../.X./...");
        assert_eq!(next, PlayerId::OPPONENT);

        let (after_o, next) = game.next_state(&after_x, next, Action::new(0));
        assert_eq!(after_o.to_string(), "O../.X./...");
        assert_eq!(next, PlayerId::CANONICAL);

        // The parent position is untouched
        assert_eq!(start, Board::new(3));
    }

    #[test]
    fn test_outcome_rows_columns_diagonals() {
        let game = TicTacToe::new(3);
        let p = PlayerId::CANONICAL;

        assert_eq!(game.outcome(&board("XXX/OO./..."), p), Some(GameResult::Win));
        assert_eq!(game.outcome(&board("OX./OX./O.X"), p), Some(GameResult::Loss));
        assert_eq!(game.outcome(&board("X.O/.XO/..X"), p), Some(GameResult::Win));
        assert_eq!(game.outcome(&board("X.O/XO./O.."), p), Some(GameResult::Loss));
    }

    #[test]
    fn test_outcome_perspective() {
        let game = TicTacToe::new(3);
        let won = board("XXX/OO./...");
        assert_eq!(game.outcome(&won, PlayerId::OPPONENT), Some(GameResult::Loss));
    }

    #[test]
    fn test_outcome_draw_and_ongoing() {
        let game = TicTacToe::new(3);
        assert_eq!(game.outcome(&board("XOX/XOO/OXX"), PlayerId::CANONICAL), Some(GameResult::Draw));
        assert_eq!(game.outcome(&board("XO./.../..."), PlayerId::CANONICAL), None);
    }

    #[test]
    fn test_four_by_four() {
        let game = TicTacToe::new(4);
        assert_eq!(game.action_size(), 16);
        assert_eq!(game.outcome(&board("XXX./OOO./..../...."), PlayerId::CANONICAL), None);
        assert_eq!(
            game.outcome(&board("XXXX/OOO./..../...."), PlayerId::CANONICAL),
            Some(GameResult::Win)
        );
    }

    #[test]
    #[should_panic(expected = "Board size must be 3-8")]
    fn test_size_too_small() {
        let _ = TicTacToe::new(2);
    }

    #[test]
    fn test_board_serialization() {
        let b = board("XO./.X./..O");
        let json = serde_json::to_string(&b).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(b, deserialized);
    }

    #[test]
    fn test_board_deserialization_is_checked() {
        assert!(serde_json::from_str::<Board>(r#"{"size":0,"cells":[]}"#).is_err());
        assert!(serde_json::from_str::<Board>(r#"{"size":2,"cells":[1,0,0]}"#).is_err());
        assert!(serde_json::from_str::<Board>(r#"{"size":2,"cells":[1,0,0,5]}"#).is_err());

        let b: Board = serde_json::from_str(r#"{"size":2,"cells":[1,0,0,-1]}"#).unwrap();
        assert_eq!(b.to_string(), "X./.O");
    }
}
