//! Tic-tac-toe player bindings.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::games::tictactoe::{Board, TicTacToe};
use crate::nn::FallibleEvaluator;
use crate::search::{AlphaBeta, SearchConfig, SearchStats};

type PyValueCallback = Box<dyn Fn(&Board) -> PyResult<f64>>;

/// Evaluator backed by a Python callable.
///
/// The callable receives the board's cells as a list of ints and returns a
/// float, clamped onto `[-1, 1]`. The first exception it raises aborts the
/// decision and is re-raised to the caller.
type PyValueFn = FallibleEvaluator<PyValueCallback, PyErr>;

fn python_value_fn(callback: PyObject) -> PyValueFn {
    let value_fn: PyValueCallback = Box::new(move |board: &Board| {
        Python::with_gil(|py| {
            callback
                .call1(py, (board.cells().to_vec(),))?
                .extract::<f64>(py)
        })
    });
    FallibleEvaluator::new(value_fn)
}

/// Python wrapper for SearchStats.
#[pyclass(name = "SearchStats")]
#[derive(Clone, Debug)]
pub struct PySearchStats(pub SearchStats);

#[pymethods]
impl PySearchStats {
    #[getter]
    fn nodes(&self) -> u64 {
        self.0.nodes
    }

    #[getter]
    fn terminal_nodes(&self) -> u64 {
        self.0.terminal_nodes
    }

    #[getter]
    fn leaf_evaluations(&self) -> u64 {
        self.0.leaf_evaluations
    }

    #[getter]
    fn cutoffs(&self) -> u64 {
        self.0.cutoffs
    }

    #[getter]
    fn root_branches(&self) -> u32 {
        self.0.root_branches
    }

    #[getter]
    fn time_us(&self) -> u64 {
        self.0.time_us
    }

    fn nodes_per_second(&self) -> f64 {
        self.0.nodes_per_second()
    }

    fn __repr__(&self) -> String {
        format!(
            "SearchStats(nodes={}, leaf_evaluations={}, cutoffs={}, time_us={})",
            self.0.nodes, self.0.leaf_evaluations, self.0.cutoffs, self.0.time_us
        )
    }
}

/// Alpha-beta tic-tac-toe player with a Python value function.
///
/// Boards are flat row-major lists in canonical orientation: `1` for the
/// player to move, `-1` for the opponent, `0` for empty.
#[pyclass(name = "AlphaBetaPlayer", unsendable)]
pub struct PyAlphaBetaPlayer {
    search: AlphaBeta<TicTacToe, PyValueFn>,
    size: usize,
}

#[pymethods]
impl PyAlphaBetaPlayer {
    #[new]
    #[pyo3(signature = (value_fn, size = 3, max_depth = 4, pruning = true))]
    fn new(value_fn: PyObject, size: usize, max_depth: u32, pruning: bool) -> PyResult<Self> {
        if !(3..=8).contains(&size) {
            return Err(PyValueError::new_err(format!(
                "board size {size} is not supported, expected 3-8"
            )));
        }

        let config = SearchConfig::default()
            .with_max_depth(max_depth)
            .with_pruning(pruning);
        let search = AlphaBeta::new(TicTacToe::new(size), python_value_fn(value_fn), config)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;

        Ok(Self { search, size })
    }

    /// Best cell index for the player to move, or None if the board is full.
    fn choose_action(&mut self, board: Vec<i8>) -> PyResult<Option<u16>> {
        let board = self.board(&board)?;
        let action = self.search.choose_action(&board);
        self.raise_callback_error()?;
        Ok(action.map(|a| a.0))
    }

    /// Searched value of every legal cell, as `(index, value)` pairs.
    fn analyze(&mut self, board: Vec<i8>) -> PyResult<Vec<(u16, f64)>> {
        let board = self.board(&board)?;
        let values = self.search.analyze(&board);
        self.raise_callback_error()?;
        Ok(values.into_iter().map(|(a, v)| (a.0, v)).collect())
    }

    /// Statistics of the last decision.
    #[getter]
    fn stats(&self) -> PySearchStats {
        PySearchStats(self.search.stats().clone())
    }

    #[getter]
    fn size(&self) -> usize {
        self.size
    }

    #[getter]
    fn max_depth(&self) -> u32 {
        self.search.config().max_depth
    }

    fn __repr__(&self) -> String {
        let config = self.search.config();
        format!(
            "AlphaBetaPlayer(size={}, max_depth={}, pruning={})",
            self.size, config.max_depth, config.pruning
        )
    }
}

impl PyAlphaBetaPlayer {
    fn board(&self, cells: &[i8]) -> PyResult<Board> {
        Board::from_cells(self.size, cells).map_err(|e| PyValueError::new_err(e.to_string()))
    }

    fn raise_callback_error(&self) -> PyResult<()> {
        match self.search.evaluator().take_error() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
