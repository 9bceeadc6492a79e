//! Python bindings for the alpha-beta search.
//!
//! Exposes a tic-tac-toe player whose leaf evaluator is a Python callable,
//! typically a trained value network.
//!
//! # Quick Start
//!
//! ```python
//! import rust_alphabeta as ab
//!
//! # Value of a canonical board (1 = ours, -1 = theirs, 0 = empty), in [-1, 1]
//! def value_fn(cells):
//!     return 0.0
//!
//! player = ab.AlphaBetaPlayer(value_fn, size=3, max_depth=4)
//! action = player.choose_action([0, 0, 0, 1, 1, 0, -1, -1, 0])
//! assert action == 5
//! ```

use pyo3::prelude::*;

mod py_player;

pub use py_player::*;

/// rust_alphabeta: depth-limited alpha-beta search with Python evaluators.
#[pymodule]
fn rust_alphabeta(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyAlphaBetaPlayer>()?;
    m.add_class::<PySearchStats>()?;
    Ok(())
}
