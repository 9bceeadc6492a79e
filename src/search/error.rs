//! Search configuration errors.

use thiserror::Error;

/// Errors raised when a search is configured.
///
/// The search itself has no failure modes. Faults in the rules engine or the
/// evaluator propagate as panics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("search depth must be at least 1")]
    ZeroDepth,

    #[error("search depth {depth} exceeds the supported maximum of {max}")]
    DepthTooLarge { depth: u32, max: u32 },
}
