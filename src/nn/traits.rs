//! Evaluator and neural network traits.
//!
//! `Evaluator` is the contract the search relies on: one scalar per
//! position, already in the canonical perspective. `PolicyValueNetwork`
//! describes a learned model whose value head can be adapted into an
//! `Evaluator` through `NetworkEvaluator`.

use std::cell::RefCell;
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use crate::core::value::{clamp_value, Value, DRAW};

use super::encoder::StateEncoder;

/// Heuristic position evaluator.
///
/// Called only on non-terminal positions once the depth budget is spent.
/// Must return a value on the same scale as terminal outcomes, from the
/// canonical player's perspective.
pub trait Evaluator<P> {
    /// Estimate the value of `position`.
    fn evaluate(&self, position: &P) -> Value;

    /// True once the evaluator has failed and the decision should stop.
    ///
    /// The search checks this between children and unwinds without
    /// visiting the rest of the tree.
    fn aborted(&self) -> bool {
        false
    }
}

impl<P, F> Evaluator<P> for F
where
    F: Fn(&P) -> Value,
{
    fn evaluate(&self, position: &P) -> Value {
        self(position)
    }
}

/// Encoded position as a flat tensor for neural network input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EncodedState {
    /// Flattened tensor data (row-major order).
    pub tensor: Vec<f32>,

    /// Shape of the tensor (e.g., [height, width] or [features]).
    pub shape: Vec<usize>,
}

impl EncodedState {
    /// Create a new encoded state.
    pub fn new(tensor: Vec<f32>, shape: Vec<usize>) -> Self {
        debug_assert_eq!(
            tensor.len(),
            shape.iter().product::<usize>(),
            "Tensor length must match shape product"
        );
        Self { tensor, shape }
    }

    /// Create a zero-filled encoded state with the given shape.
    pub fn zeros(shape: Vec<usize>) -> Self {
        let size = shape.iter().product();
        Self {
            tensor: vec![0.0; size],
            shape,
        }
    }

    /// Get the total number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tensor.len()
    }

    /// Check if the tensor is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tensor.is_empty()
    }
}

/// Combined policy-value network.
///
/// `predict` returns `(policy, value)`. The policy has one probability per
/// action. The value is a scalar estimate for the canonical player.
pub trait PolicyValueNetwork {
    /// Predict policy and value for an encoded canonical position.
    fn predict(&self, encoded: &EncodedState) -> (Vec<f32>, f32);
}

/// Zero value network (baseline for testing).
///
/// Uniform policy, every position valued as a draw.
#[derive(Clone, Debug, Default)]
pub struct ZeroValue {
    action_space_size: usize,
}

impl ZeroValue {
    /// Create a new baseline network.
    pub fn new(action_space_size: usize) -> Self {
        Self { action_space_size }
    }
}

impl PolicyValueNetwork for ZeroValue {
    fn predict(&self, _encoded: &EncodedState) -> (Vec<f32>, f32) {
        let policy = if self.action_space_size == 0 {
            vec![]
        } else {
            vec![1.0 / self.action_space_size as f32; self.action_space_size]
        };
        (policy, 0.0)
    }
}

/// Adapts a policy-value network into a position evaluator.
///
/// The position is encoded, the network is queried, and only the value head
/// is kept. Out-of-range values are clamped onto `[LOSS, WIN]`.
pub struct NetworkEvaluator<P, Enc, Net> {
    encoder: Enc,
    network: Net,
    _position: PhantomData<fn(&P)>,
}

impl<P, Enc, Net> NetworkEvaluator<P, Enc, Net>
where
    Enc: StateEncoder<P>,
    Net: PolicyValueNetwork,
{
    /// Pair an encoder with a network.
    pub fn new(encoder: Enc, network: Net) -> Self {
        Self {
            encoder,
            network,
            _position: PhantomData,
        }
    }

    /// Get the encoder.
    pub fn encoder(&self) -> &Enc {
        &self.encoder
    }

    /// Get the network.
    pub fn network(&self) -> &Net {
        &self.network
    }
}

impl<P, Enc, Net> Evaluator<P> for NetworkEvaluator<P, Enc, Net>
where
    Enc: StateEncoder<P>,
    Net: PolicyValueNetwork,
{
    fn evaluate(&self, position: &P) -> Value {
        let encoded = self.encoder.encode(position);
        let (_policy, value) = self.network.predict(&encoded);
        clamp_value(Value::from(value))
    }
}

/// Adapts a fallible value function into a position evaluator.
///
/// Successful values are clamped onto `[LOSS, WIN]`, with NaN read as
/// `DRAW`. The first error is kept and the evaluator reports itself as
/// aborted, so the search stops at its next check. Whatever the aborted
/// decision returns is meaningless; callers collect the error with
/// `take_error` and discard the result.
pub struct FallibleEvaluator<F, E> {
    func: F,
    error: RefCell<Option<E>>,
}

impl<F, E> FallibleEvaluator<F, E> {
    /// Wrap a value function.
    pub fn new(func: F) -> Self {
        Self {
            func,
            error: RefCell::new(None),
        }
    }

    /// Check if the value function has failed since the last `take_error`.
    pub fn has_failed(&self) -> bool {
        self.error.borrow().is_some()
    }

    /// Take the first error raised by the value function, re-arming the
    /// evaluator for the next decision.
    pub fn take_error(&self) -> Option<E> {
        self.error.borrow_mut().take()
    }

    /// Turn one call's result into a search value.
    fn settle(&self, result: Result<f64, E>) -> Value {
        match result {
            Ok(value) => clamp_value(value),
            Err(e) => {
                self.error.borrow_mut().get_or_insert(e);
                DRAW
            }
        }
    }
}

impl<P, F, E> Evaluator<P> for FallibleEvaluator<F, E>
where
    F: Fn(&P) -> Result<f64, E>,
{
    fn evaluate(&self, position: &P) -> Value {
        if self.has_failed() {
            return DRAW;
        }
        self.settle((self.func)(position))
    }

    fn aborted(&self) -> bool {
        self.has_failed()
    }
}
