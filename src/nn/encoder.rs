//! Position encoding for neural network input.
//!
//! Transforms canonical positions into tensor representations suitable for
//! neural networks.

use crate::nn::traits::EncodedState;

/// Encodes canonical positions into tensors for neural network input.
///
/// Each encoder defines:
/// - How to convert a position to a tensor
/// - The shape of the output tensor
/// - The size of the action space
///
/// Positions are already in the canonical orientation, so there is no
/// perspective argument.
pub trait StateEncoder<P> {
    /// Encode a canonical position.
    fn encode(&self, position: &P) -> EncodedState;

    /// Get the shape of encoded states.
    fn output_shape(&self) -> Vec<usize>;

    /// Get the total number of possible actions.
    ///
    /// This defines the size of the policy output vector.
    fn action_space_size(&self) -> usize;
}

/// Encoder that ignores the position and emits zeros (for testing).
#[derive(Clone, Debug)]
pub struct ZeroEncoder {
    shape: Vec<usize>,
    action_space: usize,
}

impl ZeroEncoder {
    /// Create a zero encoder with a fixed output shape.
    pub fn new(shape: Vec<usize>, action_space: usize) -> Self {
        Self {
            shape,
            action_space,
        }
    }
}

impl<P> StateEncoder<P> for ZeroEncoder {
    fn encode(&self, _position: &P) -> EncodedState {
        EncodedState::zeros(self.shape.clone())
    }

    fn output_shape(&self) -> Vec<usize> {
        self.shape.clone()
    }

    fn action_space_size(&self) -> usize {
        self.action_space
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_encoder() {
        let encoder = ZeroEncoder::new(vec![3, 3], 9);
        let encoded = StateEncoder::<u8>::encode(&encoder, &7);

        assert_eq!(encoded.shape, vec![3, 3]);
        assert_eq!(encoded.len(), 9);
        assert!(encoded.tensor.iter().all(|&v| v == 0.0));
        assert_eq!(StateEncoder::<u8>::action_space_size(&encoder), 9);
    }
}
