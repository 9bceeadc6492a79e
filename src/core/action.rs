//! Action representation: an index into the game's action space.
//!
//! The search never interprets actions. It reads them out of the rules
//! engine's validity mask and hands them back to the rules engine to
//! produce the next position.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// An action, identified by its index in the enumerable action space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Action(pub u16);

impl Action {
    /// Create a new action.
    #[must_use]
    pub const fn new(index: u16) -> Self {
        Self(index)
    }

    /// Get the raw action index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Ordered list of legal actions.
///
/// SmallVec keeps typical branching factors off the heap.
pub type ActionList = SmallVec<[Action; 32]>;

const WORD_BITS: usize = 64;

/// Bit-per-action legality, as produced by a rules engine.
///
/// ## Example
///
/// ```
/// use rust_alphabeta::core::{Action, ActionMask};
///
/// let mut mask = ActionMask::new(9);
/// mask.set(Action::new(4));
/// mask.set(Action::new(0));
///
/// let legal: Vec<_> = mask.iter().collect();
/// assert_eq!(legal, vec![Action::new(0), Action::new(4)]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionMask {
    words: SmallVec<[u64; 2]>,
    len: usize,
}

impl ActionMask {
    /// Create an all-clear mask over `len` actions.
    #[must_use]
    pub fn new(len: usize) -> Self {
        debug_assert!(len <= u16::MAX as usize + 1, "Action space too large");
        let word_count = len.div_ceil(WORD_BITS);
        Self {
            words: SmallVec::from_elem(0, word_count),
            len,
        }
    }

    /// Build a mask from one flag per action.
    #[must_use]
    pub fn from_flags(flags: &[bool]) -> Self {
        let mut mask = Self::new(flags.len());
        for (index, &valid) in flags.iter().enumerate() {
            if valid {
                mask.set(Action::new(index as u16));
            }
        }
        mask
    }

    /// Size of the action space this mask covers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the action space is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Mark an action as legal.
    ///
    /// Actions outside the action space are ignored.
    pub fn set(&mut self, action: Action) {
        let index = action.index();
        if index < self.len {
            self.words[index / WORD_BITS] |= 1u64 << (index % WORD_BITS);
        }
    }

    /// Check if an action is legal.
    #[must_use]
    pub fn is_set(&self, action: Action) -> bool {
        let index = action.index();
        index < self.len && self.words[index / WORD_BITS] & (1u64 << (index % WORD_BITS)) != 0
    }

    /// Number of legal actions.
    #[must_use]
    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Iterate over legal actions in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = Action> + '_ {
        self.words.iter().enumerate().flat_map(|(word_idx, &word)| {
            let base = word_idx * WORD_BITS;
            let mut bits = word;
            std::iter::from_fn(move || {
                if bits == 0 {
                    return None;
                }
                let offset = bits.trailing_zeros() as usize;
                bits &= bits - 1;
                Some(Action::new((base + offset) as u16))
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_basics() {
        let action = Action::new(7);
        assert_eq!(action.index(), 7);
        assert_eq!(format!("{}", action), "#7");
    }

    #[test]
    fn test_mask_starts_clear() {
        let mask = ActionMask::new(10);
        assert_eq!(mask.len(), 10);
        assert_eq!(mask.count(), 0);
        assert_eq!(mask.iter().count(), 0);
    }

    #[test]
    fn test_mask_set_and_query() {
        let mut mask = ActionMask::new(10);
        mask.set(Action::new(3));
        mask.set(Action::new(9));

        assert!(mask.is_set(Action::new(3)));
        assert!(mask.is_set(Action::new(9)));
        assert!(!mask.is_set(Action::new(4)));
        assert_eq!(mask.count(), 2);
    }

    #[test]
    fn test_mask_out_of_range_ignored() {
        let mut mask = ActionMask::new(4);
        mask.set(Action::new(4));
        mask.set(Action::new(200));

        assert_eq!(mask.count(), 0);
        assert!(!mask.is_set(Action::new(200)));
    }

    #[test]
    fn test_mask_iter_ascending_across_words() {
        let mut mask = ActionMask::new(200);
        for index in [150, 2, 64, 63, 0, 199] {
            mask.set(Action::new(index));
        }

        let indices: Vec<u16> = mask.iter().map(|a| a.0).collect();
        assert_eq!(indices, vec![0, 2, 63, 64, 150, 199]);
    }

    #[test]
    fn test_mask_from_flags() {
        let mask = ActionMask::from_flags(&[false, true, true, false, true]);
        let legal: Vec<_> = mask.iter().collect();
        assert_eq!(legal, vec![Action::new(1), Action::new(2), Action::new(4)]);
    }

    #[test]
    fn test_empty_action_space() {
        let mask = ActionMask::new(0);
        assert!(mask.is_empty());
        assert_eq!(mask.iter().count(), 0);
    }

    #[test]
    fn test_mask_serialization() {
        let mask = ActionMask::from_flags(&[true, false, true]);
        let json = serde_json::to_string(&mask).unwrap();
        let deserialized: ActionMask = serde_json::from_str(&json).unwrap();
        assert_eq!(mask, deserialized);
    }
}
