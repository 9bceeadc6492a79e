//! Move enumeration.

use crate::core::{ActionList, PlayerId};
use crate::rules::RulesEngine;

/// Legal actions for `player` in `position`, in ascending index order.
///
/// An empty list is a valid answer and callers must handle it.
pub fn legal_actions<E: RulesEngine>(
    engine: &E,
    position: &E::Position,
    player: PlayerId,
) -> ActionList {
    engine.valid_moves(position, player).iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Action, ActionMask};
    use crate::rules::GameResult;

    /// Legal actions are the indices listed in the position itself.
    struct Listed;

    impl RulesEngine for Listed {
        type Position = Vec<u16>;

        fn action_size(&self) -> usize {
            16
        }

        fn valid_moves(&self, position: &Vec<u16>, _player: PlayerId) -> ActionMask {
            let mut mask = ActionMask::new(self.action_size());
            for &index in position {
                mask.set(Action::new(index));
            }
            mask
        }

        fn next_state(&self, position: &Vec<u16>, player: PlayerId, _action: Action) -> (Vec<u16>, PlayerId) {
            (position.clone(), player.opponent())
        }

        fn outcome(&self, _position: &Vec<u16>, _perspective: PlayerId) -> Option<GameResult> {
            None
        }
    }

    #[test]
    fn test_legal_actions_sorted() {
        let actions = legal_actions(&Listed, &vec![9, 1, 4], PlayerId::CANONICAL);
        assert_eq!(actions.as_slice(), &[Action::new(1), Action::new(4), Action::new(9)]);
    }

    #[test]
    fn test_legal_actions_empty() {
        let actions = legal_actions(&Listed, &vec![], PlayerId::OPPONENT);
        assert!(actions.is_empty());
    }
}
