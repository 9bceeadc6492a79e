//! Explicit game trees.
//!
//! `TreeGame` stores every position as a node in an arena. Action `i` at a
//! node leads to its `i`-th child, and turns alternate between the players.
//! Nodes carry an optional terminal outcome (canonical perspective) and a
//! static estimate that `TreeGame::estimator` serves as the evaluator.
//!
//! Useful for hand-built scenarios and for randomized checks of the search.
//!
//! ```
//! use rust_alphabeta::games::tree::TreeGame;
//! use rust_alphabeta::rules::GameResult;
//!
//! let mut game = TreeGame::new(0.0);
//! let root = game.root();
//! let quiet = game.add_child(root, 0.3);
//! let won = game.add_terminal(root, GameResult::Win);
//!
//! assert_eq!(game.node(root).children, vec![quiet, won]);
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{Action, ActionMask, GameRng, PlayerId, Value};
use crate::rules::{GameResult, RulesEngine};

/// Node identifier within a `TreeGame`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Get the arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// One position in the tree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Positions reachable in one move, by action index.
    pub children: Vec<NodeId>,

    /// Final result for the canonical player, if the game ends here.
    pub outcome: Option<GameResult>,

    /// Static value estimate for the canonical player.
    pub estimate: Value,
}

/// Estimates drawn by `TreeGame::random`. Coarse on purpose, so ties and
/// exact wins and losses show up often.
const RANDOM_ESTIMATES: [Value; 5] = [-1.0, -0.5, 0.0, 0.5, 1.0];

const RANDOM_RESULTS: [GameResult; 3] = [GameResult::Win, GameResult::Loss, GameResult::Draw];

/// Probability that a generated interior node ends the game.
const RANDOM_TERMINAL_PROBABILITY: f64 = 0.15;

/// Game defined by an explicit tree of positions.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TreeGame {
    nodes: Vec<TreeNode>,
    action_size: usize,
}

impl TreeGame {
    /// Create a tree holding only a non-terminal root.
    pub fn new(root_estimate: Value) -> Self {
        Self {
            nodes: vec![TreeNode {
                children: Vec::new(),
                outcome: None,
                estimate: root_estimate,
            }],
            action_size: 0,
        }
    }

    /// Generate a random tree.
    ///
    /// Every interior node gets between 1 and `branching` children, down to
    /// `depth` plies below the root. Some interior nodes end the game early.
    /// The same seed always builds the same tree.
    pub fn random(seed: u64, depth: u32, branching: usize) -> Self {
        assert!(branching > 0, "Branching factor must be positive");

        let mut rng = GameRng::new(seed);
        let root_estimate = *rng.choose(&RANDOM_ESTIMATES).unwrap_or(&0.0);
        let mut game = Self::new(root_estimate);
        let root = game.root();
        game.grow(&mut rng, root, depth, branching);
        game
    }

    fn grow(&mut self, rng: &mut GameRng, parent: NodeId, depth: u32, branching: usize) {
        if depth == 0 {
            return;
        }

        let child_count = rng.gen_range_usize(1..branching + 1);
        for _ in 0..child_count {
            let ends_here = depth > 1 && rng.gen_bool(RANDOM_TERMINAL_PROBABILITY);
            if ends_here {
                let result = *rng.choose(&RANDOM_RESULTS).unwrap_or(&GameResult::Draw);
                self.add_terminal(parent, result);
            } else {
                let estimate = *rng.choose(&RANDOM_ESTIMATES).unwrap_or(&0.0);
                let child = self.add_child(parent, estimate);
                self.grow(rng, child, depth - 1, branching);
            }
        }
    }

    /// The root node, canonical player to move.
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Append a non-terminal child to `parent`.
    pub fn add_child(&mut self, parent: NodeId, estimate: Value) -> NodeId {
        self.push(parent, None, estimate)
    }

    /// Append a child to `parent` where the game ends with `result`
    /// (canonical perspective).
    pub fn add_terminal(&mut self, parent: NodeId, result: GameResult) -> NodeId {
        self.push(parent, Some(result), result.value())
    }

    fn push(&mut self, parent: NodeId, outcome: Option<GameResult>, estimate: Value) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(TreeNode {
            children: Vec::new(),
            outcome,
            estimate,
        });

        let siblings = &mut self.nodes[parent.index()].children;
        siblings.push(id);
        self.action_size = self.action_size.max(siblings.len());
        id
    }

    /// Get a node.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.index()]
    }

    /// Static estimate of a node.
    #[must_use]
    pub fn estimate(&self, id: NodeId) -> Value {
        self.nodes[id.index()].estimate
    }

    /// Number of nodes, root included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a tree has at least its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Evaluator reading each node's static estimate.
    pub fn estimator(&self) -> impl Fn(&NodeId) -> Value + '_ {
        move |id: &NodeId| self.estimate(*id)
    }
}

impl RulesEngine for TreeGame {
    type Position = NodeId;

    fn action_size(&self) -> usize {
        self.action_size
    }

    fn valid_moves(&self, position: &NodeId, _player: PlayerId) -> ActionMask {
        let mut mask = ActionMask::new(self.action_size);
        for index in 0..self.node(*position).children.len() {
            mask.set(Action::new(index as u16));
        }
        mask
    }

    fn next_state(&self, position: &NodeId, player: PlayerId, action: Action) -> (NodeId, PlayerId) {
        (self.node(*position).children[action.index()], player.opponent())
    }

    fn outcome(&self, position: &NodeId, perspective: PlayerId) -> Option<GameResult> {
        self.node(*position).outcome.map(|result| {
            if perspective.is_canonical() {
                result
            } else {
                result.flipped()
            }
        })
    }
}
