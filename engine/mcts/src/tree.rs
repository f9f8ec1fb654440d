//! Arena-backed search tree.
//!
//! The tree owns every node of one search plus the random source used for
//! its shuffles and rollouts. Nodes are stored in a contiguous `Vec` and
//! referenced by `NodeId` indices; dropping the tree tears everything down
//! in bulk, so no node can outlive the search that created it.

use crate::config::MctsConfig;
use crate::node::{NodeId, SearchNode};
use crate::rollout::{rollout, Rollout};
use engine_core::Game;
use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha20Rng;

#[derive(Debug)]
pub struct SearchTree<'g, G: Game> {
    game: &'g G,
    nodes: Vec<SearchNode<G::Board, G::Move>>,
    root: NodeId,
    rng: ChaCha20Rng,
}

impl<'g, G: Game> SearchTree<'g, G> {
    pub fn new(game: &'g G, root_board: G::Board, rng: ChaCha20Rng) -> Self {
        Self {
            game,
            nodes: vec![SearchNode::root(root_board)],
            root: NodeId(0),
            rng,
        }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &SearchNode<G::Board, G::Move> {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut SearchNode<G::Board, G::Move> {
        &mut self.nodes[id.index()]
    }

    /// Total number of nodes allocated so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn allocate(&mut self, node: SearchNode<G::Board, G::Move>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Enumerate the node's legal moves and attach one child per legal
    /// move, each wrapping the resulting board. Candidates are shuffled
    /// first so positional bias cannot leak through score ties. A node
    /// left with zero children is terminal.
    pub fn expand(&mut self, id: NodeId) {
        if self.get(id).expanded {
            return;
        }
        let mut candidates = self.game.candidate_moves(&self.get(id).board);
        candidates.shuffle(&mut self.rng);

        let mut children = Vec::new();
        for mv in candidates {
            let mut board = self.get(id).board.clone();
            if self.game.apply(&mut board, mv) {
                children.push(self.allocate(SearchNode::child(id, mv, board)));
            }
        }
        let node = self.get_mut(id);
        node.children = children;
        node.expanded = true;
    }

    /// Pick the child with the highest selection score; ties are broken
    /// uniformly at random. Returns `None` for a childless node.
    pub fn select_child(&mut self, id: NodeId, config: &MctsConfig) -> Option<NodeId> {
        let parent_visits = self.get(id).visits;
        let mut best = f64::NEG_INFINITY;
        let mut ties: Vec<NodeId> = Vec::new();
        for &child in &self.get(id).children {
            let score = self.get(child).score(parent_visits, config);
            if score > best {
                best = score;
                ties.clear();
                ties.push(child);
            } else if score == best {
                ties.push(child);
            }
        }
        if ties.is_empty() {
            None
        } else {
            Some(ties[self.rng.gen_range(0..ties.len())])
        }
    }

    /// Random playout from the node's board using the tree's rng.
    pub fn simulate(&mut self, id: NodeId) -> Rollout<G::Move> {
        let board = self.nodes[id.index()].board.clone();
        rollout(self.game, &board, &mut self.rng)
    }

    /// Update statistics along `path` (root first, leaf last).
    ///
    /// `leaf_side_won` is the rollout outcome for the side to move at the
    /// leaf. Walking back up, the win credit flips at every ply so each
    /// node's `wins` counts wins for the color that moved into it.
    ///
    /// With `rave` set, every node on the path additionally credits the
    /// RAVE counters of the child matching the first move taken from that
    /// node toward the simulated leaf: the path edge for interior nodes,
    /// the first rollout move for the leaf itself.
    pub fn backpropagate(
        &mut self,
        path: &[NodeId],
        leaf_side_won: bool,
        first_rollout_move: Option<G::Move>,
        rave: bool,
    ) {
        // credit for the leaf node: won by the color that moved into it
        let mut credit = !leaf_side_won;
        for (depth, &id) in path.iter().enumerate().rev() {
            {
                let node = self.get_mut(id);
                node.visits += 1;
                if credit {
                    node.wins += 1;
                }
            }

            if rave {
                let taken = if depth + 1 < path.len() {
                    self.get(path[depth + 1]).mv
                } else {
                    first_rollout_move
                };
                if let Some(taken) = taken {
                    // the move out of this node belongs to the next ply,
                    // so its credit is the opposite of this node's
                    let child_credit = !credit;
                    let matched = self
                        .get(id)
                        .children
                        .iter()
                        .copied()
                        .find(|&c| self.get(c).mv == Some(taken));
                    if let Some(child_id) = matched {
                        let child = self.get_mut(child_id);
                        child.rave_visits += 1;
                        if child_credit {
                            child.rave_wins += 1;
                        }
                    }
                }
            }

            credit = !credit;
        }
    }

    /// Most-visited root child; ties go to the earliest child in order.
    pub fn best_child(&self) -> Option<NodeId> {
        let mut best: Option<NodeId> = None;
        let mut best_visits = 0u32;
        for &child in &self.get(self.root).children {
            let visits = self.get(child).visits;
            if best.is_none() || visits > best_visits {
                best = Some(child);
                best_visits = visits;
            }
        }
        best
    }
}
