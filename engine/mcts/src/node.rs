//! Search tree nodes.
//!
//! Nodes live in an arena `Vec` and refer to each other through `NodeId`
//! indices, so the whole tree is dropped in one deallocation when the
//! search finishes.

use crate::config::MctsConfig;

/// Index of a node in the tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel for "no node" (the root's parent).
    pub const NONE: NodeId = NodeId(u32::MAX);

    #[inline]
    pub fn is_none(self) -> bool {
        self == NodeId::NONE
    }

    #[inline]
    pub fn is_some(self) -> bool {
        !self.is_none()
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// One search node: a board snapshot plus integer statistics.
///
/// `wins` counts simulations through this node that were won by the color
/// that played the move *into* it, so a parent choosing among children can
/// read each child's win rate directly, with no perspective flip. The
/// RAVE counters use the same perspective.
#[derive(Debug)]
pub struct SearchNode<B, M> {
    pub parent: NodeId,
    /// Move that produced this node; `None` at the root.
    pub mv: Option<M>,
    pub board: B,
    pub visits: u32,
    pub wins: u32,
    pub rave_visits: u32,
    pub rave_wins: u32,
    pub children: Vec<NodeId>,
    /// Set once the node's legal moves have been enumerated. An expanded
    /// node with no children is terminal.
    pub expanded: bool,
}

impl<B, M> SearchNode<B, M> {
    pub fn root(board: B) -> Self {
        Self {
            parent: NodeId::NONE,
            mv: None,
            board,
            visits: 0,
            wins: 0,
            rave_visits: 0,
            rave_wins: 0,
            children: Vec::new(),
            expanded: false,
        }
    }

    pub fn child(parent: NodeId, mv: M, board: B) -> Self {
        Self {
            parent,
            mv: Some(mv),
            board,
            visits: 0,
            wins: 0,
            rave_visits: 0,
            rave_wins: 0,
            children: Vec::new(),
            expanded: false,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.expanded && self.children.is_empty()
    }

    /// Selection priority seen from the parent.
    ///
    /// Unvisited children score infinity so every child is tried at least
    /// once. Otherwise:
    ///
    /// ```text
    /// winRate      = wins / (visits + 1)
    /// raveWinRate  = rave_wins / (rave_visits + 1)
    /// beta         = rave_visits /
    ///                (visits + rave_visits + 4 * visits * rave_visits * b^2)
    /// exploitation = (1 - beta) * winRate + beta * raveWinRate
    /// exploration  = C * sqrt(ln(parent_visits) / (visits + 1))
    /// ```
    ///
    /// With RAVE disabled, `beta` is zero and this reduces to plain UCT.
    pub fn score(&self, parent_visits: u32, config: &MctsConfig) -> f64 {
        if self.visits == 0 {
            return f64::INFINITY;
        }
        let visits = self.visits as f64;
        let win_rate = self.wins as f64 / (visits + 1.0);

        let exploitation = if config.rave && self.rave_visits > 0 {
            let rave_visits = self.rave_visits as f64;
            let rave_rate = self.rave_wins as f64 / (rave_visits + 1.0);
            let bias_sq = config.rave_bias * config.rave_bias;
            let beta =
                rave_visits / (visits + rave_visits + 4.0 * visits * rave_visits * bias_sq);
            (1.0 - beta) * win_rate + beta * rave_rate
        } else {
            win_rate
        };

        let exploration =
            config.exploration * ((parent_visits as f64).ln() / (visits + 1.0)).sqrt();
        exploitation + exploration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(visits: u32, wins: u32) -> SearchNode<(), ()> {
        let mut n = SearchNode::root(());
        n.visits = visits;
        n.wins = wins;
        n
    }

    #[test]
    fn unvisited_child_outranks_any_visited_child() {
        let config = MctsConfig::default();
        let fresh = node(0, 0);
        assert_eq!(fresh.score(1000, &config), f64::INFINITY);

        // even a perfect record stays finite
        let perfect = node(1_000_000, 1_000_000);
        assert!(fresh.score(1_000_000, &config) > perfect.score(1_000_000, &config));
    }

    #[test]
    fn plain_uct_matches_the_formula() {
        let config = MctsConfig::default().with_exploration(1.414);
        let n = node(10, 6);
        let expected = 6.0 / 11.0 + 1.414 * (100f64.ln() / 11.0).sqrt();
        assert!((n.score(100, &config) - expected).abs() < 1e-12);
    }

    #[test]
    fn rave_blend_pulls_toward_rave_rate() {
        let config = MctsConfig::default().with_rave(0.025);
        let mut n = node(10, 2); // weak direct record
        n.rave_visits = 50;
        n.rave_wins = 45; // strong RAVE record
        let blended = n.score(100, &config);

        let plain = node(10, 2).score(100, &MctsConfig::default());
        assert!(blended > plain);
    }

    #[test]
    fn zero_rave_visits_is_plain_uct() {
        let with_rave = MctsConfig::default().with_rave(0.025);
        let without = MctsConfig::default();
        let n = node(10, 6);
        assert_eq!(n.score(100, &with_rave), n.score(100, &without));
    }

    #[test]
    fn exploration_grows_with_parent_visits() {
        let config = MctsConfig::default();
        let n = node(5, 2);
        assert!(n.score(1000, &config) > n.score(10, &config));
    }

    #[test]
    fn terminality_requires_expansion() {
        let mut n: SearchNode<(), ()> = SearchNode::root(());
        assert!(!n.is_terminal());
        n.expanded = true;
        assert!(n.is_terminal());
        n.children.push(NodeId(1));
        assert!(!n.is_terminal());
    }

    #[test]
    fn node_id_sentinel() {
        assert!(NodeId::NONE.is_none());
        assert!(NodeId(0).is_some());
    }
}
