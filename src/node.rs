//! Search nodes and solution-path reconstruction.
//!
//! Every configuration a run discovers is stored once in a [`SearchTree`]
//! arena together with the index of the node that produced it. Following
//! those parent links from a solved node back to the root yields the move
//! sequence.

use std::fmt;

use serde::Serialize;

use crate::puzzle::Puzzle;

/// Index of a node inside its [`SearchTree`].
pub type NodeId = usize;

/// A configuration plus the node it was reached from.
#[derive(Debug, Clone)]
pub struct SearchNode<P> {
    pub puzzle: P,
    /// `None` for the root.
    pub parent: Option<NodeId>,
    /// Moves from the root.
    pub depth: usize,
}

/// Arena of nodes owned by a single search run.
#[derive(Debug, Clone)]
pub struct SearchTree<P> {
    nodes: Vec<SearchNode<P>>,
}

impl<P: Puzzle> SearchTree<P> {
    /// Create a tree holding only the root configuration.
    pub fn new(root: P) -> Self {
        Self {
            nodes: vec![SearchNode {
                puzzle: root,
                parent: None,
                depth: 0,
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        0
    }

    /// Add `puzzle` as a child of `parent` and return its id.
    pub fn push(&mut self, puzzle: P, parent: NodeId) -> NodeId {
        let depth = self.nodes[parent].depth + 1;
        self.nodes.push(SearchNode {
            puzzle,
            parent: Some(parent),
            depth,
        });
        self.nodes.len() - 1
    }

    pub fn get(&self, id: NodeId) -> &SearchNode<P> {
        &self.nodes[id]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Walk parent links from `id` to the root and return the chain in
    /// start-to-end order.
    pub fn path_to(&self, id: NodeId) -> Solution<P> {
        let mut path = Vec::with_capacity(self.nodes[id].depth + 1);
        let mut current = Some(id);

        while let Some(node_id) = current {
            let node = &self.nodes[node_id];
            path.push(node.puzzle.clone());
            current = node.parent;
        }

        path.reverse();
        Solution { path }
    }
}

/// A chain of configurations from the start to a solved one.
///
/// Always non-empty. A single-element chain means the start was already
/// solved: zero moves, which is a success and not the same as "not found".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution<P> {
    path: Vec<P>,
}

impl<P> Solution<P> {
    /// Number of moves, i.e. one less than the number of configurations.
    pub fn moves(&self) -> usize {
        self.path.len() - 1
    }

    pub fn start(&self) -> &P {
        &self.path[0]
    }

    /// The solved configuration at the end of the chain.
    pub fn end(&self) -> &P {
        &self.path[self.path.len() - 1]
    }

    pub fn path(&self) -> &[P] {
        &self.path
    }

    pub fn iter(&self) -> std::slice::Iter<'_, P> {
        self.path.iter()
    }

    pub fn into_path(self) -> Vec<P> {
        self.path
    }
}

impl<P: fmt::Display> Solution<P> {
    /// Render every configuration in the chain, start first.
    pub fn render(&self) -> Vec<String> {
        self.path.iter().map(|p| p.to_string()).collect()
    }
}

impl<P: fmt::Display> fmt::Display for Solution<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, puzzle) in self.path.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
                writeln!(f)?;
            }
            write!(f, "{}", puzzle)?;
        }
        Ok(())
    }
}

impl<'a, P> IntoIterator for &'a Solution<P> {
    type Item = &'a P;
    type IntoIter = std::slice::Iter<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.path.iter()
    }
}

/// Counters collected during one search run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStats {
    /// Configurations whose extensions were generated.
    pub expanded: usize,
    /// Configurations entered into the visited set, start included.
    pub discovered: usize,
    /// Peak size of the frontier (queue or stack).
    pub max_frontier: usize,
    pub elapsed_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::testing::Graph;

    #[test]
    fn test_path_to_root_is_single_node() {
        let graph = Graph::new(&[], &[]);
        let tree = SearchTree::new(graph.at(7));
        let solution = tree.path_to(tree.root());

        assert_eq!(solution.moves(), 0);
        assert_eq!(solution.start().node, 7);
        assert_eq!(solution.end().node, 7);
    }

    #[test]
    fn test_path_to_follows_parents_only() {
        let graph = Graph::new(&[], &[]);
        let mut tree = SearchTree::new(graph.at(0));
        let a = tree.push(graph.at(1), tree.root());
        let _sibling = tree.push(graph.at(2), tree.root());
        let b = tree.push(graph.at(3), a);
        let c = tree.push(graph.at(4), b);

        let nodes: Vec<u32> = tree.path_to(c).iter().map(|p| p.node).collect();
        assert_eq!(nodes, vec![0, 1, 3, 4]);
        assert_eq!(tree.get(c).depth, 3);
        assert_eq!(tree.len(), 5);
    }
}
