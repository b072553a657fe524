//! Depth-first and breadth-first search over any [`Puzzle`].
//!
//! Both strategies keep a visited set keyed on configuration equality and
//! record every discovered configuration in a [`SearchTree`], so the
//! solution chain is rebuilt the same way regardless of traversal order.
//!
//! Depth-first search commits to the first branch that reaches a solved
//! configuration and makes no promise about path length. Breadth-first
//! search marks configurations visited as soon as they are discovered and
//! therefore returns a chain with the minimum number of moves.

use std::collections::VecDeque;
use std::fmt;
use std::time::Instant;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::node::{NodeId, SearchStats, SearchTree, Solution};
use crate::puzzle::Puzzle;

/// Traversal order used by [`solve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    DepthFirst,
    BreadthFirst,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::DepthFirst => write!(f, "depth-first"),
            Strategy::BreadthFirst => write!(f, "breadth-first"),
        }
    }
}

/// Outcome of one search run.
#[derive(Debug, Clone)]
pub struct SearchReport<P> {
    pub strategy: Strategy,
    /// `None` when no solved configuration is reachable.
    pub solution: Option<Solution<P>>,
    pub stats: SearchStats,
}

impl<P> SearchReport<P> {
    pub fn is_solved(&self) -> bool {
        self.solution.is_some()
    }
}

/// Run `strategy` from `start`.
pub fn solve<P: Puzzle>(start: P, strategy: Strategy) -> SearchReport<P> {
    match strategy {
        Strategy::DepthFirst => depth_first_search(start),
        Strategy::BreadthFirst => breadth_first_search(start),
    }
}

/// Find some solution depth-first, or `None` if none exists.
pub fn depth_first_solve<P: Puzzle>(start: P) -> Option<Solution<P>> {
    depth_first_search(start).solution
}

/// Find a shortest solution breadth-first, or `None` if none exists.
pub fn breadth_first_solve<P: Puzzle>(start: P) -> Option<Solution<P>> {
    breadth_first_search(start).solution
}

/// Per-run bookkeeping shared by both strategies.
struct Run<P> {
    strategy: Strategy,
    started: Instant,
    tree: SearchTree<P>,
    visited: FxHashSet<P>,
    stats: SearchStats,
}

impl<P: Puzzle> Run<P> {
    fn new(start: P, strategy: Strategy) -> Self {
        debug!(%strategy, "starting search");

        let mut visited = FxHashSet::default();
        visited.insert(start.clone());

        Self {
            strategy,
            started: Instant::now(),
            tree: SearchTree::new(start),
            visited,
            stats: SearchStats {
                discovered: 1,
                ..Default::default()
            },
        }
    }

    /// Record `puzzle` as a child of `parent` unless an equal configuration
    /// was already seen. Returns the new node's id.
    fn discover(&mut self, puzzle: P, parent: NodeId) -> Option<NodeId> {
        if self.visited.contains(&puzzle) {
            return None;
        }
        self.visited.insert(puzzle.clone());
        self.stats.discovered += 1;
        Some(self.tree.push(puzzle, parent))
    }

    fn expand(&mut self, id: NodeId) -> Vec<P> {
        self.stats.expanded += 1;
        let node = self.tree.get(id);
        trace!(node = id, depth = node.depth, "expanding");
        node.puzzle.extensions()
    }

    fn observe_frontier(&mut self, len: usize) {
        self.stats.max_frontier = self.stats.max_frontier.max(len);
    }

    fn finish(mut self, goal: Option<NodeId>) -> SearchReport<P> {
        self.stats.elapsed_ms = self.started.elapsed().as_millis() as u64;
        let solution = goal.map(|id| self.tree.path_to(id));

        debug!(
            strategy = %self.strategy,
            found = solution.is_some(),
            moves = ?solution.as_ref().map(Solution::moves),
            expanded = self.stats.expanded,
            discovered = self.stats.discovered,
            max_frontier = self.stats.max_frontier,
            elapsed_ms = self.stats.elapsed_ms,
            "search finished"
        );

        SearchReport {
            strategy: self.strategy,
            solution,
            stats: self.stats,
        }
    }
}

/// A configuration on the current depth-first path and the extensions it
/// has not tried yet.
struct Frame<P> {
    node: NodeId,
    pending: std::vec::IntoIter<P>,
}

/// Depth-first search with an explicit stack.
///
/// Visits configurations in exactly the order a recursive backtracking
/// search would: an extension is marked visited and descended into before
/// its later siblings are looked at, and the first solved configuration
/// ends the run.
pub fn depth_first_search<P: Puzzle>(start: P) -> SearchReport<P> {
    let mut run = Run::new(start, Strategy::DepthFirst);
    let root = run.tree.root();

    if run.tree.get(root).puzzle.is_solved() {
        return run.finish(Some(root));
    }

    let pending = run.expand(root).into_iter();
    let mut stack = vec![Frame {
        node: root,
        pending,
    }];
    run.observe_frontier(stack.len());

    while let Some(frame) = stack.last_mut() {
        let Some(next) = frame.pending.next() else {
            // every extension visited or dead: backtrack
            stack.pop();
            continue;
        };
        let parent = frame.node;

        let Some(child) = run.discover(next, parent) else {
            continue;
        };

        if run.tree.get(child).puzzle.is_solved() {
            return run.finish(Some(child));
        }

        let pending = run.expand(child).into_iter();
        stack.push(Frame {
            node: child,
            pending,
        });
        run.observe_frontier(stack.len());
    }

    run.finish(None)
}

/// Breadth-first search with a FIFO frontier.
///
/// Extensions are marked visited when they are enqueued, so each
/// configuration enters the queue at most once and at its minimum depth.
pub fn breadth_first_search<P: Puzzle>(start: P) -> SearchReport<P> {
    let mut run = Run::new(start, Strategy::BreadthFirst);

    let mut queue: VecDeque<NodeId> = VecDeque::new();
    queue.push_back(run.tree.root());
    run.observe_frontier(queue.len());

    while let Some(current) = queue.pop_front() {
        if run.tree.get(current).puzzle.is_solved() {
            return run.finish(Some(current));
        }

        for next in run.expand(current) {
            if let Some(child) = run.discover(next, current) {
                queue.push_back(child);
            }
        }
        run.observe_frontier(queue.len());
    }

    run.finish(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::testing::Graph;

    fn nodes<P>(solution: &Solution<P>, id: impl Fn(&P) -> u32) -> Vec<u32> {
        solution.iter().map(id).collect()
    }

    #[test]
    fn test_solved_start_is_zero_moves() {
        let graph = Graph::new(&[(0, &[1])], &[0]);

        for strategy in [Strategy::DepthFirst, Strategy::BreadthFirst] {
            let report = solve(graph.at(0), strategy);
            let solution = report.solution.expect("start is solved");
            assert_eq!(solution.moves(), 0);
            assert_eq!(report.stats.expanded, 0);
        }
    }

    #[test]
    fn test_dead_end_start_is_not_found() {
        let graph = Graph::new(&[], &[5]);

        assert!(depth_first_solve(graph.at(0)).is_none());
        assert!(breadth_first_solve(graph.at(0)).is_none());
    }

    #[test]
    fn test_depth_first_takes_first_successful_branch() {
        // 0 -> 1 -> 2 -> 3 (goal) and 0 -> 3 directly; depth-first commits
        // to the first extension and returns the long chain.
        let graph = Graph::new(&[(0, &[1, 3]), (1, &[2]), (2, &[3])], &[3]);

        let solution = depth_first_solve(graph.at(0)).unwrap();
        assert_eq!(nodes(&solution, |p| p.node), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_breadth_first_finds_shortest() {
        let graph = Graph::new(&[(0, &[1, 3]), (1, &[2]), (2, &[3])], &[3]);

        let solution = breadth_first_solve(graph.at(0)).unwrap();
        assert_eq!(nodes(&solution, |p| p.node), vec![0, 3]);
    }

    #[test]
    fn test_depth_first_backtracks_out_of_dead_ends() {
        let graph = Graph::new(&[(0, &[1, 4]), (1, &[2]), (2, &[]), (4, &[5])], &[5]);

        let report = depth_first_search(graph.at(0));
        let solution = report.solution.unwrap();
        assert_eq!(nodes(&solution, |p| p.node), vec![0, 4, 5]);
        assert_eq!(report.stats.max_frontier, 3);
    }

    #[test]
    fn test_cycles_terminate_without_solution() {
        let graph = Graph::new(&[(0, &[1, 2]), (1, &[0, 2]), (2, &[0, 1])], &[9]);

        for strategy in [Strategy::DepthFirst, Strategy::BreadthFirst] {
            let report = solve(graph.at(0), strategy);
            assert!(report.solution.is_none());
            assert_eq!(report.stats.discovered, 3);
            assert_eq!(report.stats.expanded, 3);
        }
    }

    #[test]
    fn test_no_configuration_expanded_twice() {
        // diamond with back edges: 3 is reachable from both 1 and 2
        let edges: &[(u32, &[u32])] = &[
            (0, &[1, 2]),
            (1, &[3, 0]),
            (2, &[3, 0]),
            (3, &[4, 1, 2]),
            (4, &[3]),
        ];

        let graph = Graph::new(edges, &[]);
        depth_first_search(graph.at(0));
        assert_eq!(graph.max_expansions(), 1);

        let graph = Graph::new(edges, &[]);
        breadth_first_search(graph.at(0));
        assert_eq!(graph.max_expansions(), 1);
    }

    #[test]
    fn test_breadth_first_marks_visited_on_discovery() {
        // 1 and 2 both lead to 3; it must be queued only once
        let graph = Graph::new(&[(0, &[1, 2]), (1, &[3]), (2, &[3])], &[]);

        let report = breadth_first_search(graph.at(0));
        assert_eq!(report.stats.discovered, 4);
        assert_eq!(report.stats.expanded, 4);
        assert_eq!(report.stats.max_frontier, 2);
    }

    #[test]
    fn test_strategy_display() {
        assert_eq!(Strategy::DepthFirst.to_string(), "depth-first");
        assert_eq!(Strategy::BreadthFirst.to_string(), "breadth-first");
        assert_eq!(
            serde_json::to_string(&Strategy::BreadthFirst).unwrap(),
            "\"breadth-first\""
        );
    }
}
