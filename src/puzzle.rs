//! The capability every searchable puzzle provides.
//!
//! The solver knows nothing about grids or words. It only asks a
//! configuration whether it is solved and which configurations are one move
//! away, and relies on `Eq` + `Hash` to recognise states it has seen before.

use std::hash::Hash;

/// One configuration of a puzzle domain.
///
/// Implementations must be immutable values: `extensions` builds new
/// configurations and never modifies `self`. Equality must be structural
/// (same board contents, same word) and `Hash` must agree with it, otherwise
/// the visited set cannot deduplicate and depth-first search may not
/// terminate.
pub trait Puzzle: Clone + Eq + Hash {
    /// True iff this configuration satisfies the domain's terminal predicate.
    fn is_solved(&self) -> bool;

    /// Every configuration reachable by exactly one legal move.
    ///
    /// The order must be deterministic for a given configuration, and the
    /// result never contains `self`. Returns an empty vector when no move is
    /// legal.
    fn extensions(&self) -> Vec<Self>;
}
