//! Generic state-space search for puzzles.
//!
//! Any type implementing [`Puzzle`] (a solved check plus one-move
//! extensions) can be solved depth-first or breadth-first. Three domains
//! ship with the crate: grid peg solitaire, sliding-tile MN-puzzles and word
//! ladders.

pub mod config;
pub mod error;
pub mod node;
pub mod puzzle;
pub mod puzzles;
pub mod solver;

// Re-export main types
pub use config::{load_dictionary, PuzzleFile};
pub use error::{Error, Result};
pub use node::{SearchNode, SearchStats, SearchTree, Solution};
pub use puzzle::Puzzle;
pub use puzzles::{AnyPuzzle, Cell, GridPegSolitaire, MnPuzzle, WordLadder};
pub use solver::{
    breadth_first_search, breadth_first_solve, depth_first_search, depth_first_solve, solve,
    SearchReport, Strategy,
};
