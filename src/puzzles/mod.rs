//! Concrete puzzle domains.

pub mod mn_puzzle;
pub mod peg_solitaire;
pub mod word_ladder;

use std::fmt;

pub use mn_puzzle::MnPuzzle;
pub use peg_solitaire::{Cell, GridPegSolitaire};
pub use word_ladder::{parse_dictionary, Dictionary, WordLadder};

use crate::puzzle::Puzzle;

/// Any of the supported puzzle kinds, chosen at runtime.
///
/// Values of different kinds never compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnyPuzzle {
    PegSolitaire(GridPegSolitaire),
    Mn(MnPuzzle),
    WordLadder(WordLadder),
}

impl AnyPuzzle {
    pub fn kind(&self) -> &'static str {
        match self {
            AnyPuzzle::PegSolitaire(_) => "peg_solitaire",
            AnyPuzzle::Mn(_) => "mn_puzzle",
            AnyPuzzle::WordLadder(_) => "word_ladder",
        }
    }
}

impl Puzzle for AnyPuzzle {
    fn is_solved(&self) -> bool {
        match self {
            AnyPuzzle::PegSolitaire(p) => p.is_solved(),
            AnyPuzzle::Mn(p) => p.is_solved(),
            AnyPuzzle::WordLadder(p) => p.is_solved(),
        }
    }

    fn extensions(&self) -> Vec<Self> {
        match self {
            AnyPuzzle::PegSolitaire(p) => wrap(p.extensions(), AnyPuzzle::PegSolitaire),
            AnyPuzzle::Mn(p) => wrap(p.extensions(), AnyPuzzle::Mn),
            AnyPuzzle::WordLadder(p) => wrap(p.extensions(), AnyPuzzle::WordLadder),
        }
    }
}

fn wrap<P>(extensions: Vec<P>, variant: fn(P) -> AnyPuzzle) -> Vec<AnyPuzzle> {
    extensions.into_iter().map(variant).collect()
}

impl fmt::Display for AnyPuzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyPuzzle::PegSolitaire(p) => fmt::Display::fmt(p, f),
            AnyPuzzle::Mn(p) => fmt::Display::fmt(p, f),
            AnyPuzzle::WordLadder(p) => fmt::Display::fmt(p, f),
        }
    }
}

impl From<GridPegSolitaire> for AnyPuzzle {
    fn from(p: GridPegSolitaire) -> Self {
        AnyPuzzle::PegSolitaire(p)
    }
}

impl From<MnPuzzle> for AnyPuzzle {
    fn from(p: MnPuzzle) -> Self {
        AnyPuzzle::Mn(p)
    }
}

impl From<WordLadder> for AnyPuzzle {
    fn from(p: WordLadder) -> Self {
        AnyPuzzle::WordLadder(p)
    }
}
