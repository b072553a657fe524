//! JSON puzzle descriptions accepted by the command-line driver.
//!
//! ```json
//! {"kind": "peg_solitaire", "grid": ["*****", "**.**"]}
//! {"kind": "mn_puzzle", "from": [["*", "2"], ["1", "3"]], "to": [["1", "2"], ["3", "*"]]}
//! {"kind": "word_ladder", "from": "same", "to": "cost", "dictionary": "words.txt"}
//! ```

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::puzzles::{parse_dictionary, AnyPuzzle, GridPegSolitaire, MnPuzzle, WordLadder};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PuzzleFile {
    PegSolitaire {
        grid: Vec<String>,
        /// Allowed marker symbols; all of `*.#` when absent.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        markers: Option<String>,
    },
    MnPuzzle {
        from: Vec<Vec<String>>,
        to: Vec<Vec<String>>,
    },
    WordLadder {
        from: String,
        to: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        words: Vec<String>,
        /// Whitespace-separated word list, merged with `words`.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        dictionary: Option<PathBuf>,
    },
}

impl PuzzleFile {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .map_err(|e| Error::io(format!("read puzzle file {}", path.display()), e))?;
        Self::from_json(&json)
    }

    /// Validate the description and construct the puzzle.
    pub fn build(&self) -> Result<AnyPuzzle> {
        let puzzle: AnyPuzzle = match self {
            PuzzleFile::PegSolitaire { grid, markers } => {
                let markers = match markers {
                    Some(symbols) => GridPegSolitaire::parse_markers(symbols)?,
                    None => GridPegSolitaire::all_markers(),
                };
                GridPegSolitaire::parse(grid, &markers)?.into()
            }
            PuzzleFile::MnPuzzle { from, to } => MnPuzzle::new(from, to)?.into(),
            PuzzleFile::WordLadder {
                from,
                to,
                words,
                dictionary,
            } => {
                let mut all: BTreeSet<String> = words.iter().cloned().collect();
                if let Some(path) = dictionary {
                    all.extend(load_dictionary(path)?);
                }
                WordLadder::new(from.as_str(), to.as_str(), Rc::new(all))?.into()
            }
        };
        debug!(kind = puzzle.kind(), "built puzzle");
        Ok(puzzle)
    }
}

/// Read a whitespace-separated word list.
pub fn load_dictionary(path: &Path) -> Result<BTreeSet<String>> {
    let text = fs::read_to_string(path)
        .map_err(|e| Error::io(format!("read dictionary {}", path.display()), e))?;
    let words = parse_dictionary(&text);
    debug!(path = %path.display(), words = words.len(), "loaded dictionary");
    Ok(words)
}
