//! Word ladder: turn one word into another by changing a single letter at a
//! time, where every intermediate word must be in the dictionary.

use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use crate::error::{Error, Result};
use crate::puzzle::Puzzle;

pub type Dictionary = Rc<BTreeSet<String>>;

/// Letters tried at every position, in order.
const ALPHABET: std::ops::RangeInclusive<u8> = b'a'..=b'z';

#[derive(Debug, Clone)]
pub struct WordLadder {
    from: String,
    to: String,
    words: Dictionary,
}

fn check_word(word: &str) -> Result<()> {
    if word.is_empty() || !word.bytes().all(|b| b.is_ascii_lowercase()) {
        return Err(Error::InvalidWord {
            word: word.to_string(),
        });
    }
    Ok(())
}

/// Split dictionary text on whitespace.
pub fn parse_dictionary(text: &str) -> BTreeSet<String> {
    text.split_whitespace().map(str::to_string).collect()
}

impl WordLadder {
    pub fn new(from: impl Into<String>, to: impl Into<String>, words: Dictionary) -> Result<Self> {
        let (from, to) = (from.into(), to.into());
        check_word(&from)?;
        check_word(&to)?;
        Ok(Self { from, to, words })
    }

    /// Build a ladder with its own copy of `words`.
    pub fn with_words<I, S>(from: &str, to: &str, words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words = words.into_iter().map(Into::into).collect();
        Self::new(from, to, Rc::new(words))
    }

    pub fn word(&self) -> &str {
        &self.from
    }

    pub fn target(&self) -> &str {
        &self.to
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.words
    }

    fn step(&self, word: String) -> Self {
        Self {
            from: word,
            to: self.to.clone(),
            words: Rc::clone(&self.words),
        }
    }
}

impl PartialEq for WordLadder {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from
            && self.to == other.to
            && (Rc::ptr_eq(&self.words, &other.words) || self.words == other.words)
    }
}

impl Eq for WordLadder {}

// Dictionary is left out: equal ladders always share their two words.
impl Hash for WordLadder {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
    }
}

impl Puzzle for WordLadder {
    fn is_solved(&self) -> bool {
        self.from == self.to
    }

    fn extensions(&self) -> Vec<Self> {
        let mut result = Vec::new();
        let mut candidate = self.from.clone().into_bytes();

        for i in 0..candidate.len() {
            let original = candidate[i];
            for letter in ALPHABET {
                if letter == original {
                    continue;
                }
                candidate[i] = letter;
                // only ASCII bytes were written, so this is valid UTF-8
                if let Ok(word) = std::str::from_utf8(&candidate) {
                    if self.words.contains(word) {
                        result.push(self.step(word.to_string()));
                    }
                }
            }
            candidate[i] = original;
        }

        result
    }
}

impl fmt::Display for WordLadder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "from {} to {} given dictionary: ", self.from, self.to)?;
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", word)?;
        }
        Ok(())
    }
}
