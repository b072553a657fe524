//! Sliding-tile puzzle on an M×N grid (the 15-puzzle and friends).
//!
//! Tiles are arbitrary strings; `*` marks the blank. A move slides a tile
//! adjacent to the blank into it. The puzzle is solved when the current
//! grid matches the target grid.

use std::fmt;
use std::rc::Rc;

use smallvec::SmallVec;

use crate::error::{Error, Result};
use crate::puzzle::Puzzle;

pub const BLANK: &str = "*";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MnPuzzle {
    rows: usize,
    columns: usize,
    /// Current tiles, row-major.
    tiles: Vec<String>,
    /// Index of the blank in `tiles`.
    blank: usize,
    /// Target tiles, row-major; shared by every configuration of one run.
    target: Rc<Vec<String>>,
}

fn flatten(grid: &[Vec<String>], what: &'static str) -> Result<(usize, usize, Vec<String>)> {
    let columns = match grid.first() {
        Some(row) if !row.is_empty() => row.len(),
        _ => return Err(Error::EmptyGrid { what }),
    };
    if let Some((row, r)) = grid.iter().enumerate().find(|(_, r)| r.len() != columns) {
        return Err(Error::RaggedGrid {
            row,
            expected: columns,
            got: r.len(),
        });
    }
    Ok((grid.len(), columns, grid.concat()))
}

impl MnPuzzle {
    pub fn new(from: &[Vec<String>], to: &[Vec<String>]) -> Result<Self> {
        let (rows, columns, tiles) = flatten(from, "start")?;
        let (to_rows, to_columns, target) = flatten(to, "target")?;

        if (rows, columns) != (to_rows, to_columns) {
            return Err(Error::GridSizeMismatch {
                from: (rows, columns),
                to: (to_rows, to_columns),
            });
        }

        let blanks: SmallVec<[usize; 1]> = tiles
            .iter()
            .enumerate()
            .filter(|(_, t)| t.as_str() == BLANK)
            .map(|(i, _)| i)
            .collect();
        if blanks.len() != 1 {
            return Err(Error::BlankCount {
                count: blanks.len(),
            });
        }
        let blank = blanks[0];

        Ok(Self {
            rows,
            columns,
            tiles,
            blank,
            target: Rc::new(target),
        })
    }

    /// Convenience constructor from rows of string slices.
    pub fn from_strs<R: AsRef<[&'static str]>>(from: &[R], to: &[R]) -> Result<Self> {
        let own = |grid: &[R]| -> Vec<Vec<String>> {
            grid.iter()
                .map(|row| row.as_ref().iter().map(|t| t.to_string()).collect())
                .collect()
        };
        Self::new(&own(from), &own(to))
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn tile(&self, row: usize, column: usize) -> Option<&str> {
        (row < self.rows && column < self.columns)
            .then(|| self.tiles[row * self.columns + column].as_str())
    }

    /// The blank's position as `(row, column)`.
    pub fn blank(&self) -> (usize, usize) {
        (self.blank / self.columns, self.blank % self.columns)
    }

    /// Tiles that can slide into the blank: right, left, below, above.
    fn neighbours(&self) -> SmallVec<[usize; 4]> {
        let (r, c) = self.blank();
        let mut out = SmallVec::new();
        if c + 1 < self.columns {
            out.push(self.blank + 1);
        }
        if c > 0 {
            out.push(self.blank - 1);
        }
        if r + 1 < self.rows {
            out.push(self.blank + self.columns);
        }
        if r > 0 {
            out.push(self.blank - self.columns);
        }
        out
    }

    fn slide(&self, from: usize) -> Self {
        let mut tiles = self.tiles.clone();
        tiles.swap(self.blank, from);
        Self {
            rows: self.rows,
            columns: self.columns,
            tiles,
            blank: from,
            target: Rc::clone(&self.target),
        }
    }

    fn write_grid(&self, f: &mut fmt::Formatter<'_>, tiles: &[String]) -> fmt::Result {
        for (r, row) in tiles.chunks(self.columns).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", row.join("|"))?;
        }
        Ok(())
    }
}

impl Puzzle for MnPuzzle {
    fn is_solved(&self) -> bool {
        self.tiles == *self.target
    }

    fn extensions(&self) -> Vec<Self> {
        self.neighbours().into_iter().map(|i| self.slide(i)).collect()
    }
}

impl fmt::Display for MnPuzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_grid(f, &self.tiles)?;
        write!(f, "\n->\n")?;
        self.write_grid(f, &self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TARGET: [[&str; 3]; 2] = [["1", "2", "3"], ["4", "5", "*"]];

    fn puzzle(from: [[&'static str; 3]; 2]) -> MnPuzzle {
        MnPuzzle::from_strs(&from, &TARGET).unwrap()
    }

    #[test]
    fn test_is_solved() {
        assert!(!puzzle([["*", "2", "3"], ["1", "4", "5"]]).is_solved());
        assert!(puzzle(TARGET).is_solved());
    }

    #[test]
    fn test_equality_compares_grids() {
        let a = puzzle([["*", "2", "3"], ["1", "4", "5"]]);
        let b = puzzle([["*", "2", "3"], ["1", "4", "5"]]);
        assert_eq!(a, b);
        assert_ne!(a, puzzle(TARGET));
    }

    #[test]
    fn test_extensions_right_left_down_up() {
        let centre = puzzle([["1", "2", "3"], ["4", "*", "5"]]);
        let expected = vec![
            puzzle([["1", "2", "3"], ["4", "5", "*"]]),
            puzzle([["1", "2", "3"], ["*", "4", "5"]]),
            puzzle([["1", "*", "3"], ["4", "2", "5"]]),
        ];
        assert_eq!(centre.extensions(), expected);

        let corner = puzzle([["*", "2", "3"], ["1", "4", "5"]]);
        let expected = vec![
            puzzle([["2", "*", "3"], ["1", "4", "5"]]),
            puzzle([["1", "2", "3"], ["*", "4", "5"]]),
        ];
        assert_eq!(corner.extensions(), expected);
    }

    #[test]
    fn test_extensions_never_contain_self() {
        let p = puzzle([["1", "2", "3"], ["4", "*", "5"]]);
        assert!(!p.extensions().contains(&p));
    }

    #[test]
    fn test_display() {
        let p = puzzle([["*", "2", "3"], ["1", "4", "5"]]);
        assert_eq!(p.to_string(), "*|2|3\n1|4|5\n->\n1|2|3\n4|5|*");
    }

    #[test]
    fn test_rejects_malformed_grids() {
        assert!(matches!(
            MnPuzzle::from_strs(&[["1", "2"]], &[["1", "2"]]),
            Err(Error::BlankCount { count: 0 })
        ));
        assert!(matches!(
            MnPuzzle::from_strs(&[["*", "*"]], &[["1", "*"]]),
            Err(Error::BlankCount { count: 2 })
        ));
        assert!(matches!(
            MnPuzzle::from_strs(&[vec!["*", "1"], vec!["2"]], &[vec!["1", "2"], vec!["*"]]),
            Err(Error::RaggedGrid { row: 1, .. })
        ));
        assert!(matches!(
            MnPuzzle::from_strs(&[["*", "1"]], &[["1", "*"], ["2", "3"]]),
            Err(Error::GridSizeMismatch {
                from: (1, 2),
                to: (2, 2)
            })
        ));
    }
}
