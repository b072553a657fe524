//! Peg solitaire on a rectangular grid.
//!
//! A move jumps a peg over an orthogonally adjacent peg into an empty cell
//! two steps away, removing the jumped peg. The puzzle is solved when a
//! single peg remains.

use std::collections::BTreeSet;
use std::fmt;

use crate::error::{Error, Result};
use crate::puzzle::Puzzle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Cell {
    Peg,
    Empty,
    /// Not part of the board.
    Unused,
}

impl Cell {
    pub fn symbol(self) -> char {
        match self {
            Cell::Peg => '*',
            Cell::Empty => '.',
            Cell::Unused => '#',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Cell> {
        match symbol {
            '*' => Some(Cell::Peg),
            '.' => Some(Cell::Empty),
            '#' => Some(Cell::Unused),
            _ => None,
        }
    }
}

/// Jump directions, in the order extensions are generated.
const JUMPS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, 1), (0, -1)];

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GridPegSolitaire {
    grid: Vec<Vec<Cell>>,
    /// Markers this board may contain.
    markers: BTreeSet<Cell>,
}

impl GridPegSolitaire {
    /// Build a board from `grid`, rejecting ragged grids and cells outside
    /// `markers`.
    pub fn new(grid: Vec<Vec<Cell>>, markers: BTreeSet<Cell>) -> Result<Self> {
        let width = match grid.first() {
            Some(row) if !row.is_empty() => row.len(),
            _ => return Err(Error::EmptyGrid { what: "peg solitaire" }),
        };

        for (r, row) in grid.iter().enumerate() {
            if row.len() != width {
                return Err(Error::RaggedGrid {
                    row: r,
                    expected: width,
                    got: row.len(),
                });
            }
            if let Some(c) = row.iter().position(|cell| !markers.contains(cell)) {
                return Err(Error::DisallowedSymbol {
                    symbol: row[c].symbol(),
                    row: r,
                    column: c,
                });
            }
        }

        Ok(Self { grid, markers })
    }

    /// Parse rows of `*`, `.` and `#`, allowing all three markers.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        Self::parse(rows, &Self::all_markers())
    }

    /// Parse rows of marker symbols; `markers` restricts which may appear.
    pub fn parse<S: AsRef<str>>(rows: &[S], markers: &BTreeSet<Cell>) -> Result<Self> {
        let grid = rows
            .iter()
            .enumerate()
            .map(|(r, line)| {
                line.as_ref()
                    .chars()
                    .enumerate()
                    .map(|(c, symbol)| {
                        Cell::from_symbol(symbol).ok_or(Error::InvalidSymbol {
                            symbol,
                            row: r,
                            column: c,
                        })
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        Self::new(grid, markers.clone())
    }

    /// Parse a marker set written as a string of symbols, e.g. `"*.#"`.
    pub fn parse_markers(symbols: &str) -> Result<BTreeSet<Cell>> {
        symbols
            .chars()
            .enumerate()
            .map(|(i, symbol)| {
                Cell::from_symbol(symbol).ok_or(Error::InvalidSymbol {
                    symbol,
                    row: 0,
                    column: i,
                })
            })
            .collect()
    }

    pub fn all_markers() -> BTreeSet<Cell> {
        [Cell::Peg, Cell::Empty, Cell::Unused].into_iter().collect()
    }

    pub fn rows(&self) -> usize {
        self.grid.len()
    }

    pub fn columns(&self) -> usize {
        self.grid[0].len()
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<Cell> {
        self.grid.get(row).and_then(|r| r.get(column)).copied()
    }

    pub fn peg_count(&self) -> usize {
        self.grid
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Peg)
            .count()
    }

    fn offset(&self, row: usize, column: usize, dr: isize, dc: isize) -> Option<(usize, usize)> {
        let r = row.checked_add_signed(dr)?;
        let c = column.checked_add_signed(dc)?;
        (r < self.rows() && c < self.columns()).then_some((r, c))
    }

    fn jump(&self, from: (usize, usize), over: (usize, usize), to: (usize, usize)) -> Self {
        let mut grid = self.grid.clone();
        grid[from.0][from.1] = Cell::Empty;
        grid[over.0][over.1] = Cell::Empty;
        grid[to.0][to.1] = Cell::Peg;
        Self {
            grid,
            markers: self.markers.clone(),
        }
    }
}

impl Puzzle for GridPegSolitaire {
    fn is_solved(&self) -> bool {
        self.peg_count() == 1
    }

    fn extensions(&self) -> Vec<Self> {
        let mut result = Vec::new();

        for (r, row) in self.grid.iter().enumerate() {
            for (c, &cell) in row.iter().enumerate() {
                if cell != Cell::Peg {
                    continue;
                }
                for (dr, dc) in JUMPS {
                    let Some(over) = self.offset(r, c, dr, dc) else {
                        continue;
                    };
                    let Some(to) = self.offset(r, c, 2 * dr, 2 * dc) else {
                        continue;
                    };
                    if self.grid[over.0][over.1] == Cell::Peg && self.grid[to.0][to.1] == Cell::Empty
                    {
                        result.push(self.jump((r, c), over, to));
                    }
                }
            }
        }

        result
    }
}

impl fmt::Display for GridPegSolitaire {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.grid.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, "|")?;
                }
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> GridPegSolitaire {
        GridPegSolitaire::from_rows(&["*****", "*****", "*****", "**.**", "*****"]).unwrap()
    }

    #[test]
    fn test_equality_is_structural() {
        assert_eq!(board(), board());

        let other = GridPegSolitaire::from_rows(&[".....", ".....", ".....", ".....", "..*.."])
            .unwrap();
        assert_ne!(board(), other);
    }

    #[test]
    fn test_marker_set_is_part_of_equality() {
        let markers = GridPegSolitaire::parse_markers("*.").unwrap();
        let restricted = GridPegSolitaire::parse(&["*.*"], &markers).unwrap();
        let open = GridPegSolitaire::from_rows(&["*.*"]).unwrap();
        assert_ne!(restricted, open);
    }

    #[test]
    fn test_extensions_in_scan_order() {
        let expected = [
            ["*****", "**.**", "**.**", "*****", "*****"],
            ["*****", "*****", "*****", "..***", "*****"],
            ["*****", "*****", "*****", "***..", "*****"],
        ]
        .map(|rows| GridPegSolitaire::from_rows(&rows).unwrap());

        assert_eq!(board().extensions(), expected.to_vec());
    }

    #[test]
    fn test_jumps_skip_unused_cells() {
        let puzzle = GridPegSolitaire::from_rows(&["*#."]).unwrap();
        assert!(puzzle.extensions().is_empty());
    }

    #[test]
    fn test_is_solved_with_one_peg() {
        assert!(!board().is_solved());
        let solved =
            GridPegSolitaire::from_rows(&[".....", ".....", ".....", ".....", "..*.."]).unwrap();
        assert!(solved.is_solved());

        let empty = GridPegSolitaire::from_rows(&["..."]).unwrap();
        assert!(!empty.is_solved());
    }

    #[test]
    fn test_display() {
        let puzzle =
            GridPegSolitaire::from_rows(&["..*..", ".....", ".....", "..*..", "..*.."]).unwrap();
        assert_eq!(
            puzzle.to_string(),
            ".|.|*|.|.\n.|.|.|.|.\n.|.|.|.|.\n.|.|*|.|.\n.|.|*|.|."
        );
    }

    #[test]
    fn test_rejects_malformed_grids() {
        assert!(matches!(
            GridPegSolitaire::from_rows::<&str>(&[]),
            Err(Error::EmptyGrid { .. })
        ));
        assert!(matches!(
            GridPegSolitaire::from_rows(&["***", "**"]),
            Err(Error::RaggedGrid {
                row: 1,
                expected: 3,
                got: 2
            })
        ));
        assert!(matches!(
            GridPegSolitaire::from_rows(&["*x*"]),
            Err(Error::InvalidSymbol {
                symbol: 'x',
                row: 0,
                column: 1
            })
        ));

        let markers = GridPegSolitaire::parse_markers("*.").unwrap();
        assert!(matches!(
            GridPegSolitaire::parse(&["*#"], &markers),
            Err(Error::DisallowedSymbol { symbol: '#', .. })
        ));
    }
}
