// Wordsearch – A word search solver
// Copyright (C) 2024  Neil Roberts
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Grid {
    values: Box<[char]>,
    width: u32,
    height: u32,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    EmptyGrid,
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::EmptyGrid => write!(f, "empty grid"),
            Error::RaggedRow { row, expected, found } => write!(
                f,
                "row {} has {} letters but the grid is {} wide",
                row + 1,
                found,
                expected,
            ),
        }
    }
}

impl std::error::Error for Error {}

impl Grid {
    /// Builds a grid from its rows. Every row must have the same
    /// number of characters and there must be at least one non-empty
    /// row.
    pub fn from_rows<I, S>(rows: I) -> Result<Grid, Error>
        where I: IntoIterator<Item = S>,
              S: AsRef<str>,
    {
        let mut values = Vec::new();
        let mut width = None;
        let mut height = 0;

        for (row, line) in rows.into_iter().enumerate() {
            let before = values.len();

            values.extend(line.as_ref().chars());

            let row_width = values.len() - before;

            match width {
                None => width = Some(row_width),
                Some(expected) if expected != row_width => {
                    return Err(Error::RaggedRow {
                        row,
                        expected,
                        found: row_width,
                    });
                },
                Some(_) => (),
            }

            height += 1;
        }

        let width = width.unwrap_or(0);

        if width < 1 {
            return Err(Error::EmptyGrid);
        }

        Ok(Grid {
            values: values.into_boxed_slice(),
            width: width as u32,
            height: height as u32,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    // Coordinates that stepped off the top or left edge have wrapped
    // around to huge values so a single comparison catches every edge.
    pub fn in_bounds(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    pub fn at(&self, x: u32, y: u32) -> char {
        assert!(self.in_bounds(x, y));

        self.values[(y * self.width + x) as usize]
    }
}

impl FromStr for Grid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Grid, Error> {
        Grid::from_rows(s.lines())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, row) in self.values.chunks(self.width as usize).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }

            for &ch in row {
                write!(f, "{}", ch)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_grid() {
        assert_eq!("".parse::<Grid>().unwrap_err(), Error::EmptyGrid);
        assert_eq!(
            Grid::from_rows(Vec::<String>::new()).unwrap_err(),
            Error::EmptyGrid,
        );
        assert_eq!(Grid::from_rows(["", ""]).unwrap_err(), Error::EmptyGrid);
        assert_eq!(&"".parse::<Grid>().unwrap_err().to_string(), "empty grid");
    }

    #[test]
    fn ragged_rows() {
        assert_eq!(
            Grid::from_rows(["abc", "de", "fgh"]).unwrap_err(),
            Error::RaggedRow { row: 1, expected: 3, found: 2 },
        );
        assert_eq!(
            &"ab\nabc".parse::<Grid>().unwrap_err().to_string(),
            "row 2 has 3 letters but the grid is 2 wide",
        );
        // An empty row in the middle is ragged too
        assert_eq!(
            "ab\n\nab".parse::<Grid>().unwrap_err(),
            Error::RaggedRow { row: 1, expected: 2, found: 0 },
        );
    }

    #[test]
    fn lookup() {
        let grid = "abc\ndef".parse::<Grid>().unwrap();

        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.at(0, 0), 'a');
        assert_eq!(grid.at(2, 0), 'c');
        assert_eq!(grid.at(1, 1), 'e');
        assert_eq!(grid.at(2, 1), 'f');
    }

    #[test]
    fn multibyte_letters() {
        let grid = Grid::from_rows(["𐑖𐑱", "ĉŝ"]).unwrap();

        assert_eq!(grid.width(), 2);
        assert_eq!(grid.at(1, 0), '𐑱');
        assert_eq!(grid.at(0, 1), 'ĉ');
    }

    #[test]
    fn bounds() {
        let grid = "ab\ncd\nef".parse::<Grid>().unwrap();

        assert!(grid.in_bounds(0, 0));
        assert!(grid.in_bounds(1, 2));
        assert!(!grid.in_bounds(2, 0));
        assert!(!grid.in_bounds(0, 3));
        assert!(!grid.in_bounds(u32::MAX, 0));
        assert!(!grid.in_bounds(0, u32::MAX));
    }

    #[test]
    #[should_panic]
    fn out_of_range() {
        let grid = "ab".parse::<Grid>().unwrap();
        grid.at(0, 1);
    }

    #[test]
    fn display() {
        let grid = Grid::from_rows(["ab", "cd"]).unwrap();
        assert_eq!(&grid.to_string(), "ab\ncd");
    }
}
