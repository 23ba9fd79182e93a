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
use super::grid::{self, Grid};

// Line that separates the grid from the list of words to find
pub const WORDS_MARKER: &str = "Words to find:";

#[derive(Debug)]
pub struct PuzzleData {
    pub grid: Grid,
    pub words: Vec<String>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    GridError(grid::Error),
}

impl From<grid::Error> for Error {
    fn from(e: grid::Error) -> Error {
        Error::GridError(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::GridError(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::GridError(e) => Some(e),
        }
    }
}

// Lower-case the text and drop all whitespace so that “Sea Horse”
// matches “seahorse” in the grid. Each letter folds to exactly one
// letter so that a rectangular grid stays rectangular.
fn normalize(s: &str) -> String {
    s.chars()
        .filter(|ch| !ch.is_whitespace())
        .map(|ch| ch.to_lowercase().next().unwrap_or(ch))
        .collect()
}

fn non_empty_lines(s: &str) -> impl Iterator<Item = String> + '_ {
    s.lines()
        .map(normalize)
        .filter(|line| !line.is_empty())
}

impl FromStr for PuzzleData {
    type Err = Error;

    fn from_str(s: &str) -> Result<PuzzleData, Error> {
        let (grid_str, words_str) =
            s.split_once(WORDS_MARKER).unwrap_or((s, ""));
        // Anything after a second marker is ignored
        let words_str = words_str.split_once(WORDS_MARKER)
            .map_or(words_str, |(words, _)| words);

        let grid = Grid::from_rows(non_empty_lines(grid_str))?;
        let words = non_empty_lines(words_str).collect();

        Ok(PuzzleData { grid, words })
    }
}

impl fmt::Display for PuzzleData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.grid)?;
        writeln!(f)?;
        write!(f, "{}", WORDS_MARKER)?;

        for word in self.words.iter() {
            write!(f, "\n{}", word)?;
        }

        Ok(())
    }
}
