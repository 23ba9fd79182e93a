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

use super::grid::Grid;
use super::directions::{self, N_DIRECTIONS};
use serde::{Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;

/// Where a word was found. `direction` is an index into
/// [`directions::OFFSETS`] and `end` is `start` advanced by it once
/// for every letter after the first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    pub word: String,
    pub start: (u32, u32),
    pub end: (u32, u32),
    // Serialized as the (dx, dy) offset rather than the index
    #[serde(serialize_with = "serialize_direction")]
    pub direction: u8,
}

fn serialize_direction<S>(direction: &u8, serializer: S) -> Result<S::Ok, S::Error>
    where S: Serializer,
{
    directions::offset(*direction).serialize(serializer)
}

impl Match {
    pub fn offset(&self) -> (i32, i32) {
        directions::offset(self.direction)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SolveResult {
    // In the order the words were given
    pub found: Vec<Match>,
    pub unfound: Vec<String>,
}

// One “word (x, y) -> (x, y)” line per found word, then the unfound
// words on a single line if there are any.
impl fmt::Display for SolveResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, m) in self.found.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }

            write!(
                f,
                "{} ({}, {}) -> ({}, {})",
                m.word,
                m.start.0,
                m.start.1,
                m.end.0,
                m.end.1,
            )?;
        }

        if !self.unfound.is_empty() {
            if !self.found.is_empty() {
                writeln!(f)?;
            }

            write!(f, "Unfound: {}", self.unfound.join(", "))?;
        }

        Ok(())
    }
}

pub struct Solver<'a> {
    grid: &'a Grid,
}

impl<'a> Solver<'a> {
    pub fn new(grid: &'a Grid) -> Solver<'a> {
        Solver { grid }
    }

    /// Iterates over every cell containing `letter` in row-major
    /// order.
    pub fn anchors(&self, letter: char) -> impl Iterator<Item = (u32, u32)> + 'a {
        let grid = self.grid;

        (0..grid.height())
            .flat_map(move |y| (0..grid.width()).map(move |x| (x, y)))
            .filter(move |&(x, y)| grid.at(x, y) == letter)
    }

    fn chain_matches(&self, word: &str, x: u32, y: u32, direction: u8) -> bool {
        word.chars().enumerate().all(|(i, letter)| {
            let (x, y) = directions::advance(x, y, direction, i as u32);

            self.grid.in_bounds(x, y) && self.grid.at(x, y) == letter
        })
    }

    /// Finds the first placement of `word`, trying the anchors in
    /// row-major order and the directions in the order of
    /// [`directions::OFFSETS`].
    pub fn find(&self, word: &str) -> Option<Match> {
        let first_letter = word.chars().next()?;
        let length = word.chars().count() as u32;

        self.anchors(first_letter).find_map(|(x, y)| {
            (0..N_DIRECTIONS)
                .find(|&direction| self.chain_matches(word, x, y, direction))
                .map(|direction| Match {
                    word: word.to_string(),
                    start: (x, y),
                    end: directions::advance(x, y, direction, length - 1),
                    direction,
                })
        })
    }

    /// Looks for every word and splits them into the ones that were
    /// found and the ones that weren’t. A word that is given more
    /// than once is only searched for and reported once.
    pub fn solve<I, S>(&self, words: I) -> SolveResult
        where I: IntoIterator<Item = S>,
              S: AsRef<str>,
    {
        let words = words.into_iter()
            .map(|word| word.as_ref().to_string())
            .collect::<Vec<String>>();

        let mut searched = HashSet::new();

        let found = words.iter()
            .filter(|word| searched.insert(word.as_str()))
            .filter_map(|word| {
                let result = self.find(word);

                match result {
                    Some(ref m) => log::debug!(
                        "found “{}” at {:?} -> {:?}",
                        word,
                        m.start,
                        m.end,
                    ),
                    None => log::debug!("“{}” not found", word),
                }

                result
            })
            .collect::<Vec<Match>>();

        let matched = found.iter()
            .map(|m| m.word.as_str())
            .collect::<HashSet<&str>>();
        let mut listed = HashSet::new();

        let unfound = words.iter()
            .filter(|word| {
                !matched.contains(word.as_str()) && listed.insert(word.as_str())
            })
            .cloned()
            .collect::<Vec<String>>();

        log::info!(
            "{} of {} words found",
            found.len(),
            found.len() + unfound.len(),
        );

        SolveResult { found, unfound }
    }
}
