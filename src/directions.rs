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

// Directions are numbered by their position in OFFSETS. The order is
// the order in which the solver tries them, so when a word can be
// read in more than one direction from the same starting letter the
// earliest one here wins.

pub const N_DIRECTIONS: u8 = 8;

pub const OFFSETS: [(i32, i32); N_DIRECTIONS as usize] = [
    (0, 1),
    (0, -1),
    (-1, 0),
    (-1, -1),
    (-1, 1),
    (1, 1),
    (1, -1),
    (1, 0),
];

pub fn offset(direction: u8) -> (i32, i32) {
    assert!(direction < N_DIRECTIONS);

    OFFSETS[direction as usize]
}

pub fn step(x: u32, y: u32, direction: u8) -> (u32, u32) {
    advance(x, y, direction, 1)
}

// Return the position `n` steps away in the given direction
pub fn advance(x: u32, y: u32, direction: u8, n: u32) -> (u32, u32) {
    let (x_off, y_off) = offset(direction);
    let n = n as i32;

    (
        x.wrapping_add_signed(x_off.wrapping_mul(n)),
        y.wrapping_add_signed(y_off.wrapping_mul(n)),
    )
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn step_all_directions() {
        assert_eq!(step(1, 1, 0), (1, 2));
        assert_eq!(step(1, 1, 1), (1, 0));
        assert_eq!(step(1, 1, 2), (0, 1));
        assert_eq!(step(1, 1, 3), (0, 0));
        assert_eq!(step(1, 1, 4), (0, 2));
        assert_eq!(step(1, 1, 5), (2, 2));
        assert_eq!(step(1, 1, 6), (2, 0));
        assert_eq!(step(1, 1, 7), (2, 1));
    }

    #[test]
    fn all_neighbours_covered() {
        let mut offsets = OFFSETS.to_vec();
        offsets.sort();
        offsets.dedup();

        assert_eq!(offsets.len(), N_DIRECTIONS as usize);
        assert!(!offsets.contains(&(0, 0)));
        assert!(offsets.iter().all(|&(dx, dy)| {
            (-1..=1).contains(&dx) && (-1..=1).contains(&dy)
        }));
    }

    #[test]
    fn overflow() {
        // Going off the top or left of the grid should wrap the
        // coordinates around the integer maximum so that the grid can
        // detect it with a single comparison against its dimensions.
        assert_eq!(step(0, 0, 2), (u32::MAX, 0));
        assert_eq!(step(0, 0, 1), (0, u32::MAX));
        assert_eq!(step(0, 0, 3), (u32::MAX, u32::MAX));
    }

    #[test]
    fn advance_many() {
        assert_eq!(advance(0, 0, 5, 3), (3, 3));
        assert_eq!(advance(4, 2, 2, 4), (0, 2));
        assert_eq!(advance(4, 2, 6, 0), (4, 2));
        assert_eq!(advance(1, 1, 3, 2), (u32::MAX, u32::MAX));
    }

    #[test]
    #[should_panic]
    fn invalid_direction() {
        offset(N_DIRECTIONS);
    }
}
