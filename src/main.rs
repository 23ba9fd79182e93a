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

use std::{process::ExitCode, ffi::OsString};
use clap::Parser;
use wordsearch::{logging, PuzzleData, Solver};

#[derive(Parser)]
#[command(name = "wordsearch", about = "Solve a word search puzzle")]
struct Cli {
    /// Puzzle file. The grid comes first, followed by a line saying
    /// “Words to find:” and then one word per line. Reads stdin if
    /// not given.
    #[arg(value_name = "PUZZLE")]
    puzzle: Option<OsString>,
    /// Print the result as JSON
    #[arg(short, long)]
    json: bool,
    /// Log debug messages to stderr. RUST_LOG overrides this.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    let (source, puzzle_string) = match cli.puzzle {
        Some(ref filename) => (
            filename.to_string_lossy(),
            std::fs::read_to_string(filename),
        ),
        None => (
            "stdin".into(),
            std::io::read_to_string(std::io::stdin()),
        ),
    };

    let puzzle_string = match puzzle_string {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{}: {}", source, e);
            return ExitCode::FAILURE;
        },
    };

    let puzzle = match puzzle_string.parse::<PuzzleData>() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{}: {}", source, e);
            return ExitCode::FAILURE;
        },
    };

    log::debug!(
        "{}x{} grid, {} words",
        puzzle.grid.width(),
        puzzle.grid.height(),
        puzzle.words.len(),
    );

    let result = Solver::new(&puzzle.grid).solve(&puzzle.words);

    if cli.json {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("{}", e);
                return ExitCode::FAILURE;
            },
        }
    } else {
        let text = result.to_string();

        if !text.is_empty() {
            println!("{}", text);
        }
    }

    ExitCode::SUCCESS
}
