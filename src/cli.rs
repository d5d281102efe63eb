//! The CLI surface: argument parsing, the interactive problem-input
//! collector, and exit-status mapping. All of this sits outside the core
//! enumerator's correctness surface — per the core's contract, it is an
//! external collaborator, not part of the search.

use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};

use clap::Parser;

use quietboard::{format_board, piece_symbols, solutions};

/// Enumerate non-attacking placements of chess pieces on an R x C board.
#[derive(Parser, Debug)]
#[command(name = "quietboard", version, about)]
pub struct Cli {
    /// Number of rows (>= 2). Prompted for interactively if omitted.
    pub rows: Option<i64>,

    /// Number of columns (>= 2). Prompted for interactively if omitted.
    pub cols: Option<i64>,

    /// Number of kings to place.
    #[arg(short = 'k', long = "kings", default_value_t = 0)]
    pub kings: i64,

    /// Number of queens to place.
    #[arg(short = 'q', long = "queens", default_value_t = 0)]
    pub queens: i64,

    /// Number of bishops to place.
    #[arg(short = 'b', long = "bishops", default_value_t = 0)]
    pub bishops: i64,

    /// Number of rooks to place.
    #[arg(short = 'r', long = "rooks", default_value_t = 0)]
    pub rooks: i64,

    /// Number of knights to place.
    #[arg(short = 'n', long = "knights", default_value_t = 0)]
    pub knights: i64,

    /// Print only the number of solutions instead of each board.
    #[arg(short = 'c', long = "count")]
    pub count: bool,
}

impl Cli {
    fn counts(&self) -> BTreeMap<char, i64> {
        BTreeMap::from([
            ('K', self.kings),
            ('Q', self.queens),
            ('B', self.bishops),
            ('R', self.rooks),
            ('N', self.knights),
        ])
    }
}

/// Runs the CLI to completion, returning the process exit code.
pub fn run(cli: Cli) -> i32 {
    let (rows, cols, counts) = match (cli.rows, cli.cols) {
        (Some(rows), Some(cols)) => (rows, cols, cli.counts()),
        _ => match input_problem() {
            Ok(problem) => problem,
            Err(message) => {
                eprintln!("{message}");
                return 1;
            }
        },
    };

    let seq = match solutions(rows, cols, &counts) {
        Ok(seq) => seq,
        Err(err) => {
            eprintln!("error: {err}");
            return 1;
        }
    };

    if cli.count {
        let total = seq.count();
        println!("{total}");
        tracing::info!(total, "enumeration complete");
    } else {
        let mut total = 0u64;
        for board in seq {
            println!("{}", format_board(&board, rows as u32, cols as u32));
            total += 1;
        }
        tracing::info!(total, "enumeration complete");
    }

    0
}

/// Interactive problem-input collector, modeled on the reference
/// implementation's `input_int`/`input_units_count`: ask for row count,
/// column count, then the count of each piece kind in registration
/// order, validating integer-ness and bounds before proceeding.
fn input_problem() -> Result<(i64, i64, BTreeMap<char, i64>), String> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let rows = input_int(&mut lines, "Number of rows: ", None, Some(2), None)?;
    let cols = input_int(&mut lines, "Number of columns: ", None, Some(2), None)?;
    println!();

    let cell_count = rows * cols;
    let mut counts = BTreeMap::new();
    let mut total = 0i64;
    for symbol in piece_symbols() {
        let prompt = format!("Number of {}s: ", piece_name(symbol));
        let count = input_int(
            &mut lines,
            &prompt,
            Some(0),
            Some(0),
            Some(cell_count - total),
        )?;
        counts.insert(symbol, count);
        total += count;
    }

    Ok((rows, cols, counts))
}

fn piece_name(symbol: char) -> &'static str {
    match symbol {
        'K' => "king",
        'Q' => "queen",
        'B' => "bishop",
        'R' => "rook",
        'N' => "knight",
        _ => unreachable!("piece_symbols() only yields known symbols"),
    }
}

fn input_int(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    prompt: &str,
    default: Option<i64>,
    minimum: Option<i64>,
    maximum: Option<i64>,
) -> Result<i64, String> {
    loop {
        print!("{prompt}");
        io::stdout().flush().ok();

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(err)) => return Err(format!("failed to read input: {err}")),
            None => return Err("unexpected end of input".to_string()),
        };
        let trimmed = line.trim();

        if trimmed.is_empty() {
            match default {
                Some(value) => return Ok(value),
                None => {
                    println!("Can not leave empty");
                    continue;
                }
            }
        }

        let value: i64 = match trimmed.parse() {
            Ok(value) => value,
            Err(_) => {
                println!("Must enter an integer number");
                continue;
            }
        };

        if let Some(min) = minimum {
            if value < min {
                println!("Must enter greater than or equal to {min}");
                continue;
            }
        }
        if let Some(max) = maximum {
            if value > max {
                println!("Must enter less than or equal to {max}");
                continue;
            }
        }

        return Ok(value);
    }
}
