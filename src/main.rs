use anyhow::{anyhow, Context, Result};
use clap::Parser;
use nonet::{board::Board, solver::{Outcome, Solver}, text};
use std::{fs, path::PathBuf, process, sync::atomic::Ordering, thread, time::Duration};

#[derive(Parser, Debug)]
#[command(name = "nonet", version, about = "9x9 Sudoku solver")]
struct Cli {
    /// Path to a puzzle file in the grid text layout. If omitted, reads from stdin.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Abort the search after this many seconds
    #[arg(short, long)]
    timeout: Option<u64>,

    /// Highlight solver-derived cells in the output
    #[arg(long)]
    color: bool,

    /// Print how many candidate digits the search tested
    #[arg(long)]
    count: bool,
}

fn read_puzzle(input: &Option<PathBuf>) -> Result<String> {
    match input {
        Some(p) => fs::read_to_string(p).with_context(|| format!("reading {}", p.display())),
        None => {
            use std::io::{self, Read};
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let puzzle = read_puzzle(&cli.input)?;
    let grid = text::parse(&puzzle).context("parse puzzle")?;

    let mut board = Board::new(grid);
    let mut solver = Solver::new();
    let cancel = solver.cancel_handle();

    if let Some(secs) = cli.timeout {
        thread::spawn(move || {
            thread::sleep(Duration::from_secs(secs));
            cancel.store(true, Ordering::Relaxed);
        });
    }

    // The search runs off the main thread on its own copy of the grid; the
    // watchdog above talks to it only through the cancellation flag.
    let worker = thread::spawn(move || {
        let outcome = board.solve(&mut solver);
        (board, outcome, solver.attempts())
    });
    let (board, outcome, attempts) = worker
        .join()
        .map_err(|_| anyhow!("solver thread panicked"))?;

    if cli.count {
        eprintln!("candidates tested: {attempts}");
    }

    match outcome {
        Outcome::Solved(_) => {
            if cli.color {
                print!("{}", text::render_highlighted(&board));
            } else {
                print!("{board}");
            }
            Ok(())
        }
        Outcome::Contradictory => {
            let cells: Vec<String> = board
                .given()
                .conflicts()
                .into_iter()
                .map(|(r, c)| format!("r{}c{}", r + 1, c + 1))
                .collect();
            eprintln!("puzzle is contradictory (conflicting cells: {})", cells.join(", "));
            process::exit(1);
        }
        Outcome::Unsolvable => {
            eprintln!("puzzle has no solution");
            process::exit(1);
        }
        Outcome::Aborted => {
            eprintln!("search aborted after {} seconds", cli.timeout.unwrap_or(0));
            process::exit(1);
        }
    }
}
