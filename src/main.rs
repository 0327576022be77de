use clap::Parser;
use crossterm::style::Stylize;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use slider_puzzle::loader::{load_board, read_board};
use slider_puzzle::{Board, LoadError, Solver};

#[derive(Parser)]
#[command(name = "slider-puzzle")]
#[command(about = "Find a minimum-move solution to an n-by-n sliding tile puzzle")]
struct Args {
    /// Puzzle file: the side length followed by the tiles, 0 for the blank.
    /// Read from stdin when omitted.
    file: Option<PathBuf>,

    /// Solve a random arrangement of this size instead (may be unsolvable)
    #[arg(long, value_name = "N", conflicts_with_all = ["file", "scramble"])]
    shuffle: Option<usize>,

    /// Solve a board of this size scrambled by random slides from the goal
    #[arg(long, value_name = "N", conflicts_with = "file")]
    scramble: Option<usize>,

    /// Number of random slides used by --scramble
    #[arg(long, default_value_t = 30)]
    steps: usize,

    /// Seed for --shuffle and --scramble
    #[arg(long)]
    seed: Option<u64>,

    /// Only print the summary, not every board on the path
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let initial = match initial_board(&args) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            return ExitCode::FAILURE;
        }
    };

    println!("{}", "Initial Puzzle:".bold());
    print_board(&initial);

    let solver = match Solver::new(&initial) {
        Ok(solver) => solver,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            return ExitCode::FAILURE;
        }
    };

    let Some(path) = solver.solution() else {
        println!("{}", "No solution possible".yellow().bold());
        println!("Expanded {} nodes", solver.expanded());
        return ExitCode::SUCCESS;
    };

    println!(
        "{} {} moves (expanded {} nodes)",
        "Found optimal solution with:".green().bold(),
        solver.moves(),
        solver.expanded()
    );

    if !args.quiet {
        for pair in path.windows(2) {
            if let Some(step) = pair[0].move_between(&pair[1]) {
                println!("{}", step.to_string().cyan());
            }
            print_board(&pair[1]);
        }
    }

    ExitCode::SUCCESS
}

fn initial_board(args: &Args) -> Result<Board, LoadError> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    if let Some(size) = args.shuffle {
        return Ok(Board::shuffled(size, &mut rng)?);
    }
    if let Some(size) = args.scramble {
        return Ok(Board::scrambled(size, args.steps, &mut rng)?);
    }

    match &args.file {
        Some(path) => load_board(path),
        None => read_board(io::stdin().lock()),
    }
}

fn print_board(board: &Board) {
    for row in board.rows() {
        for &val in row {
            let cell = format!("{:2} ", val);
            if val == 0 {
                print!("{}", cell.dark_grey());
            } else {
                print!("{}", cell);
            }
        }
        println!();
    }
    println!();
}
