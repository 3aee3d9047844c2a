//! Console gobang
//!
//! Plays a human (Black) against a uniform-random computer opponent
//! (White), or two random players against each other with `--watch`.

use std::io;

use anyhow::{bail, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gobang::render::render;
use gobang::{
    ConsoleSource, Game, MoveSource, RandomSource, Status, Stone, DEFAULT_BOARD_SIZE,
};

/// Five-in-a-row on a square grid.
#[derive(Parser)]
#[command(name = "gobang", about = "Five-in-a-row against a random computer opponent")]
struct Cli {
    /// Board size (the grid is size x size)
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    size: usize,

    /// Seed for the computer player, for reproducible matches
    #[arg(long)]
    seed: Option<u64>,

    /// Watch two random players instead of playing yourself
    #[arg(long)]
    watch: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    if cli.size < 5 {
        bail!("board size must be at least 5 to fit a winning run");
    }
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let mut game = Game::new(cli.size);

    let mut black: Box<dyn MoveSource> = if cli.watch {
        Box::new(random_source(cli.seed))
    } else {
        Box::new(ConsoleSource::new(io::stdin().lock(), io::stdout()))
    };
    let mut white: Box<dyn MoveSource> =
        Box::new(random_source(cli.seed.map(|s| s.wrapping_add(1))));

    print!("{}", render(game.board()));
    loop {
        let mover = game.current_player();
        let automatic = cli.watch || mover == Stone::White;
        let source = if mover == Stone::Black {
            black.as_mut()
        } else {
            white.as_mut()
        };

        let status = game.play_turn(source)?;
        if automatic {
            if let Some(pos) = game.last_move() {
                println!("Computer plays: {} {}", pos.row, pos.col);
            }
        }
        print!("{}", render(game.board()));

        match status {
            Status::InProgress => {}
            Status::Won(stone) => {
                println!("{}", victory_message(stone, cli.watch));
                break;
            }
            Status::Draw => {
                println!("Draw: the board is full.");
                break;
            }
        }
    }
    Ok(())
}

fn random_source(seed: Option<u64>) -> RandomSource {
    match seed {
        Some(seed) => RandomSource::with_seed(seed),
        None => RandomSource::new(),
    }
}

fn victory_message(winner: Stone, watch: bool) -> &'static str {
    match (winner, watch) {
        (Stone::Black, false) => "You win!",
        (Stone::White, false) => "Computer wins!",
        (Stone::Black, true) => "Black (●) wins!",
        (Stone::White, true) => "White (○) wins!",
        (Stone::Empty, _) => unreachable!("empty stone cannot win"),
    }
}
