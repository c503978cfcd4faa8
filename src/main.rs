//! Tictac-Minimax: play tic-tac-toe against an exhaustive minimax engine.
//!
//! ## Usage
//!
//! - `tictac-minimax` - Play against the engine in the terminal
//! - `tictac-minimax play --human o` - Let the engine open
//! - `tictac-minimax protocol` - Start the text protocol server
//! - `tictac-minimax selfplay` - Watch the engine play itself

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::LevelFilter;

use tictac_minimax::board::{Board, Coordinate};
use tictac_minimax::minimax::choose_move;
use tictac_minimax::player::{Outcome, Player};
use tictac_minimax::playout::optimal_playout;
use tictac_minimax::protocol::ProtocolEngine;

/// Tictac-Minimax: an unbeatable tic-tac-toe engine
#[derive(Parser)]
#[command(name = "tictac-minimax")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log search details at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game against the engine in the terminal
    Play {
        /// Side the human plays: x (moves first) or o
        #[arg(long, default_value = "x")]
        human: String,
    },
    /// Start the text protocol server on stdin/stdout
    Protocol,
    /// Let the engine play both sides
    Selfplay {
        /// Starting board, nine cells of X, O or '.' (e.g. "X../.O./...")
        #[arg(long)]
        board: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    match cli.command {
        Some(Commands::Play { human }) => run_game(&human),
        Some(Commands::Protocol) => {
            let mut engine = ProtocolEngine::new();
            engine.run_stdio().context("protocol I/O failed")
        }
        Some(Commands::Selfplay { board }) => run_selfplay(board.as_deref()),
        None => run_game("x"),
    }
}

fn run_game(human: &str) -> Result<()> {
    let human: Player = human.parse()?;
    let mut board = Board::new();
    println!("You play {human}. Enter 1-9 (keypad, top-left is 1) or row,col.\n");

    while !board.is_terminal() {
        let to_move = board.player_to_move();
        if to_move == human {
            println!("{board}");
            let mv = read_human_move(&board)?;
            board = board.apply_move(mv, human)?;
        } else {
            let mv = choose_move(&board, to_move)?;
            board = board.apply_move(mv, to_move)?;
            println!("Engine plays {mv}");
        }
    }

    println!("{board}");
    println!("{}", end_message(board.winner()));
    Ok(())
}

fn read_human_move(board: &Board) -> Result<Coordinate> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("Your move: ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            bail!("input closed before the game ended");
        };
        let line = line?;

        let mv = match line.trim().parse::<Coordinate>() {
            Ok(mv) => mv,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };
        match board.apply_move(mv, board.player_to_move()) {
            Ok(_) => return Ok(mv),
            Err(e) => println!("{e}"),
        }
    }
}

fn run_selfplay(start: Option<&str>) -> Result<()> {
    let start: Board = match start {
        Some(text) => text.parse()?,
        None => Board::new(),
    };

    let (_, moves) = optimal_playout(&start)?;

    let mut board = start;
    println!("{board}");
    for mv in moves {
        let to_move = board.player_to_move();
        board = board.apply_move(mv, to_move)?;
        println!("{to_move} plays {mv}\n{board}");
    }
    println!("{}", end_message(board.winner()));
    Ok(())
}

fn end_message(outcome: Outcome) -> String {
    match outcome.winner() {
        Some(player) => format!("winner is: {player}"),
        None => "draw".to_string(),
    }
}
