//! Line-oriented text protocol for driving the engine.
//!
//! The framing follows the Go Text Protocol: each line is an optional
//! numeric id, a command, and its arguments. Successful replies start with
//! `=`, failures with `?`, and every reply ends with a blank line. The
//! driver owns the authoritative board and processes one command at a time.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `protocol_version`
//! - `list_commands`, `known_command <cmd>`
//! - `quit`
//! - `clear_board` - Reset to the empty board
//! - `showboard` - Render the board
//! - `legal_moves` - List empty cells as `row,col`
//! - `play <player> <vertex>` - Record a move; vertex is `row,col` or keypad `1`-`9`
//! - `genmove <player>` - Let the engine choose and play a move
//! - `analyze <player>` - Minimax value of every candidate move
//! - `final_status` - `X wins`, `O wins`, `draw` or `in progress`
//!
//! ## Example
//!
//! ```
//! use tictac_minimax::protocol::ProtocolEngine;
//!
//! let mut engine = ProtocolEngine::new();
//! let mut out = Vec::new();
//! engine.run("play x 5\ngenmove o\nquit\n".as_bytes(), &mut out).unwrap();
//! let reply = String::from_utf8(out).unwrap();
//! assert!(reply.contains("= 0,0"));
//! ```

use std::io::{self, BufRead, Write};

use log::debug;

use crate::board::{Board, Coordinate};
use crate::minimax::{analyze, choose_move};
use crate::player::{Outcome, Player};

/// The list of known commands.
const KNOWN_COMMANDS: &[&str] = &[
    "analyze",
    "clear_board",
    "final_status",
    "genmove",
    "known_command",
    "legal_moves",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "showboard",
    "version",
];

/// Protocol engine state.
#[derive(Default)]
pub struct ProtocolEngine {
    /// The authoritative board.
    board: Board,
}

impl ProtocolEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Run the command loop on stdin/stdout.
    pub fn run_stdio(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        self.run(stdin.lock(), io::stdout())
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);

            let parts: Vec<&str> = command_line.split_whitespace().collect();
            let Some((command, args)) = parts.split_first() else {
                continue;
            };
            let command = command.to_lowercase();

            let (success, message) = self.execute(&command, args);
            debug!("{command} {args:?} -> {success} {message:?}");

            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            writeln!(output, "{prefix}{id_str} {message}\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());

        match trimmed[..end].parse::<u32>() {
            Ok(id) => (Some(id), trimmed[end..].trim()),
            Err(_) => (None, trimmed),
        }
    }

    /// Execute a command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "1".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let Some(cmd) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                (true, known.to_string())
            }

            "quit" => (true, String::new()),

            "clear_board" => {
                self.board = Board::new();
                (true, String::new())
            }

            "showboard" => (true, format!("\n{}", self.board.to_string().trim_end())),

            "legal_moves" => {
                let moves: Vec<String> = self
                    .board
                    .legal_moves()
                    .iter()
                    .map(Coordinate::to_string)
                    .collect();
                (true, moves.join(" "))
            }

            "play" => {
                if args.len() < 2 {
                    return (false, "missing arguments".to_string());
                }
                let player = match self.turn(args[0]) {
                    Ok(p) => p,
                    Err(msg) => return (false, msg),
                };
                let coord = match args[1].parse::<Coordinate>() {
                    Ok(c) => c,
                    Err(e) => return (false, e.to_string()),
                };

                match self.board.apply_move(coord, player) {
                    Ok(next) => {
                        self.board = next;
                        (true, String::new())
                    }
                    Err(e) => (false, e.to_string()),
                }
            }

            "genmove" => {
                let Some(arg) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let player = match self.turn(arg) {
                    Ok(p) => p,
                    Err(msg) => return (false, msg),
                };

                let played = choose_move(&self.board, player)
                    .and_then(|mv| Ok((mv, self.board.apply_move(mv, player)?)));
                match played {
                    Ok((mv, next)) => {
                        self.board = next;
                        (true, mv.to_string())
                    }
                    Err(e) => (false, e.to_string()),
                }
            }

            "analyze" => {
                let Some(arg) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let player = match arg.parse::<Player>() {
                    Ok(p) => p,
                    Err(e) => return (false, e.to_string()),
                };
                if self.board.is_terminal() {
                    return (false, "game is over".to_string());
                }
                match analyze(&self.board, player) {
                    Ok(candidates) => {
                        let lines: Vec<String> = candidates
                            .iter()
                            .map(|(mv, v)| format!("{mv} {v}"))
                            .collect();
                        (true, lines.join("\n"))
                    }
                    Err(e) => (false, e.to_string()),
                }
            }

            "final_status" => (true, status_message(&self.board).to_string()),

            _ => (false, format!("unknown command: {command}")),
        }
    }

    /// Parse a player argument and check that it is that player's turn.
    fn turn(&self, arg: &str) -> Result<Player, String> {
        let player = arg.parse::<Player>().map_err(|e| e.to_string())?;
        if self.board.is_terminal() {
            return Err("game is over".to_string());
        }
        if player != self.board.player_to_move() {
            return Err(format!("not {player}'s turn"));
        }
        Ok(player)
    }
}

/// Short status of a board, gated on terminality.
pub fn status_message(board: &Board) -> &'static str {
    if !board.is_terminal() {
        return "in progress";
    }
    match board.winner() {
        Outcome::MinimizerWins => "X wins",
        Outcome::MaximizerWins => "O wins",
        Outcome::Draw => "draw",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_with_id() {
        let (id, cmd) = ProtocolEngine::parse_id("123 name");
        assert_eq!(id, Some(123));
        assert_eq!(cmd, "name");
    }

    #[test]
    fn test_parse_id_without_id() {
        let (id, cmd) = ProtocolEngine::parse_id("name");
        assert_eq!(id, None);
        assert_eq!(cmd, "name");
    }

    #[test]
    fn test_name_command() {
        let mut engine = ProtocolEngine::new();
        let (success, response) = engine.execute("name", &[]);
        assert!(success);
        assert_eq!(response, "tictac-minimax");
    }

    #[test]
    fn test_known_command() {
        let mut engine = ProtocolEngine::new();

        let (success, response) = engine.execute("known_command", &["genmove"]);
        assert!(success);
        assert_eq!(response, "true");

        let (success, response) = engine.execute("known_command", &["komi"]);
        assert!(success);
        assert_eq!(response, "false");
    }

    #[test]
    fn test_play_and_clear() {
        let mut engine = ProtocolEngine::new();

        let (success, _) = engine.execute("play", &["x", "1,1"]);
        assert!(success);
        assert_eq!(engine.board().to_string(), ". . .\n. X .\n. . .\n");

        let (success, _) = engine.execute("clear_board", &[]);
        assert!(success);
        assert_eq!(*engine.board(), Board::new());
    }

    #[test]
    fn test_play_rejects_occupied_and_wrong_turn() {
        let mut engine = ProtocolEngine::new();
        assert!(engine.execute("play", &["x", "5"]).0);

        let (success, msg) = engine.execute("play", &["x", "1"]);
        assert!(!success);
        assert_eq!(msg, "not X's turn");

        let (success, msg) = engine.execute("play", &["o", "1,1"]);
        assert!(!success);
        assert_eq!(msg, "Illegal move: 1,1 is not empty");

        let (success, msg) = engine.execute("play", &["o", "3,0"]);
        assert!(!success);
        assert_eq!(msg, "Illegal move: 3,0 is off the board");

        assert_eq!(engine.board().legal_moves().len(), 8);
    }

    #[test]
    fn test_genmove_on_finished_game() {
        let mut engine = ProtocolEngine {
            board: "XOX/XOO/OXX".parse().unwrap(),
        };
        let (success, msg) = engine.execute("genmove", &["o"]);
        assert!(!success);
        assert_eq!(msg, "game is over");
        assert_eq!(engine.execute("final_status", &[]), (true, "draw".to_string()));
    }

    #[test]
    fn test_genmove_wins() {
        let mut engine = ProtocolEngine {
            board: "XXO/XO./...".parse().unwrap(),
        };
        assert_eq!(engine.execute("genmove", &["o"]), (true, "2,0".to_string()));
        assert_eq!(engine.execute("final_status", &[]), (true, "O wins".to_string()));
    }
}
