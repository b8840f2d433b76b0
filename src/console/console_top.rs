//! Line-oriented console front end.
//!
//! Reads one command per line, dispatches it against the engine session and
//! writes plain-text replies. `edit` switches the loop into a piece-placement
//! mode until a `.` token is read.

use std::io::{self, BufRead, Write};

use log::debug;

use crate::console::session::EngineSession;
use crate::errors::HexChessError;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::move_generation::legal_move_generator::GameStatus;
use crate::utils::algebraic::{parse_cell, render_move, render_move_list};
use crate::utils::render_game_state::{render_game_state, BoardOrientation};

pub const ENGINE_BANNER: &str =
    "Glinski's hexagonal chess engine, kings and knights\ntype 'help' for list of commands";

const COMMANDS: [(&str, &str); 16] = [
    ("end", "exits engine"),
    ("quit", "exits engine"),
    ("help", "displays help"),
    ("display", "displays board"),
    ("rotate", "rotates board display"),
    ("init", "restarts engine"),
    ("new", "starts a new game"),
    ("edit", "edits a position"),
    ("fen", "reads position from setup notation, e.g. fen ///N7n///K8k/N7n"),
    ("white", "white side to move"),
    ("black", "black side to move"),
    ("moves", "lists legal moves"),
    ("move", "plays a legal move, e.g. move Kg1g2"),
    ("undo", "takes back the last move"),
    ("perft", "counts positions to a depth, e.g. perft 3"),
    ("divide", "perft per root move, e.g. divide 2"),
];

pub fn run_stdio_loop(session: EngineSession) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut console = ConsoleState::new(session);

    writeln!(stdout, "{ENGINE_BANNER}")?;
    write!(stdout, "{}", console.prompt())?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = console.handle_command(&line, &mut stdout)?;
        if should_quit {
            break;
        }
        write!(stdout, "{}", console.prompt())?;
        stdout.flush()?;
    }

    Ok(())
}

pub struct ConsoleState {
    session: EngineSession,
    orientation: BoardOrientation,
    // Color being placed while in edit mode.
    editing: Option<Color>,
}

impl ConsoleState {
    pub fn new(session: EngineSession) -> Self {
        Self {
            session,
            orientation: BoardOrientation::Normal,
            editing: None,
        }
    }

    pub fn session(&self) -> &EngineSession {
        &self.session
    }

    pub fn prompt(&self) -> String {
        match self.editing {
            Some(color) => format!("edit ({}): ", color.name()),
            None => format!("hexchess ({})> ", self.session.side_to_move().name()),
        }
    }

    /// Handle one input line. Returns `true` when the loop should stop.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        if self.editing.is_some() {
            self.handle_edit_line(line, out)?;
            return Ok(false);
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();

        match cmd {
            "quit" | "end" => {
                writeln!(out, "Bye")?;
                return Ok(true);
            }
            "help" => {
                for (name, description) in COMMANDS {
                    writeln!(out, "{name}\t - {description}")?;
                }
            }
            "display" => self.write_board(out)?,
            "rotate" => {
                self.orientation = self.orientation.toggled();
                self.write_board(out)?;
            }
            "init" => {
                self.session.initialize();
                self.orientation = BoardOrientation::Normal;
                writeln!(out, "{ENGINE_BANNER}")?;
            }
            "new" => self.session.start_new_game(),
            "edit" => {
                self.session.backup();
                self.editing = Some(Color::White);
                writeln!(out, "type '.' to exit, 'c' to change color, '#' to clear the board")?;
            }
            "fen" => match parts.next() {
                Some(notation) => {
                    let result = self.session.load_legal_position(notation);
                    write_legality(out, result)?;
                }
                None => writeln!(out, "missing setup notation")?,
            },
            "white" => {
                let result = self.session.set_side_to_move(Color::White);
                write_legality(out, result)?;
            }
            "black" => {
                let result = self.session.set_side_to_move(Color::Black);
                write_legality(out, result)?;
            }
            "moves" => self.write_moves(out)?,
            "move" => match parts.next() {
                Some(text) => match self.session.play_move(text) {
                    Ok(made) => {
                        writeln!(out, "played {}", render_move(made))?;
                        self.write_terminal_status(out)?;
                    }
                    Err(err) => writeln!(out, "{err}")?,
                },
                None => writeln!(out, "missing move")?,
            },
            "undo" => match self.session.undo_move() {
                Ok(mv) => writeln!(out, "took back {}", render_move(mv))?,
                Err(err) => writeln!(out, "{err}")?,
            },
            "perft" | "divide" => match parts.next().map(str::parse::<u8>) {
                Some(Ok(depth)) => self.write_perft(out, cmd == "divide", depth)?,
                _ => writeln!(out, "usage: {cmd} <depth>")?,
            },
            other => writeln!(out, "unrecognized command: {other}")?,
        }

        Ok(false)
    }

    fn handle_edit_line(&mut self, line: &str, out: &mut impl Write) -> io::Result<()> {
        for token in line.split_whitespace() {
            let Some(color) = self.editing else {
                break;
            };

            match token {
                "." => {
                    self.editing = None;
                    let result = self.session.confirm_position();
                    write_legality(out, result)?;
                }
                "c" => self.editing = Some(color.opposite()),
                "#" => self.session.clear_board(),
                _ => {
                    if let Err(err) = self.place_token(color, token) {
                        debug!("ignoring edit token {token:?}: {err}");
                    }
                }
            }
        }
        Ok(())
    }

    fn place_token(&mut self, color: Color, token: &str) -> Result<(), HexChessError> {
        let mut chars = token.chars();
        let kind = match chars.next().map(|c| c.to_ascii_uppercase()) {
            Some('K') => PieceKind::King,
            Some('N') => PieceKind::Knight,
            _ => return Err(HexChessError::InvalidCell(token.to_owned())),
        };
        let cell = parse_cell(chars.as_str())?;
        self.session.set_piece(color, kind, cell)
    }

    fn write_board(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(
            out,
            "{}",
            render_game_state(self.session.game_state(), self.orientation)
        )
    }

    fn write_moves(&mut self, out: &mut impl Write) -> io::Result<()> {
        match self.session.generate_legal_moves() {
            Ok(moves) if !moves.is_empty() => write!(out, "{}", render_move_list(&moves)),
            Ok(_) => self.write_terminal_status(out),
            Err(err) => writeln!(out, "{err}"),
        }
    }

    fn write_terminal_status(&mut self, out: &mut impl Write) -> io::Result<()> {
        match self.session.status() {
            Ok(GameStatus::Checkmate) => writeln!(out, "king is mated"),
            Ok(GameStatus::Stalemate) => writeln!(out, "king is stalemated"),
            Ok(GameStatus::Ongoing) => Ok(()),
            Err(err) => writeln!(out, "{err}"),
        }
    }

    fn write_perft(&mut self, out: &mut impl Write, divide: bool, depth: u8) -> io::Result<()> {
        if divide {
            match self.session.perft_divide(depth) {
                Ok(divided) => {
                    let mut total = 0;
                    for (mv, nodes) in divided {
                        writeln!(out, "{} {nodes}", render_move(mv))?;
                        total += nodes;
                    }
                    writeln!(out, "total {total}")
                }
                Err(err) => writeln!(out, "{err}"),
            }
        } else {
            match self.session.perft(depth) {
                Ok(counts) => writeln!(
                    out,
                    "nodes {} captures {} checks {} mates {}",
                    counts.nodes, counts.captures, counts.checks, counts.checkmates
                ),
                Err(err) => writeln!(out, "{err}"),
            }
        }
    }
}

fn write_legality(out: &mut impl Write, result: Result<(), HexChessError>) -> io::Result<()> {
    match result {
        Ok(()) => writeln!(out, "position is legal"),
        Err(HexChessError::IllegalPosition) => writeln!(out, "position is illegal"),
        Err(err) => writeln!(out, "{err}"),
    }
}
