//! Text session: state machine plus the stdin/stdout loop around it.

use super::options::Options;
use super::parser::{parse_command, Command};
use crate::board::{Board, PieceKind};
use crate::executor::MoveOutcome;
use crate::game::Game;
use crate::movegen::MoveCandidate;
use crate::perft::perft;
use crate::square::{Square, BOARD_SIZE};
use crate::utils::parse_move_text;
use log::{debug, info};
use std::io::{self, BufRead, Write};

// Deep perft from an interactive prompt would stall the session
const MAX_PERFT_DEPTH: u8 = 6;

pub struct Session {
    game: Game,
    options: Options,
    running: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Game::new())
    }
}

fn kind_name(kind: PieceKind) -> &'static str {
    match kind {
        PieceKind::Pawn => "pawn",
        PieceKind::Knight => "knight",
        PieceKind::Bishop => "bishop",
        PieceKind::Rook => "rook",
        PieceKind::Queen => "queen",
        PieceKind::King => "king",
    }
}

pub fn render_board(board: &Board, coordinates: bool) -> Vec<String> {
    if !coordinates {
        return board.to_string().lines().map(str::to_string).collect();
    }
    let mut lines: Vec<String> = board
        .to_string()
        .lines()
        .zip((1..=BOARD_SIZE).rev())
        .map(|(row, rank)| format!("{} {}", rank, row.trim_end()))
        .collect();
    lines.push("  a b c d e f g h".to_string());
    lines
}

fn candidate_text(game: &Game, mv: &MoveCandidate) -> String {
    let from = game
        .board()
        .piece(mv.piece)
        .map(|p| p.position.to_string())
        .unwrap_or_default();
    let sep = if mv.is_attack { 'x' } else { '-' };
    format!("{}{}{}", from, sep, mv.target)
}

impl Session {
    pub fn new(game: Game) -> Self {
        Self {
            game,
            options: Options::default(),
            running: true,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    fn status_line(&self) -> String {
        match self.game.winner() {
            Some(color) => format!("game over: {} wins", color),
            None => format!("{} to move", self.game.side_to_move()),
        }
    }

    fn describe_outcome(&self, outcome: &MoveOutcome) -> Vec<String> {
        let mut res = Vec::new();
        let sep = if outcome.captured.is_some() { 'x' } else { '-' };
        res.push(format!("played {}{}{}", outcome.from, sep, outcome.to));
        if let Some(victim) = outcome.captured {
            res.push(format!("captured {} {}", victim.color, kind_name(victim.kind)));
        }
        if self.options.show_board {
            res.extend(render_board(self.game.board(), self.options.coordinates));
        }
        res.push(self.status_line());
        res
    }

    pub fn handle_command(&mut self, cmd: Command) -> Vec<String> {
        let mut res = Vec::new();
        match cmd {
            Command::NewGame => {
                self.game.reset();
                res.push(format!("new game, {}", self.status_line()));
            }
            Command::Position { placement } => match placement {
                None => {
                    self.game = Game::new();
                    res.push(format!("position set, {}", self.status_line()));
                }
                // Keep the current game if the text does not parse
                Some(text) => match Game::from_placement(&text) {
                    Ok(game) => {
                        self.game = game;
                        info!("position set from {:?}", text);
                        res.push(format!("position set, {}", self.status_line()));
                    }
                    Err(e) => res.push(format!("error: {}", e)),
                },
            },
            Command::Moves { square } => {
                let moves = match square {
                    None => Ok(self.game.legal_moves()),
                    Some(text) => text.parse::<Square>().and_then(|sq| self.game.select(sq)),
                };
                match moves {
                    Ok(moves) if moves.is_empty() => res.push("moves: none".to_string()),
                    Ok(moves) => {
                        let list: Vec<String> =
                            moves.iter().map(|m| candidate_text(&self.game, m)).collect();
                        res.push(format!("moves: {}", list.join(" ")));
                    }
                    Err(e) => res.push(format!("error: {}", e)),
                }
            }
            Command::Move { text } => match parse_move_text(&text) {
                None => res.push(format!("error: cannot read move {:?}", text)),
                Some((from, to)) => match self.game.play(from, to) {
                    Ok(outcome) => {
                        debug!("session move {}", text);
                        res.extend(self.describe_outcome(&outcome));
                    }
                    Err(e) => res.push(format!("error: {}", e)),
                },
            },
            Command::Board => {
                res.extend(render_board(self.game.board(), self.options.coordinates));
                res.push(self.status_line());
            }
            Command::Fen => res.push(self.game.placement()),
            Command::Perft { depth } => match depth {
                Some(d) if d <= MAX_PERFT_DEPTH => {
                    res.push(format!("perft {} = {}", d, perft(&self.game, d)));
                }
                Some(d) => {
                    res.push(format!("error: perft depth {} exceeds {}", d, MAX_PERFT_DEPTH))
                }
                None => res.push("error: perft needs a depth".to_string()),
            },
            Command::SetOption { name, value } => {
                match self.options.set_option(&name, value.as_deref()) {
                    Ok(()) => res.push(format!("option {} = {}", name, value.unwrap_or_default())),
                    Err(e) => res.push(format!("error: {}", e)),
                }
            }
            Command::Help => {
                res.extend(
                    [
                        "commands:",
                        "  new | reset                     start over from the opening position",
                        "  position startpos | <fen> [w|b] set up a position",
                        "  moves [<square>]                list candidates (all, or for one piece)",
                        "  move <from><to> | <from><to>    play a move, e.g. e2e3",
                        "  board | fen                     show the position",
                        "  perft <depth>                   count move-tree leaves",
                        "  setoption name <N> value <V>    change an option",
                        "  quit",
                    ]
                    .iter()
                    .map(|s| s.to_string()),
                );
                res.extend(self.options.describe());
            }
            Command::Quit => {
                self.running = false;
            }
            Command::Unknown(s) if s.is_empty() => {}
            Command::Unknown(s) => {
                res.push(format!("error: unknown command: {}", s));
            }
        }
        res
    }
}

pub fn process_line(line: &str, session: &mut Session) -> Vec<String> {
    let cmd = parse_command(line);
    session.handle_command(cmd)
}

/// Reads commands until `quit` or end of input, answering each one.
pub fn run_loop<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    session: &mut Session,
) -> io::Result<()> {
    let mut buf = String::new();
    while session.is_running() {
        buf.clear();
        let n = reader.read_line(&mut buf)?;
        if n == 0 {
            // EOF reached
            break;
        }
        let line = buf.trim();
        if line.is_empty() {
            continue;
        }

        for r in process_line(line, session) {
            writeln!(writer, "{}", r)?;
        }
        writer.flush()?;
    }
    Ok(())
}

pub fn run_stdio(session: &mut Session) -> io::Result<()> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let stdout = io::stdout();
    let mut writer = stdout.lock();
    run_loop(&mut reader, &mut writer, session)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_board_with_coordinates() {
        let lines = render_board(&Board::standard(), true);
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "8 r n b q k b n r");
        assert_eq!(lines[7], "1 R N B Q K B N R");
        assert_eq!(lines[8], "  a b c d e f g h");
    }

    #[test]
    fn test_run_loop_stops_on_quit() {
        let input = b"e2e3\nquit\nboard\n";
        let mut reader = &input[..];
        let mut out = Vec::new();
        let mut session = Session::default();
        run_loop(&mut reader, &mut out, &mut session).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("played e2-e3"));
        assert!(text.contains("black to move"));
        assert!(!text.contains("a b c d"));
        assert!(!session.is_running());
    }
}
