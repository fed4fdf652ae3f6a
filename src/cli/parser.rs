//! Line parser for the text protocol.
//!
//! One command per line; unknown input is reported back rather than rejected
//! here, so the session can answer with an error line.

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Command {
    NewGame,
    Position {
        placement: Option<String>,
    },
    Moves {
        square: Option<String>,
    },
    Move {
        text: String,
    },
    Board,
    Fen,
    Perft {
        depth: Option<u8>,
    },
    SetOption {
        name: String,
        value: Option<String>,
    },
    Help,
    Quit,
    Unknown(String),
}

/// Parse a command from one input line (simple tokenizer)
pub fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Command::Unknown(String::new());
    }

    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    match parts[0] {
        "new" | "reset" => Command::NewGame,
        "board" | "d" => Command::Board,
        "fen" => Command::Fen,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        "moves" | "select" => Command::Moves {
            square: parts.get(1).map(|s| s.to_string()),
        },
        "move" | "play" => match parts.get(1) {
            Some(text) => Command::Move {
                text: text.to_string(),
            },
            None => Command::Unknown(trimmed.to_string()),
        },
        "perft" => Command::Perft {
            depth: parts.get(1).and_then(|v| v.parse::<u8>().ok()),
        },
        "position" => {
            // position startpos | position <board-fen> [w|b]
            let placement = match parts.get(1) {
                None | Some(&"startpos") => None,
                Some(_) => Some(parts[1..].join(" ")),
            };
            Command::Position { placement }
        }
        "setoption" => {
            // setoption name <name> [value <val>]
            let mut name = String::new();
            let mut value: Option<String> = None;
            let mut i = 1usize;
            while i < parts.len() {
                match parts[i] {
                    "name" => {
                        i += 1;
                        let mut words = Vec::new();
                        while i < parts.len() && parts[i] != "value" {
                            words.push(parts[i]);
                            i += 1;
                        }
                        name = words.join(" ");
                    }
                    "value" => {
                        value = Some(parts[i + 1..].join(" "));
                        break;
                    }
                    _ => {
                        i += 1;
                    }
                }
            }
            Command::SetOption { name, value }
        }
        // Bare coordinate moves, e.g. "e2e3"
        other if other.len() == 4 && crate::utils::parse_move_text(other).is_some() => {
            Command::Move {
                text: other.to_string(),
            }
        }
        _ => Command::Unknown(trimmed.to_string()),
    }
}
