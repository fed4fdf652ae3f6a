use knightfall::cli::{parse_command, Command};

#[test]
fn test_parse_simple_commands() {
    assert_eq!(parse_command("new"), Command::NewGame);
    assert_eq!(parse_command("reset"), Command::NewGame);
    assert_eq!(parse_command("  board  "), Command::Board);
    assert_eq!(parse_command("fen"), Command::Fen);
    assert_eq!(parse_command("quit"), Command::Quit);
    assert_eq!(parse_command("help"), Command::Help);
}

#[test]
fn test_parse_moves_and_select() {
    assert_eq!(parse_command("moves"), Command::Moves { square: None });
    assert_eq!(
        parse_command("select e2"),
        Command::Moves {
            square: Some("e2".to_string())
        }
    );
    assert_eq!(
        parse_command("move g1f3"),
        Command::Move {
            text: "g1f3".to_string()
        }
    );
    assert_eq!(
        parse_command("g1f3"),
        Command::Move {
            text: "g1f3".to_string()
        }
    );
}

#[test]
fn test_parse_position() {
    assert_eq!(parse_command("position startpos"), Command::Position { placement: None });
    assert_eq!(
        parse_command("position 4k3/8/8/8/8/8/8/4K3 b"),
        Command::Position {
            placement: Some("4k3/8/8/8/8/8/8/4K3 b".to_string())
        }
    );
}

#[test]
fn test_parse_setoption_and_perft() {
    assert_eq!(
        parse_command("setoption name ShowBoard value true"),
        Command::SetOption {
            name: "ShowBoard".to_string(),
            value: Some("true".to_string())
        }
    );
    assert_eq!(parse_command("perft 3"), Command::Perft { depth: Some(3) });
    assert_eq!(parse_command("perft x"), Command::Perft { depth: None });
}

#[test]
fn test_unknown_input() {
    assert_eq!(parse_command("castle"), Command::Unknown("castle".to_string()));
    assert_eq!(parse_command("move"), Command::Unknown("move".to_string()));
    assert_eq!(parse_command("z9z9"), Command::Unknown("z9z9".to_string()));
    assert_eq!(parse_command(""), Command::Unknown(String::new()));
}
