//! Session options, changed at runtime with `setoption`.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Print the board after every committed move
    pub show_board: bool,

    /// Label files and ranks when printing the board
    pub coordinates: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            show_board: false,
            coordinates: true,
        }
    }
}

fn parse_check(name: &str, value: Option<&str>) -> Result<bool, String> {
    match value.map(str::to_ascii_lowercase).as_deref() {
        Some("true") | Some("on") | Some("1") => Ok(true),
        Some("false") | Some("off") | Some("0") => Ok(false),
        Some(other) => Err(format!("Invalid value for option {}: {}", name, other)),
        None => Err(format!("Option {} requires a value", name)),
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Option names are matched case-insensitively.
    pub fn set_option(&mut self, name: &str, value: Option<&str>) -> Result<(), String> {
        match name.to_ascii_lowercase().as_str() {
            "showboard" => self.show_board = parse_check(name, value)?,
            "coordinates" => self.coordinates = parse_check(name, value)?,
            _ => return Err(format!("Unknown option: {}", name)),
        }
        Ok(())
    }

    pub fn describe(&self) -> Vec<String> {
        vec![
            format!("option name ShowBoard type check default false value {}", self.show_board),
            format!("option name Coordinates type check default true value {}", self.coordinates),
        ]
    }
}
