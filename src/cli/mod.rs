pub mod options;
pub mod parser;
pub mod session;

pub use options::Options;
pub use parser::{parse_command, Command};
pub use session::{process_line, render_board, run_loop, run_stdio, Session};
