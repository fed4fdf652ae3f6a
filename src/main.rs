//! KnightFall text front end.

use clap::Parser;
use knightfall::cli::{run_stdio, Session};
use knightfall::Game;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Starting position as "<board-fen> [w|b]"
    #[arg(short, long)]
    placement: Option<String>,

    /// Log filter, e.g. "debug" or "knightfall=info" (overrides RUST_LOG)
    #[arg(short, long)]
    log_level: Option<String>,
}

fn main() {
    let args = Args::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(filter) = &args.log_level {
        builder.parse_filters(filter);
    }
    builder.init();

    knightfall::init();

    let game = match args.placement.as_deref() {
        Some(text) => match Game::from_placement(text) {
            Ok(game) => game,
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(2);
            }
        },
        None => Game::new(),
    };

    let mut session = Session::new(game);
    if let Err(e) = run_stdio(&mut session) {
        eprintln!("session loop failed: {:?}", e);
    }
}
