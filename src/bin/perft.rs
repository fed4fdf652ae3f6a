use clap::Parser;
use knightfall::fen::START_PLACEMENT;
use knightfall::perft::{divide, perft};
use knightfall::Game;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Count move-tree leaves under the variant rules",
    long_about = None
)]
struct Args {
    #[arg(short, long, default_value_t = String::from(START_PLACEMENT))]
    placement: String,

    #[arg(short, long, default_value_t = 4)]
    depth: u8,

    /// Print the node count under each root move
    #[arg(long)]
    divide: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let game = match Game::from_placement(&args.placement) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    println!("Running perft on '{}' at depth {}", args.placement, args.depth);

    let start = std::time::Instant::now();
    let nodes = if args.divide {
        let parts = divide(&game, args.depth);
        for (mv, n) in &parts {
            println!("{}: {}", mv, n);
        }
        parts.iter().map(|(_, n)| n).sum()
    } else {
        perft(&game, args.depth)
    };
    let duration = start.elapsed();

    println!(
        "perft({}) = {} nodes ({} ms, {:.2} Mnps)",
        args.depth,
        nodes,
        duration.as_millis(),
        nodes as f64 / (duration.as_micros().max(1) as f64)
    );
}
