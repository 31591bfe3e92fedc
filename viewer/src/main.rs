mod render;
mod run;

use std::process;
use std::time::Duration;

use clap::Parser;
use engine::{Generator, Grid};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Watch a perfect maze being carved by depth-first backtracking.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze width in cells
    #[arg(long, default_value_t = 25)]
    width: usize,

    /// Maze height in cells
    #[arg(long, default_value_t = 25)]
    height: usize,

    /// Start cell column (random if omitted)
    #[arg(long)]
    start_x: Option<usize>,

    /// Start cell row (random if omitted)
    #[arg(long)]
    start_y: Option<usize>,

    /// Random seed for reproducible mazes
    #[arg(long)]
    seed: Option<u64>,

    /// Delay between generation steps, in milliseconds
    #[arg(long, default_value_t = 15)]
    delay_ms: u64,

    /// Skip the animation and print the finished maze
    #[arg(long)]
    instant: bool,
}

fn main() {
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut grid = match Grid::new(args.width, args.height) {
        Ok(grid) => grid,
        Err(error) => {
            eprintln!("{}", error);
            process::exit(1);
        }
    };

    let start_x = args
        .start_x
        .unwrap_or_else(|| rng.random_range(0..args.width));
    let start_y = args
        .start_y
        .unwrap_or_else(|| rng.random_range(0..args.height));

    let mut generator = match Generator::new(&mut grid, start_x, start_y, rng) {
        Ok(generator) => generator,
        Err(error) => {
            eprintln!("{}", error);
            process::exit(1);
        }
    };

    if args.instant {
        generator.run_to_completion();
        println!("{}", generator.grid());
        println!(
            "{}x{} maze, {} passages.",
            args.width,
            args.height,
            generator.grid().passage_count()
        );
        return;
    }

    if let Err(error) = run::run(generator, Duration::from_millis(args.delay_ms)) {
        eprintln!("Terminal error: {}", error);
        process::exit(1);
    }
}
