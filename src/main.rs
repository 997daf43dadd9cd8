//! CLI for maze generation

use clap::Parser;
use lerw_maze::MazeGenerator;

/// Perfect maze generator using loop-erased random walks
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze width in rooms
    #[arg(long, default_value_t = 10)]
    width: usize,

    /// Maze height in rooms
    #[arg(long, default_value_t = 10)]
    height: usize,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,
}

/// Generate one maze and print it
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut gen = MazeGenerator::new(args.width, args.height, args.seed)?;
    print!("{}", gen.generate_maze());
    Ok(())
}
