//! Walk an agent across a tile map and print the route.
//!
//! Run: cargo run --bin tilepath-demo -- --goal 9,9

use std::path::PathBuf;

use clap::Parser;
use tilepath_core::Cell;
use tilepath_demos::{DEFAULT_SIZE, DemoError, Scene};

/// Command line arguments for the tile walking demo.
#[derive(Parser, Debug)]
#[command(name = "tilepath-demo")]
#[command(about = "Find and print a shortest route across a tile grid")]
#[command(version)]
struct Args {
    /// Side of the square grid (ignored with --map)
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    size: i32,

    /// Text map to load: '#' blocked, '.' open
    #[arg(long)]
    map: Option<PathBuf>,

    /// Starting cell as x,y
    #[arg(long, default_value = "0,0", allow_hyphen_values = true)]
    start: Cell,

    /// Target cell as x,y
    #[arg(long, allow_hyphen_values = true)]
    goal: Cell,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&args.log_level))
        .init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), DemoError> {
    let scene = match &args.map {
        Some(path) => Scene::from_file(path)?,
        None => Scene::with_size(args.size)?,
    };

    let mut walk = match scene.walk(args.start, args.goal) {
        Ok(walk) => walk,
        Err(e) => {
            log::warn!("{e}");
            println!("no path from {} to {}", args.start, args.goal);
            return Ok(());
        }
    };
    print!("{}", walk.map);
    if !walk.found {
        println!("no path from {} to {}", args.start, args.goal);
        return Ok(());
    }

    let mut steps = 0;
    while let Some(c) = walk.agent.next_waypoint() {
        steps += 1;
        println!("step {steps}: {c}");
    }
    println!("arrived at {} after {steps} steps", walk.agent.cell());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn negative_cells_are_values_not_flags() {
        let args =
            Args::try_parse_from(["tilepath-demo", "--start", "-1,0", "--goal", "3,-2"]).unwrap();
        assert_eq!(args.start, Cell::new(-1, 0));
        assert_eq!(args.goal, Cell::new(3, -2));
    }

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["tilepath-demo", "--goal", "9,9"]).unwrap();
        assert_eq!(args.start, Cell::ZERO);
        assert_eq!(args.size, DEFAULT_SIZE);
        assert!(args.map.is_none());
        assert_eq!(args.log_level, "warn");
    }
}
