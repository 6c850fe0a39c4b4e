//! Horde CLI - headless driver for the pathfinding and enemy AI crates.
//!
//! - `horde path` - run A* on an ad-hoc grid
//! - `horde grid` - summarize and draw a grid
//! - `horde simulate` - run the enemy AI against a stationary player

mod config;
mod simulate;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use horde_enemy::ChasePolicy;
use horde_nav::{Cell, Grid, PathFinder, TracingSink};
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::SimulationConfig;

#[derive(Parser)]
#[command(name = "horde")]
#[command(about = "Grid pathfinding and enemy behavior trees, headless", version)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find a path between two cells
    Path {
        #[command(flatten)]
        grid: GridArgs,

        /// Start cell as x,y
        #[arg(long, value_parser = parse_cell)]
        start: Cell,

        /// Goal cell as x,y
        #[arg(long, value_parser = parse_cell)]
        goal: Cell,

        /// Fallback retries when the goal is unreachable
        #[arg(long, default_value_t = 1)]
        fallback_attempts: u32,

        /// Give up after expanding this many cells
        #[arg(long)]
        max_expansions: Option<usize>,

        /// Print the path as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print grid statistics and an ASCII rendering
    Grid {
        #[command(flatten)]
        grid: GridArgs,
    },

    /// Run a headless arena
    Simulate {
        /// YAML arena config
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Maximum ticks to run
        #[arg(long, default_value_t = 3_600)]
        ticks: u64,

        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Override the chase policy from the config
        #[arg(long, value_enum)]
        policy: Option<PolicyArg>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct GridArgs {
    #[arg(long, default_value_t = 20)]
    cols: usize,

    #[arg(long, default_value_t = 11)]
    rows: usize,

    /// Blocked cell as x,y (repeatable)
    #[arg(long = "block", value_parser = parse_cell)]
    blocks: Vec<Cell>,

    /// Blocked rectangle as x,y,w,h (repeatable)
    #[arg(long = "rect", value_parser = parse_rect)]
    rects: Vec<Rect>,
}

impl GridArgs {
    fn build(&self) -> Result<Grid> {
        let mut grid = Grid::new(self.cols, self.rows).context("Invalid grid size")?;
        for &cell in &self.blocks {
            if !grid.set_blocked(cell, true) {
                tracing::warn!(%cell, "blocked cell outside grid ignored");
            }
        }
        for r in &self.rects {
            grid.block_rect(Cell::new(r.x, r.y), r.w, r.h);
        }
        Ok(grid)
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
    Direct,
    Pathfinding,
}

impl From<PolicyArg> for ChasePolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Direct => ChasePolicy::Direct,
            PolicyArg::Pathfinding => ChasePolicy::Pathfinding,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Rect {
    x: i32,
    y: i32,
    w: i32,
    h: i32,
}

fn parse_ints<const N: usize>(s: &str) -> Result<[i32; N], String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != N {
        return Err(format!("expected {N} comma-separated integers, got `{s}`"));
    }
    let mut out = [0; N];
    for (slot, part) in out.iter_mut().zip(&parts) {
        *slot = part
            .parse()
            .map_err(|_| format!("`{part}` is not an integer"))?;
    }
    Ok(out)
}

fn parse_cell(s: &str) -> Result<Cell, String> {
    let [x, y] = parse_ints::<2>(s)?;
    Ok(Cell::new(x, y))
}

fn parse_rect(s: &str) -> Result<Rect, String> {
    let [x, y, w, h] = parse_ints::<4>(s)?;
    Ok(Rect { x, y, w, h })
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over the verbosity flag
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Path {
            grid,
            start,
            goal,
            fallback_attempts,
            max_expansions,
            json,
        } => find_path(&grid, start, goal, fallback_attempts, max_expansions, json),
        Commands::Grid { grid } => show_grid(&grid),
        Commands::Simulate {
            config,
            ticks,
            seed,
            policy,
            json,
        } => run_simulation(config, ticks, seed, policy, json),
    }
}

fn find_path(
    args: &GridArgs,
    start: Cell,
    goal: Cell,
    fallback_attempts: u32,
    max_expansions: Option<usize>,
    json: bool,
) -> Result<()> {
    let grid = args.build()?;
    let finder = PathFinder::new()
        .with_max_fallback_attempts(fallback_attempts)
        .with_max_expansions(max_expansions);

    let path = finder.find_path_with(start, goal, &grid, &mut TracingSink);

    if json {
        println!("{}", serde_json::to_string_pretty(&path)?);
        return Ok(());
    }

    if path.is_empty() {
        println!("No path from {start} to {goal}");
        return Ok(());
    }

    println!("Path from {start} to {goal}: {} cells, {} moves", path.len(), path.cost());
    let cells: Vec<String> = path.cells().iter().map(Cell::to_string).collect();
    println!("  {}", cells.join(" -> "));
    if path.last() != Some(goal) {
        println!("  (goal unreachable, ended at nearest reachable cell)");
    }
    Ok(())
}

fn show_grid(args: &GridArgs) -> Result<()> {
    let grid = args.build()?;
    let summary = grid.summary();

    println!("Grid {} cols x {} rows", grid.cols(), grid.rows());
    println!("  Total cells: {}", summary.total);
    println!(
        "  Blocked:     {} ({:.1}%)",
        summary.blocked,
        summary.blocked_percent()
    );
    println!(
        "  Walkable:    {} ({:.1}%)",
        summary.walkable,
        summary.walkable_percent()
    );
    println!();
    print!("{}", grid.to_ascii());
    Ok(())
}

fn run_simulation(
    config_path: Option<PathBuf>,
    ticks: u64,
    seed: u64,
    policy: Option<PolicyArg>,
    json: bool,
) -> Result<()> {
    let mut config = match &config_path {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };
    if let Some(policy) = policy {
        config.enemy.chase = policy.into();
    }

    let report = simulate::run(&config, ticks, seed)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Simulation (seed {})", report.seed);
    println!("========================");
    println!("Ticks:          {} ({} ms)", report.ticks, report.elapsed_ms);
    println!(
        "Enemies:        {} spawned, {} killed, {} alive",
        report.spawned, report.kills, report.enemies_alive
    );
    println!("Attacks landed: {}", report.attacks_landed);
    println!(
        "Player:         {} ({} hp)",
        if report.player_alive { "alive" } else { "dead" },
        report.player_health
    );
    if report.victory {
        println!("Victory!");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_cells_and_rects() {
        assert_eq!(parse_cell("3,4"), Ok(Cell::new(3, 4)));
        assert_eq!(parse_cell(" -1 , 2 "), Ok(Cell::new(-1, 2)));
        assert_eq!(
            parse_rect("1,2,3,4"),
            Ok(Rect { x: 1, y: 2, w: 3, h: 4 })
        );
    }

    #[test]
    fn rejects_malformed_coordinates() {
        assert!(parse_cell("3").is_err());
        assert!(parse_cell("3,4,5").is_err());
        assert!(parse_cell("a,b").is_err());
        assert!(parse_rect("1,2,3").is_err());
    }

    #[test]
    fn cli_builds_grid_from_flags() {
        let cli = Cli::try_parse_from([
            "horde", "grid", "--cols", "5", "--rows", "4", "--block", "1,1", "--rect", "3,0,1,4",
        ])
        .unwrap();
        let Commands::Grid { grid } = cli.command else {
            panic!("expected grid command");
        };
        let grid = grid.build().unwrap();
        assert!(grid.is_blocked(Cell::new(1, 1)));
        assert!(grid.is_blocked(Cell::new(3, 3)));
        assert_eq!(grid.summary().blocked, 5);
    }

    #[test]
    fn cli_parses_simulation_policy() {
        let cli = Cli::try_parse_from([
            "horde", "simulate", "--policy", "pathfinding", "--ticks", "10",
        ])
        .unwrap();
        let Commands::Simulate { policy, ticks, .. } = cli.command else {
            panic!("expected simulate command");
        };
        assert_eq!(ticks, 10);
        assert_eq!(policy.map(ChasePolicy::from), Some(ChasePolicy::Pathfinding));
    }
}
