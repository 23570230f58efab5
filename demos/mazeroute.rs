//! Plan a minimum-cost route through a maze file.
//!
//! ```text
//! mazeroute demos/mazes/corridors.txt --start 1,3 --goal 3,3 --goal 5,3
//! RUST_LOG=maze_paths=debug mazeroute demos/mazes/cavern.txt --start 10,4 \
//!     --goal 1,1 --goal 19,1 --goal 19,8 --goal 1,6 --strategy held-karp
//! ```
//!
//! Exits with status 2 when some goal cannot be reached.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use maze_core::Point;
use maze_demos::{DemoError, Report, load_config, load_maze};
use maze_paths::{OrderStrategy, PlannerConfig, plan_route_with, verify_route};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum StrategyArg {
    /// Every ordering, lexicographically.
    Permutation,
    /// Dynamic program over goal subsets.
    HeldKarp,
}

impl From<StrategyArg> for OrderStrategy {
    fn from(s: StrategyArg) -> Self {
        match s {
            StrategyArg::Permutation => OrderStrategy::Permutation,
            StrategyArg::HeldKarp => OrderStrategy::HeldKarp,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "mazeroute", version, about = "Exact multi-goal maze route planner")]
struct Cli {
    /// Maze file: equal-width rows, `X` wall, `M` mud, anything else open.
    maze: PathBuf,

    /// Start cell as `x,y`.
    #[arg(long)]
    start: Point,

    /// Goal cell as `x,y`; repeat for more goals.
    #[arg(long = "goal", required = true)]
    goals: Vec<Point>,

    /// JSON planner configuration.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the configured ordering strategy.
    #[arg(long, value_enum)]
    strategy: Option<StrategyArg>,

    /// Override the configured goal ceiling.
    #[arg(long)]
    max_goals: Option<usize>,

    /// Print the route as JSON instead of the text report.
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn planner_config(&self) -> Result<PlannerConfig, DemoError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => PlannerConfig::default(),
        };
        if let Some(s) = self.strategy {
            config.strategy = s.into();
        }
        if let Some(n) = self.max_goals {
            config.max_goals = n;
        }
        Ok(config)
    }
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let maze = load_maze(&cli.maze)?;
    let config = cli.planner_config()?;
    tracing::info!(
        start = %cli.start,
        goals = cli.goals.len(),
        strategy = ?config.strategy,
        "planning"
    );

    let Some(route) =
        plan_route_with(&maze, cli.start, &cli.goals, config).map_err(DemoError::from)?
    else {
        println!("unreachable");
        return Ok(ExitCode::from(2));
    };

    let verdict = verify_route(&maze, &route.actions, cli.start, &cli.goals);
    if !verdict.satisfied || verdict.total_cost != route.cost {
        tracing::error!(?verdict, cost = route.cost, "planned route failed verification");
    }

    if cli.json {
        let doc = serde_json::json!({ "route": route, "verdict": verdict });
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        let report = Report {
            maze: &maze,
            start: cli.start,
            goals: &cli.goals,
            route: &route,
            verdict,
        };
        print!("{report}");
    }
    Ok(ExitCode::SUCCESS)
}
