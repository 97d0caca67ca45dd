//! citynet CLI
//!
//! Loads a JSON network description and answers route queries against it.

use std::path::PathBuf;
use std::process::ExitCode;

use citynet::graph::PathStrategy;
use citynet::key::normalize_input;
use citynet::{Config, RouteEngine};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, EnvFilter};

/// citynet CLI
#[derive(Parser, Debug)]
#[command(name = "citynet-cli")]
#[command(about = "Shortest routes over a city network description")]
#[command(version)]
struct Args {
    /// Network description (JSON)
    #[arg(short, long)]
    network: PathBuf,

    /// Minimum-selection strategy for Dijkstra
    #[arg(short, long, value_enum, default_value = "linear")]
    strategy: Strategy,

    /// Maximum number of vertices the network may hold
    #[arg(short = 'c', long, default_value = "100")]
    capacity: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Strategy {
    /// Linear scan, O(V²)
    Linear,
    /// Binary heap, O((V + E) log V)
    Heap,
}

impl From<Strategy> for PathStrategy {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Linear => PathStrategy::LinearScan,
            Strategy::Heap => PathStrategy::BinaryHeap,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Shortest route between two stops
    Route {
        /// Origin stop
        from: String,

        /// Destination stop
        to: String,

        /// Print the route as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print every stop with its outgoing connections
    Show,

    /// Stop nearest to a coordinate
    Nearest {
        /// Latitude in degrees
        #[arg(allow_hyphen_values = true)]
        lat: f64,

        /// Longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },
}

fn main() -> ExitCode {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,citynet=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("citynet CLI v{}", citynet::VERSION);

    let config = Config::builder()
        .graph_capacity(args.capacity)
        .path_strategy(args.strategy.into())
        .build();

    let mut engine = match RouteEngine::load(&args.network, config) {
        Ok(engine) => engine,
        Err(e) => {
            tracing::error!("Failed to load network: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match args.command {
        Commands::Route { from, to, json } => {
            let from = normalize_input(&from);
            let to = normalize_input(&to);

            match engine.shortest_route(&from, &to) {
                Ok(route) if json => match serde_json::to_string_pretty(&route) {
                    Ok(text) => println!("{}", text),
                    Err(e) => {
                        tracing::error!("Failed to encode route: {}", e);
                        return ExitCode::FAILURE;
                    }
                },
                Ok(route) => {
                    println!("From: {} To: {}", from, to);
                    println!("Distance: {}", route.distance);
                    println!("Path: {}", route.stops.join(" -> "));
                }
                Err(e) => {
                    eprintln!("{}", e);
                    return ExitCode::FAILURE;
                }
            }
        }
        Commands::Show => {
            print!("{}", engine.graph());
        }
        Commands::Nearest { lat, lon } => match engine.nearest_stop(lat, lon) {
            Some(name) => println!("{}", name),
            None => {
                eprintln!("No placed stops in the network");
                return ExitCode::FAILURE;
            }
        },
    }

    ExitCode::SUCCESS
}
