use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use navgraph_cli::commands::closest::handle_closest_command;
use navgraph_cli::commands::describe::handle_describe_command;
use navgraph_cli::commands::route::{handle_route_command, AlgorithmArg, RouteCommandArgs};
use navgraph_cli::output::OutputFormat;
use navgraph_lib::demo::reference_graph;
use navgraph_lib::Position;

#[derive(Parser, Debug)]
#[command(author, version, about = "Path-finding queries over the navgraph reference level")]
struct Cli {
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the lowest-cost route between two node indices.
    Route {
        /// Starting node index.
        #[arg(long = "from")]
        from: usize,
        /// Destination node index.
        #[arg(long = "to")]
        to: usize,
        /// Search strategy.
        #[arg(long, value_enum, default_value_t = AlgorithmArg::Dijkstra)]
        algorithm: AlgorithmArg,
    },
    /// Find the node nearest to a point.
    Closest {
        #[arg(long, allow_negative_numbers = true)]
        x: f64,
        #[arg(long, allow_negative_numbers = true)]
        y: f64,
        #[arg(long, allow_negative_numbers = true, default_value_t = 0.0)]
        z: f64,
    },
    /// List every node with its outgoing edges, cheapest first.
    Describe,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let graph = reference_graph().context("failed to build the reference level")?;

    match cli.command {
        Command::Route {
            from,
            to,
            algorithm,
        } => handle_route_command(
            &graph,
            &RouteCommandArgs {
                from,
                to,
                algorithm,
            },
            cli.format,
        ),
        Command::Closest { x, y, z } => {
            handle_closest_command(&graph, Position::new(x, y, z), cli.format)
        }
        Command::Describe => handle_describe_command(&graph, cli.format),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
