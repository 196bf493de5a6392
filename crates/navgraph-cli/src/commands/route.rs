//! Route command handler for computing paths between nodes.

use anyhow::{Context, Result};
use clap::ValueEnum;

use navgraph_lib::{plan_route, Graph, RouteAlgorithm, RouteRequest};

use crate::output::{render_json, render_route_text, OutputFormat};

/// Search strategy as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum AlgorithmArg {
    #[default]
    Dijkstra,
    LinearScan,
    Greedy,
}

impl From<AlgorithmArg> for RouteAlgorithm {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::Dijkstra => RouteAlgorithm::Dijkstra,
            AlgorithmArg::LinearScan => RouteAlgorithm::LinearScan,
            AlgorithmArg::Greedy => RouteAlgorithm::Greedy,
        }
    }
}

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Starting node index.
    pub from: usize,
    /// Destination node index.
    pub to: usize,
    /// Algorithm to use when planning the route.
    pub algorithm: AlgorithmArg,
}

impl RouteCommandArgs {
    /// Convert CLI args to a library RouteRequest.
    pub fn to_request(&self) -> RouteRequest {
        RouteRequest::new(self.from, self.to).with_algorithm(self.algorithm.into())
    }
}

/// Handle the route subcommand.
pub fn handle_route_command(
    graph: &Graph,
    args: &RouteCommandArgs,
    format: OutputFormat,
) -> Result<()> {
    let request = args.to_request();
    let plan = plan_route(graph, &request).with_context(|| {
        format!(
            "failed to plan route from node {} to node {}",
            args.from, args.to
        )
    })?;

    match format {
        OutputFormat::Text => print!("{}", render_route_text(&plan)),
        OutputFormat::Json => render_json(&plan)?,
    }
    Ok(())
}
