//! Nearest-node lookup.

use anyhow::{Context, Result};

use navgraph_lib::{Graph, Position};

use crate::output::{render_closest_text, render_json, ClosestSummary, OutputFormat};

/// Handle the closest subcommand.
pub fn handle_closest_command(graph: &Graph, query: Position, format: OutputFormat) -> Result<()> {
    let node = graph
        .closest_node(query)
        .context("failed to find the closest node")?;
    let summary = ClosestSummary {
        query,
        index: node.index(),
        position: node.position(),
        distance: node.position().distance_to(&query),
    };

    match format {
        OutputFormat::Text => print!("{}", render_closest_text(&summary)),
        OutputFormat::Json => render_json(&summary)?,
    }
    Ok(())
}
