use anyhow::{Context, Result};

use navgraph_lib::Graph;

use crate::output::{render_graph_text, render_json, summarize_graph, OutputFormat};

/// Handle the describe subcommand: list every node with its outgoing edges.
pub fn handle_describe_command(graph: &Graph, format: OutputFormat) -> Result<()> {
    let nodes = summarize_graph(graph).context("failed to summarize graph")?;
    match format {
        OutputFormat::Text => print!("{}", render_graph_text(&nodes)),
        OutputFormat::Json => render_json(&nodes)?,
    }
    Ok(())
}
