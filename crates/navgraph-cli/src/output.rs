//! Output formatting for query results.
//!
//! Every command builds a serializable summary first; the text renderers
//! and the JSON writer both work from that summary.

use std::fmt::Write as _;
use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use navgraph_lib::{Graph, Position, RoutePlan};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Result of a nearest-node query.
#[derive(Debug, Clone, Serialize)]
pub struct ClosestSummary {
    pub query: Position,
    pub index: usize,
    pub position: Position,
    pub distance: f64,
}

/// One node and its outgoing edges in built order.
#[derive(Debug, Clone, Serialize)]
pub struct NodeSummary {
    pub index: usize,
    pub position: Position,
    pub cost: f64,
    pub edges: Vec<EdgeSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EdgeSummary {
    pub id: usize,
    pub to: usize,
    pub cost: f64,
}

/// Collect a [`NodeSummary`] for every node of `graph`.
///
/// # Errors
///
/// Returns an error if a node refers to an edge the graph does not hold.
pub fn summarize_graph(graph: &Graph) -> navgraph_lib::Result<Vec<NodeSummary>> {
    graph
        .nodes()
        .map(|node| {
            let edges = node
                .outgoing_edges()
                .iter()
                .map(|&id| {
                    let edge = graph.edge(id)?;
                    Ok(EdgeSummary {
                        id,
                        to: edge.to(),
                        cost: edge.cost(),
                    })
                })
                .collect::<navgraph_lib::Result<Vec<_>>>()?;
            Ok(NodeSummary {
                index: node.index(),
                position: node.position(),
                cost: node.cost(),
                edges,
            })
        })
        .collect()
}

/// Render a route plan as text.
pub fn render_route_text(plan: &RoutePlan) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Route from node {} to node {} ({} hops; algorithm: {}):",
        plan.start,
        plan.goal,
        plan.hop_count(),
        plan.algorithm
    );
    let _ = writeln!(
        out,
        "{}",
        plan.steps
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" -> ")
    );
    let _ = writeln!(out, "Total cost: {:.3}", plan.cost);
    out
}

/// Render a nearest-node result as text.
pub fn render_closest_text(summary: &ClosestSummary) -> String {
    format!(
        "Closest node to {} is {} at {} (distance {:.3})\n",
        format_position(&summary.query),
        summary.index,
        format_position(&summary.position),
        summary.distance
    )
}

/// Render the graph listing as text.
pub fn render_graph_text(nodes: &[NodeSummary]) -> String {
    let mut out = String::new();
    for node in nodes {
        let _ = writeln!(
            out,
            "node {} at {} (cost {})",
            node.index,
            format_position(&node.position),
            node.cost
        );
        for edge in &node.edges {
            let _ = writeln!(
                out,
                "  -> {} (edge {}, cost {:.3})",
                edge.to, edge.id, edge.cost
            );
        }
    }
    out
}

/// Write `value` to stdout as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if JSON serialization or writing fails.
pub fn render_json<T: Serialize>(value: &T) -> io::Result<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, value).map_err(io::Error::other)?;
    stdout.write_all(b"\n")?;
    Ok(())
}

fn format_position(position: &Position) -> String {
    format!("({}, {}, {})", position.x, position.y, position.z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use navgraph_lib::demo::reference_graph;
    use navgraph_lib::{plan_route, RouteRequest};

    #[test]
    fn route_text_lists_steps_and_cost() {
        let graph = reference_graph().unwrap();
        let plan = plan_route(&graph, &RouteRequest::new(2, 7)).unwrap();
        let text = render_route_text(&plan);
        assert!(text.starts_with("Route from node 2 to node 7 (3 hops; algorithm: dijkstra):"));
        assert!(text.contains("2 -> 4 -> 6 -> 7"));
        assert!(text.contains("Total cost: 5.000"));
    }

    #[test]
    fn graph_summary_keeps_built_edge_order() {
        let graph = reference_graph().unwrap();
        let nodes = summarize_graph(&graph).unwrap();
        assert_eq!(nodes.len(), 9);
        let listed: usize = nodes.iter().map(|node| node.edges.len()).sum();
        assert_eq!(listed, graph.edge_count());

        let from_three: Vec<_> = nodes[3].edges.iter().map(|edge| edge.to).collect();
        assert_eq!(from_three, vec![4, 5]);
        assert!(nodes[8].edges.is_empty());

        let text = render_graph_text(&nodes);
        assert!(text.contains("node 5 at (10, 4, 0) (cost 0)"));
    }

    #[test]
    fn closest_text_reports_distance() {
        let summary = ClosestSummary {
            query: Position::new(1.0, 3.1, 0.0),
            index: 0,
            position: Position::new(1.0, 3.0, 0.0),
            distance: 0.1,
        };
        assert_eq!(
            render_closest_text(&summary),
            "Closest node to (1, 3.1, 0) is 0 at (1, 3, 0) (distance 0.100)\n"
        );
    }
}
