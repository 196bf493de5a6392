//! Small built-in level used by the CLI, tests and benchmarks.

use crate::error::Result;
use crate::graph::Graph;
use crate::position::Position;

/// Node positions of the reference level, in index order.
pub const REFERENCE_NODES: [[f64; 3]; 9] = [
    [1.0, 3.0, 0.0],
    [1.0, 1.0, 0.0],
    [2.0, 1.0, 0.0],
    [2.0, 2.0, 0.0],
    [4.0, 1.0, 0.0],
    [10.0, 4.0, 0.0],
    [4.0, 3.0, 0.0],
    [5.0, 3.0, 0.0],
    [6.0, 1.0, 0.0],
];

/// Directed edges of the reference level as `(from, to)` pairs.
pub const REFERENCE_EDGES: [(usize, usize); 11] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (2, 4),
    (3, 4),
    (3, 5),
    (4, 6),
    (5, 7),
    (6, 7),
    (4, 8),
    (7, 8),
];

/// Build the reference level with unit cost multipliers and zero node
/// costs. The returned graph is already built.
pub fn reference_graph() -> Result<Graph> {
    let mut graph = Graph::new();
    for position in REFERENCE_NODES {
        graph.add_node(Position::from(position), 0.0)?;
    }
    for (from, to) in REFERENCE_EDGES {
        graph.add_edge(from, to, 1.0)?;
    }
    graph.build();
    Ok(graph)
}
