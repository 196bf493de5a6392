//! Shared fixtures for integration tests.

use navgraph_lib::{path_cost, Graph, NodeId, Position};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random built graph with up to `max_nodes` nodes, reproducible per seed.
///
/// Coordinates are small integers so distances repeat often and tie-breaks
/// get exercised. Parallel edges and self loops are allowed.
#[allow(dead_code)]
pub fn random_graph(seed: u64, max_nodes: usize) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let node_count = rng.gen_range(2..=max_nodes);
    let mut graph = Graph::new();
    for _ in 0..node_count {
        let position = Position::new(
            f64::from(rng.gen_range(-5i32..=5)),
            f64::from(rng.gen_range(-5i32..=5)),
            f64::from(rng.gen_range(-2i32..=2)),
        );
        graph
            .add_node(position, f64::from(rng.gen_range(0i32..4)))
            .expect("finite node");
    }

    let edge_count = rng.gen_range(0..=node_count * 3);
    for _ in 0..edge_count {
        let from = rng.gen_range(0..node_count);
        let to = rng.gen_range(0..node_count);
        let multiplier = if rng.gen_bool(0.2) {
            1.0
        } else {
            rng.gen_range(0.0..3.0)
        };
        graph.add_edge(from, to, multiplier).expect("valid edge");
    }

    graph.build();
    graph
}

/// Cost of the cheapest simple path from `start` to `goal`, found by
/// enumerating every simple path. `None` when `goal` is unreachable.
#[allow(dead_code)]
pub fn brute_force_cost(graph: &Graph, start: NodeId, goal: NodeId) -> Option<f64> {
    let mut best: Option<f64> = None;
    let mut on_path = vec![false; graph.node_count()];
    let mut path = vec![start];
    on_path[start] = true;
    explore(graph, goal, &mut path, &mut on_path, &mut best);
    best
}

fn explore(
    graph: &Graph,
    goal: NodeId,
    path: &mut Vec<NodeId>,
    on_path: &mut [bool],
    best: &mut Option<f64>,
) {
    let current = *path.last().expect("path never empty");
    if current == goal {
        let cost = path_cost(graph, path).expect("enumerated path is connected");
        if best.map_or(true, |known| cost < known) {
            *best = Some(cost);
        }
        return;
    }

    let targets: Vec<NodeId> = graph
        .outgoing(current)
        .expect("node in range")
        .map(|edge| edge.to())
        .collect();
    for next in targets {
        if on_path[next] {
            continue;
        }
        on_path[next] = true;
        path.push(next);
        explore(graph, goal, path, on_path, best);
        path.pop();
        on_path[next] = false;
    }
}

/// Assert that consecutive path entries are joined by directed edges.
#[allow(dead_code)]
pub fn assert_edges_exist(graph: &Graph, path: &[NodeId]) {
    for pair in path.windows(2) {
        let connected = graph
            .outgoing(pair[0])
            .expect("node in range")
            .any(|edge| edge.to() == pair[1]);
        assert!(connected, "no edge {} -> {} in path {path:?}", pair[0], pair[1]);
    }
}
