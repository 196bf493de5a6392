use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId};

/// Find the lowest-cost path from `start` to `goal`.
///
/// Returns the node indices along the path, `start` and `goal` included.
/// Fails with [`Error::OutOfRange`] for an unknown endpoint and
/// [`Error::NoPathFound`] when `goal` is unreachable.
pub fn lowest_cost_path(graph: &Graph, start: NodeId, goal: NodeId) -> Result<Vec<NodeId>> {
    find_path_dijkstra(graph, start, goal)
}

/// Run Dijkstra's algorithm with a binary-heap frontier.
///
/// Nodes are settled in `(distance, index)` order, so among equally distant
/// candidates the lowest index is settled first.
pub fn find_path_dijkstra(graph: &Graph, start: NodeId, goal: NodeId) -> Result<Vec<NodeId>> {
    if let Some(trivial) = validate_endpoints(graph, start, goal)? {
        return Ok(trivial);
    }

    let mut search = SearchState::new(graph.node_count(), start);
    let mut queue = BinaryHeap::new();
    queue.push(QueueEntry::new(start, 0.0));

    while let Some(entry) = queue.pop() {
        // Older entries for a node pop after the one that settled it.
        if search.visited[entry.node] {
            continue;
        }

        if search.settle(graph, entry.node, goal) {
            return Ok(search.reconstruct_path(start, goal));
        }

        for edge in graph.neighbours(entry.node) {
            if let Some(cost) = search.relax(entry.node, edge.to(), edge.cost()) {
                queue.push(QueueEntry::new(edge.to(), cost));
            }
        }
    }

    Err(search.no_path(start, goal))
}

/// Run Dijkstra's algorithm by scanning the whole distance table for the
/// next node to settle.
///
/// Quadratic in the node count, but settles nodes in exactly the same
/// order as [`find_path_dijkstra`] and therefore returns the same paths.
pub fn find_path_linear_scan(graph: &Graph, start: NodeId, goal: NodeId) -> Result<Vec<NodeId>> {
    if let Some(trivial) = validate_endpoints(graph, start, goal)? {
        return Ok(trivial);
    }

    let mut search = SearchState::new(graph.node_count(), start);
    while let Some(current) = search.cheapest_unvisited() {
        if search.settle(graph, current, goal) {
            return Ok(search.reconstruct_path(start, goal));
        }

        for edge in graph.neighbours(current) {
            search.relax(current, edge.to(), edge.cost());
        }
    }

    Err(search.no_path(start, goal))
}

/// Follow each node's outgoing edges cheapest first, depth first, and
/// return the first route that reaches `goal`.
///
/// This is the route choice level scripts expect. It relies on the
/// ordering established by [`Graph::build`] and is not guaranteed to find
/// the lowest-cost path; use [`find_path_dijkstra`] for that. Nodes are
/// never entered twice, so the search ends with [`Error::NoPathFound`] once
/// every reachable node has been tried.
pub fn find_path_greedy_descent(
    graph: &Graph,
    start: NodeId,
    goal: NodeId,
) -> Result<Vec<NodeId>> {
    if !graph.is_built() {
        return Err(Error::InvalidState {
            operation: "run greedy descent",
            reason: "graph has not been built",
        });
    }
    if let Some(trivial) = validate_endpoints(graph, start, goal)? {
        return Ok(trivial);
    }

    let mut visited = vec![false; graph.node_count()];
    visited[start] = true;
    let mut path = vec![start];
    // Next outgoing edge to try for each node on `path`.
    let mut cursors = vec![0usize];

    while let Some(&node) = path.last() {
        if node == goal {
            debug!(start, goal, hops = path.len() - 1, "greedy descent reached goal");
            return Ok(path);
        }

        let outgoing = graph.node(node)?.outgoing_edges();
        let cursor = &mut cursors[path.len() - 1];
        let mut next = None;
        while let Some(&edge_id) = outgoing.get(*cursor) {
            *cursor += 1;
            let target = graph.edge(edge_id)?.to();
            if !visited[target] {
                next = Some(target);
                break;
            }
        }

        match next {
            Some(target) => {
                visited[target] = true;
                path.push(target);
                cursors.push(0);
            }
            None => {
                trace!(node, "backtracking");
                path.pop();
                cursors.pop();
            }
        }
    }

    debug!(start, goal, "greedy descent exhausted reachable nodes");
    Err(Error::NoPathFound { start, goal })
}

/// Sum the edge costs along `path`, taking the cheapest edge where parallel
/// edges connect a pair.
pub fn path_cost(graph: &Graph, path: &[NodeId]) -> Result<f64> {
    for &node in path {
        graph.node(node)?;
    }

    path.windows(2).try_fold(0.0, |total, pair| {
        let (from, to) = (pair[0], pair[1]);
        graph
            .neighbours(from)
            .filter(|edge| edge.to() == to)
            .map(|edge| edge.cost())
            .min_by(f64::total_cmp)
            .map(|cost| total + cost)
            .ok_or(Error::NoPathFound {
                start: from,
                goal: to,
            })
    })
}

fn validate_endpoints(graph: &Graph, start: NodeId, goal: NodeId) -> Result<Option<Vec<NodeId>>> {
    graph.node(start)?;
    graph.node(goal)?;
    if start == goal {
        return Ok(Some(vec![start]));
    }
    Ok(None)
}

/// Working state of a single query. Never shared between queries.
struct SearchState {
    distances: Vec<f64>,
    parents: Vec<Option<NodeId>>,
    visited: Vec<bool>,
    settled: usize,
}

impl SearchState {
    fn new(node_count: usize, start: NodeId) -> Self {
        let mut distances = vec![f64::INFINITY; node_count];
        distances[start] = 0.0;
        Self {
            distances,
            parents: vec![None; node_count],
            visited: vec![false; node_count],
            settled: 0,
        }
    }

    /// Mark `node` as final and report whether it is the goal.
    fn settle(&mut self, graph: &Graph, node: NodeId, goal: NodeId) -> bool {
        self.visited[node] = true;
        self.settled += 1;
        trace!(node, distance = self.distances[node], "settled node");

        if node == goal {
            debug!(
                nodes = graph.node_count(),
                settled = self.settled,
                cost = self.distances[goal],
                "lowest-cost path found"
            );
            return true;
        }
        false
    }

    /// Offer `current -> next` as a better route to `next`, returning the
    /// new distance when it improves on the best known one.
    fn relax(&mut self, current: NodeId, next: NodeId, edge_cost: f64) -> Option<f64> {
        if self.visited[next] {
            return None;
        }
        let candidate = self.distances[current] + edge_cost;
        if candidate < self.distances[next] {
            self.distances[next] = candidate;
            self.parents[next] = Some(current);
            return Some(candidate);
        }
        None
    }

    /// Unvisited node with the smallest finite distance, lowest index first.
    fn cheapest_unvisited(&self) -> Option<NodeId> {
        let mut best: Option<NodeId> = None;
        for (node, &distance) in self.distances.iter().enumerate() {
            if self.visited[node] || distance == f64::INFINITY {
                continue;
            }
            match best {
                Some(current) if self.distances[current] <= distance => {}
                _ => best = Some(node),
            }
        }
        best
    }

    fn reconstruct_path(&self, start: NodeId, goal: NodeId) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut current = Some(goal);
        while let Some(node) = current {
            path.push(node);
            if node == start {
                break;
            }
            current = self.parents[node];
        }
        path.reverse();
        path
    }

    fn no_path(&self, start: NodeId, goal: NodeId) -> Error {
        debug!(start, goal, settled = self.settled, "no path found");
        Error::NoPathFound { start, goal }
    }
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: NodeId,
    cost: FloatOrd,
}

impl QueueEntry {
    fn new(node: NodeId, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost, then index.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
