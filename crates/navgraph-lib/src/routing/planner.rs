//! Route planning strategies implementing the Strategy pattern.
//!
//! The two Dijkstra planners settle nodes in the same order and differ only
//! in how the next node to settle is found. The greedy planner keeps the
//! cheapest-edge-first route choice of the level scripts.

use crate::error::Result;
use crate::graph::{Graph, NodeId};
use crate::path::{find_path_dijkstra, find_path_greedy_descent, find_path_linear_scan};

use super::RouteAlgorithm;

/// Trait for route planning strategies.
pub trait RoutePlanner: Send + Sync {
    /// The algorithm identifier for this planner.
    fn algorithm(&self) -> RouteAlgorithm;

    /// Execute the search on the given graph.
    fn find_path(&self, graph: &Graph, start: NodeId, goal: NodeId) -> Result<Vec<NodeId>>;
}

/// Dijkstra planner backed by a binary-heap frontier.
#[derive(Debug, Clone, Default)]
pub struct DijkstraPlanner;

impl RoutePlanner for DijkstraPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Dijkstra
    }

    fn find_path(&self, graph: &Graph, start: NodeId, goal: NodeId) -> Result<Vec<NodeId>> {
        find_path_dijkstra(graph, start, goal)
    }
}

/// Dijkstra planner that scans the distance table for the next node.
///
/// Suited to the small level graphs where a heap buys nothing.
#[derive(Debug, Clone, Default)]
pub struct LinearScanPlanner;

impl RoutePlanner for LinearScanPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::LinearScan
    }

    fn find_path(&self, graph: &Graph, start: NodeId, goal: NodeId) -> Result<Vec<NodeId>> {
        find_path_linear_scan(graph, start, goal)
    }
}

/// Depth-first planner that always tries the cheapest outgoing edge first.
///
/// Needs a built graph and does not guarantee the lowest cost.
#[derive(Debug, Clone, Default)]
pub struct GreedyPlanner;

impl RoutePlanner for GreedyPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Greedy
    }

    fn find_path(&self, graph: &Graph, start: NodeId, goal: NodeId) -> Result<Vec<NodeId>> {
        find_path_greedy_descent(graph, start, goal)
    }
}

/// Select the appropriate planner for the given algorithm.
pub fn select_planner(algorithm: RouteAlgorithm) -> Box<dyn RoutePlanner> {
    match algorithm {
        RouteAlgorithm::Dijkstra => Box::new(DijkstraPlanner),
        RouteAlgorithm::LinearScan => Box::new(LinearScanPlanner),
        RouteAlgorithm::Greedy => Box::new(GreedyPlanner),
    }
}
