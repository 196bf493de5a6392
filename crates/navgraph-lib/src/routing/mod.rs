//! Route planning on top of the path finder.
//!
//! This module provides:
//! - [`RouteAlgorithm`] - Supported search strategies
//! - [`RouteRequest`] - Start, goal and strategy for one query
//! - [`RoutePlan`] - Planned route result with its total cost
//! - [`plan_route`] - Main entry point for computing routes
//!
//! # Example
//!
//! ```
//! use navgraph_lib::{demo, plan_route, RouteRequest};
//!
//! let graph = demo::reference_graph()?;
//! let plan = plan_route(&graph, &RouteRequest::new(2, 7))?;
//! assert_eq!(plan.steps, vec![2, 4, 6, 7]);
//! assert_eq!(plan.cost, 5.0);
//! # Ok::<(), navgraph_lib::Error>(())
//! ```

mod planner;

pub use planner::{
    select_planner, DijkstraPlanner, GreedyPlanner, LinearScanPlanner, RoutePlanner,
};

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::graph::{Graph, NodeId};
use crate::path::path_cost;

/// Supported search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum RouteAlgorithm {
    /// Dijkstra with a binary-heap frontier.
    #[default]
    Dijkstra,
    /// Dijkstra selecting the next node by scanning every distance.
    LinearScan,
    /// Depth-first descent along the cheapest outgoing edges. Not optimal.
    Greedy,
}

impl fmt::Display for RouteAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteAlgorithm::Dijkstra => "dijkstra",
            RouteAlgorithm::LinearScan => "linear-scan",
            RouteAlgorithm::Greedy => "greedy",
        };
        f.write_str(value)
    }
}

/// High-level route planning request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteRequest {
    pub start: NodeId,
    pub goal: NodeId,
    pub algorithm: RouteAlgorithm,
}

impl RouteRequest {
    /// Request using the default algorithm.
    pub fn new(start: NodeId, goal: NodeId) -> Self {
        Self {
            start,
            goal,
            algorithm: RouteAlgorithm::default(),
        }
    }

    pub fn with_algorithm(mut self, algorithm: RouteAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    pub algorithm: RouteAlgorithm,
    pub start: NodeId,
    pub goal: NodeId,
    pub steps: Vec<NodeId>,
    /// Sum of the edge costs along `steps`.
    pub cost: f64,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Plan a route for `request` over `graph`.
pub fn plan_route(graph: &Graph, request: &RouteRequest) -> Result<RoutePlan> {
    let planner = select_planner(request.algorithm);
    let steps = planner.find_path(graph, request.start, request.goal)?;
    let cost = path_cost(graph, &steps)?;

    debug!(
        algorithm = %request.algorithm,
        start = request.start,
        goal = request.goal,
        hops = steps.len().saturating_sub(1),
        cost,
        "route planned"
    );

    Ok(RoutePlan {
        algorithm: request.algorithm,
        start: request.start,
        goal: request.goal,
        steps,
        cost,
    })
}
