//! navgraph library entry points.
//!
//! This crate builds directed path-finding graphs over 3D node positions,
//! answers nearest-node queries and runs lowest-cost path searches. The
//! CLI and any embedding application should depend on the functions
//! exported here instead of reimplementing behavior.
//!
//! Typical use: add every node, then every edge, call [`Graph::build`]
//! once, then query freely. Queries borrow the graph immutably and keep
//! their working state local, so a built graph can be shared across
//! threads.

#![deny(warnings)]

pub mod demo;
pub mod error;
pub mod graph;
pub mod path;
pub mod position;
pub mod routing;

pub use error::{Error, IndexKind, Result};
pub use graph::{Edge, EdgeId, Graph, Node, NodeId};
pub use path::{
    find_path_dijkstra, find_path_greedy_descent, find_path_linear_scan, lowest_cost_path,
    path_cost,
};
pub use position::Position;
pub use routing::{plan_route, RouteAlgorithm, RoutePlan, RoutePlanner, RouteRequest};
