use std::cmp::Ordering;

use tracing::debug;

use crate::error::{Error, Result};
use crate::position::Position;

/// Index of a node, assigned sequentially from zero in insertion order.
pub type NodeId = usize;

/// Index of an edge in the graph's edge arena.
pub type EdgeId = usize;

/// Vertex of the path-finding graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    index: NodeId,
    position: Position,
    cost: f64,
    outgoing: Vec<EdgeId>,
}

impl Node {
    pub fn index(&self) -> NodeId {
        self.index
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Intrinsic traversal cost. Stored for callers; path search only sums
    /// edge costs.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Ids of the edges leaving this node, cheapest first once the graph
    /// has been built.
    pub fn outgoing_edges(&self) -> &[EdgeId] {
        &self.outgoing
    }
}

/// Directed, weighted connection between two nodes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    from: NodeId,
    to: NodeId,
    cost: f64,
}

impl Edge {
    pub fn from(&self) -> NodeId {
        self.from
    }

    pub fn to(&self) -> NodeId {
        self.to
    }

    /// Cost multiplier times the distance between the endpoints.
    pub fn cost(&self) -> f64 {
        self.cost
    }
}

/// Graph structure used by the path finder.
///
/// Nodes and edges live in two flat arenas; each node refers to its
/// outgoing edges by [`EdgeId`]. All nodes must be added before the first
/// edge, and neither may be added once [`Graph::build`] has run.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    built: bool,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node and return its index.
    pub fn add_node(&mut self, position: Position, cost: f64) -> Result<NodeId> {
        if self.built {
            return Err(Error::InvalidState {
                operation: "add node",
                reason: "graph has already been built",
            });
        }
        if !self.edges.is_empty() {
            return Err(Error::InvalidState {
                operation: "add node",
                reason: "edges have already been added",
            });
        }
        ensure_finite_position("node position", position)?;
        if !cost.is_finite() {
            return Err(Error::InvalidArgument {
                name: "node cost",
                value: cost,
                reason: "must be finite",
            });
        }

        let index = self.nodes.len();
        self.nodes.push(Node {
            index,
            position,
            cost,
            outgoing: Vec::new(),
        });
        Ok(index)
    }

    /// Append a directed edge `from -> to` costed as `cost_multiplier`
    /// times the distance between the two node positions.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, cost_multiplier: f64) -> Result<EdgeId> {
        if self.built {
            return Err(Error::InvalidState {
                operation: "add edge",
                reason: "graph has already been built",
            });
        }
        let from_position = self.node(from)?.position;
        let to_position = self.node(to)?.position;
        if !cost_multiplier.is_finite() || cost_multiplier < 0.0 {
            return Err(Error::InvalidArgument {
                name: "cost multiplier",
                value: cost_multiplier,
                reason: "must be finite and non-negative",
            });
        }

        let cost = cost_multiplier * from_position.distance_to(&to_position);
        if !cost.is_finite() {
            return Err(Error::InvalidArgument {
                name: "edge cost",
                value: cost,
                reason: "multiplier times distance must be finite",
            });
        }

        let id = self.edges.len();
        self.edges.push(Edge { from, to, cost });
        self.nodes[from].outgoing.push(id);
        Ok(id)
    }

    /// Sort every node's outgoing edges cheapest first.
    ///
    /// The sort is stable, so equal-cost edges keep insertion order, and
    /// running it again leaves the order unchanged.
    pub fn build(&mut self) {
        let edges = &self.edges;
        for node in &mut self.nodes {
            node.outgoing
                .sort_by(|a, b| compare_cost(edges[*a].cost, edges[*b].cost));
        }
        self.built = true;
        debug!(
            nodes = self.nodes.len(),
            edges = self.edges.len(),
            "graph built"
        );
    }

    /// Alias for [`Graph::build`].
    pub fn optimise(&mut self) {
        self.build();
    }

    pub fn is_built(&self) -> bool {
        self.built
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn node(&self, index: NodeId) -> Result<&Node> {
        self.nodes
            .get(index)
            .ok_or_else(|| Error::node_out_of_range(index, self.nodes.len()))
    }

    pub fn edge(&self, index: EdgeId) -> Result<&Edge> {
        self.edges
            .get(index)
            .ok_or_else(|| Error::edge_out_of_range(index, self.edges.len()))
    }

    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &Node> + '_ {
        self.nodes.iter()
    }

    pub fn edges(&self) -> impl ExactSizeIterator<Item = &Edge> + '_ {
        self.edges.iter()
    }

    /// Edges leaving `index`, in the node's outgoing order.
    pub fn outgoing(&self, index: NodeId) -> Result<impl Iterator<Item = &Edge> + '_> {
        let node = self.node(index)?;
        Ok(node.outgoing.iter().map(move |&id| &self.edges[id]))
    }

    /// Return the node nearest to `query` by Euclidean distance.
    ///
    /// Scans every node; on a tie the earliest inserted node wins.
    pub fn closest_node(&self, query: Position) -> Result<&Node> {
        ensure_finite_position("query position", query)?;

        let mut nodes = self.nodes.iter();
        let mut best = nodes.next().ok_or(Error::EmptyGraph)?;
        let mut best_distance = best.position.distance_to(&query);
        for node in nodes {
            let distance = node.position.distance_to(&query);
            if distance < best_distance {
                best = node;
                best_distance = distance;
            }
        }
        Ok(best)
    }

    /// Neighbours of a node already known to be in range.
    pub(crate) fn neighbours(&self, index: NodeId) -> impl Iterator<Item = &Edge> + '_ {
        self.nodes[index]
            .outgoing
            .iter()
            .map(move |&id| &self.edges[id])
    }
}

fn ensure_finite_position(name: &'static str, position: Position) -> Result<()> {
    match [position.x, position.y, position.z]
        .into_iter()
        .find(|component| !component.is_finite())
    {
        Some(value) => Err(Error::InvalidArgument {
            name,
            value,
            reason: "coordinates must be finite",
        }),
        None => Ok(()),
    }
}

fn compare_cost(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}
