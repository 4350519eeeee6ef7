use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use crate::point::Point;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

fn next_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Stable identity of a node, assigned at construction.
///
/// Two nodes with the same name are still distinct entities; membership
/// checks throughout the library (edge attachment, removal, the search's
/// visited set) compare ids, never names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(u64);

/// Stable identity of an edge, assigned at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct EdgeId(u64);

/// Directed, weighted connection between two nodes.
///
/// The weight is derived from the endpoint positions when the edge is
/// constructed and never recomputed; an edge does not track later changes to
/// its endpoints.
#[derive(Debug, Clone)]
pub struct Edge {
    id: EdgeId,
    source: NodeId,
    destination: NodeId,
    destination_name: String,
    weight: f64,
}

impl Edge {
    /// Construct an edge from `source` to `destination`, weighted by the
    /// planar distance between their positions.
    pub fn between(source: &Node, destination: &Node) -> Self {
        Self {
            id: EdgeId(next_id()),
            source: source.id,
            destination: destination.id,
            destination_name: destination.name.clone(),
            weight: source.position.distance(&destination.position),
        }
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn destination(&self) -> NodeId {
        self.destination
    }

    /// Name of the destination node at the time the edge was constructed.
    pub fn destination_name(&self) -> &str {
        &self.destination_name
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// Named vertex with a planar position and an ordered list of outgoing edges.
#[derive(Debug, Clone)]
pub struct Node {
    id: NodeId,
    name: String,
    position: Point,
    outgoing: Vec<Edge>,
}

impl Node {
    pub fn new(name: impl Into<String>, position: Point) -> Self {
        Self {
            id: NodeId(next_id()),
            name: name.into(),
            position,
            outgoing: Vec::new(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Outgoing edges in insertion order.
    pub fn outgoing(&self) -> &[Edge] {
        &self.outgoing
    }

    /// Append an edge whose source is this node.
    ///
    /// Edges declared against a different source are dropped, as is an edge
    /// that is already present.
    pub fn add_edge(&mut self, edge: Edge) {
        if edge.source != self.id {
            return;
        }
        if self.outgoing.iter().any(|existing| existing.id == edge.id) {
            return;
        }
        self.outgoing.push(edge);
    }

    /// Remove the first outgoing edge matching by identity; no-op if absent.
    pub fn remove_edge(&mut self, edge: &Edge) {
        if let Some(index) = self.outgoing.iter().position(|e| e.id == edge.id) {
            self.outgoing.remove(index);
        }
    }

    /// Construct and append an edge from this node to `destination`.
    pub fn add_edge_to(&mut self, destination: &Node) {
        let edge = Edge::between(self, destination);
        self.outgoing.push(edge);
    }

    /// Remove every outgoing edge whose destination is `destination`.
    pub fn remove_edge_to(&mut self, destination: &Node) {
        self.remove_edges_to_id(destination.id);
    }

    pub(crate) fn remove_edges_to_id(&mut self, destination: NodeId) {
        self.outgoing.retain(|edge| edge.destination != destination);
    }

    /// First outgoing edge leading to `destination`, if any.
    pub fn edge_to(&self, destination: &Node) -> Option<&Edge> {
        self.outgoing
            .iter()
            .find(|edge| edge.destination == destination.id)
    }

    /// First outgoing edge whose destination carries the given name.
    pub fn edge_to_name(&self, name: &str) -> Option<&Edge> {
        self.outgoing
            .iter()
            .find(|edge| edge.destination_name == name)
    }

    pub fn edge_count(&self) -> usize {
        self.outgoing.len()
    }
}

/// Owning collection of nodes, keyed by unique name.
///
/// Nodes keep their insertion order; replacing a node by name keeps the
/// original's ordinal position.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Insert a node. A node whose name is already present replaces the
    /// existing entry in place, including its identity and edges.
    pub fn add_node(&mut self, node: Node) {
        match self
            .nodes
            .iter()
            .position(|existing| existing.name == node.name)
        {
            Some(index) => self.nodes[index] = node,
            None => self.nodes.push(node),
        }
    }

    /// Remove a node by identity; no-op if absent.
    pub fn remove_node(&mut self, node: &Node) {
        self.nodes.retain(|existing| existing.id != node.id);
    }

    /// Remove any node carrying the given name; no-op if absent.
    pub fn remove_node_by_name(&mut self, name: &str) {
        self.nodes.retain(|existing| existing.name != name);
    }

    /// Lookup a node by its case-sensitive name.
    pub fn node_by_name(&self, name: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.name == name)
    }

    pub fn node_by_name_mut(&mut self, name: &str) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|node| node.name == name)
    }

    /// Lookup a node by identity.
    pub fn node_by_id(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Attach an edge to its source node.
    ///
    /// The edge is silently discarded when the exact source node is not a
    /// member of this graph. The destination is not checked; an edge may lead
    /// to a node outside the graph.
    pub fn add_edge(&mut self, edge: Edge) {
        if let Some(node) = self.nodes.iter_mut().find(|node| node.id == edge.source) {
            node.add_edge(edge);
        }
    }

    /// Resolve both names and attach a new edge between them.
    ///
    /// A silent no-op when either name is unresolved.
    pub fn add_edge_between(&mut self, from: &str, to: &str) {
        let Some(source) = self.node_by_name(from) else {
            return;
        };
        let Some(destination) = self.node_by_name(to) else {
            return;
        };
        let edge = Edge::between(source, destination);
        self.add_edge(edge);
    }

    /// Remove the edge from whichever node owns it; no-op everywhere else.
    pub fn remove_edge(&mut self, edge: &Edge) {
        for node in &mut self.nodes {
            node.remove_edge(edge);
        }
    }

    /// Resolve both names and remove every edge between them.
    ///
    /// A silent no-op when either name is unresolved.
    pub fn remove_edge_between(&mut self, from: &str, to: &str) {
        let Some(destination) = self.node_by_name(to).map(Node::id) else {
            return;
        };
        if let Some(source) = self.node_by_name_mut(from) {
            source.remove_edges_to_id(destination);
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total number of edges across all nodes.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(Node::edge_count).sum()
    }
}
