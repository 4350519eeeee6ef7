use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId};
use crate::path::{Path, PathArena, PathId};
use crate::point::Point;

#[derive(Debug, Clone, Copy)]
struct FrontierEntry {
    path: PathId,
    weight: f64,
}

/// Single-source, single-destination shortest-path search bound to a graph.
///
/// The frontier is kept as a flat list that is re-sorted ascending by
/// cumulative weight on every insertion. The sort is stable, so equal-weight
/// candidates dequeue in insertion order; callers relying on which of two
/// equal-weight routes is returned get a deterministic answer.
///
/// Each invocation is independent: frontier, visited set, and path storage
/// are reset at the start of every call. A search instance must not be
/// invoked concurrently.
pub struct ShortestPathSearch<'g> {
    graph: &'g Graph,
    frontier: Vec<FrontierEntry>,
    visited: HashSet<NodeId>,
    paths: PathArena,
}

impl<'g> ShortestPathSearch<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            frontier: Vec::new(),
            visited: HashSet::new(),
            paths: PathArena::new(),
        }
    }

    /// Run Dijkstra's algorithm from `start` to `end`, both resolved by name.
    ///
    /// Returns the terminal [`Path`]; walk its chain (or call
    /// [`Path::route`]) for the full ordered route. Fails with
    /// [`Error::UnknownNode`] when either name is unresolved and
    /// [`Error::NoRoute`] when the frontier empties without reaching the end
    /// node.
    pub fn shortest_path(&mut self, start: &str, end: &str) -> Result<Path<'_>> {
        self.frontier.clear();
        self.visited.clear();
        self.paths.clear();

        let graph = self.graph;
        let start_id = resolve(graph, start)?;
        let end_id = resolve(graph, end)?;

        let seed = self.paths.start(start_id);
        self.insert(seed);
        debug!(start, end, "seeded shortest-path frontier");

        while !self.frontier.is_empty() {
            let entry = self.frontier.remove(0);
            let current = self.paths.get(entry.path).node();
            if self.visited.contains(&current) {
                continue;
            }
            if current == end_id {
                debug!(weight = entry.weight, "shortest path found");
                return Ok(self.paths.get(entry.path));
            }
            // Finalize before expanding so cycles cannot re-enqueue forever.
            self.visited.insert(current);
            trace!(?current, weight = entry.weight, "expanding node");

            // A destination outside the graph has no adjacency to expand.
            let Some(node) = graph.node_by_id(current) else {
                continue;
            };
            for edge in node.outgoing() {
                if self.visited.contains(&edge.destination()) {
                    continue;
                }
                let extended = self.paths.extend(entry.path, edge);
                self.insert(extended);
            }
        }

        debug!(start, end, "frontier exhausted without reaching end node");
        Err(Error::NoRoute {
            start: start.to_string(),
            goal: end.to_string(),
        })
    }

    fn insert(&mut self, path: PathId) {
        let weight = self.paths.get(path).cumulative_weight();
        self.frontier.push(FrontierEntry { path, weight });
        // Stable sort: ties keep their relative insertion order.
        self.frontier
            .sort_by(|a, b| a.weight.total_cmp(&b.weight));
    }
}

/// Planned route returned to consumers that outlive the search borrow.
#[derive(Debug, Clone, Serialize)]
pub struct RouteSummary {
    pub start: NodeId,
    pub goal: NodeId,
    pub steps: Vec<NodeId>,
    pub total_weight: f64,
}

impl RouteSummary {
    /// Snapshot a successful search result into an owned summary.
    pub fn from_path(path: &Path<'_>) -> Self {
        let steps = path.route();
        let goal = path.node();
        let start = steps.first().copied().unwrap_or(goal);
        Self {
            start,
            goal,
            steps,
            total_weight: path.cumulative_weight(),
        }
    }

    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// Ordered positions along the route, for rendering collaborators.
    ///
    /// Steps whose node is no longer a member of the graph are skipped.
    pub fn points(&self, graph: &Graph) -> Vec<Point> {
        self.steps
            .iter()
            .filter_map(|&id| graph.node_by_id(id))
            .map(|node| node.position())
            .collect()
    }
}

fn resolve(graph: &Graph, name: &str) -> Result<NodeId> {
    graph
        .node_by_name(name)
        .map(|node| node.id())
        .ok_or_else(|| Error::UnknownNode {
            name: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Node;

    #[test]
    fn route_summary_hop_count() {
        let mut graph = Graph::new();
        graph.add_node(Node::new("A", Point::new(0.0, 0.0)));
        graph.add_node(Node::new("B", Point::new(1.0, 0.0)));
        graph.add_edge_between("A", "B");

        let mut search = ShortestPathSearch::new(&graph);
        let path = search.shortest_path("A", "B").expect("route exists");
        let summary = RouteSummary::from_path(&path);
        assert_eq!(summary.hop_count(), 1);
        assert_eq!(summary.total_weight, 1.0);
    }

    #[test]
    fn route_summary_of_start_only_path() {
        let mut graph = Graph::new();
        graph.add_node(Node::new("A", Point::new(0.0, 0.0)));

        let mut search = ShortestPathSearch::new(&graph);
        let path = search.shortest_path("A", "A").expect("trivial route");
        let summary = RouteSummary::from_path(&path);
        assert_eq!(summary.start, summary.goal);
        assert_eq!(summary.hop_count(), 0);
        assert_eq!(summary.total_weight, 0.0);
    }
}
