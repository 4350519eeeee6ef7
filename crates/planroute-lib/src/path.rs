use crate::graph::{Edge, NodeId};

/// Handle to a path record inside a [`PathArena`].
///
/// Ids are only meaningful against the arena that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathId(usize);

#[derive(Debug, Clone)]
struct PathRecord {
    node: NodeId,
    previous: Option<PathId>,
    cumulative_weight: f64,
}

/// Arena of backward-linked path records.
///
/// Each record is the terminal hop of a route prefix and stores the id of its
/// predecessor, so extending a path never copies the prefix and the chain is
/// acyclic by construction. Records are immutable once created.
#[derive(Debug, Clone, Default)]
pub struct PathArena {
    records: Vec<PathRecord>,
}

impl PathArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all records, invalidating previously issued ids.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Record a length-zero path consisting only of `node`.
    pub fn start(&mut self, node: NodeId) -> PathId {
        self.push(PathRecord {
            node,
            previous: None,
            cumulative_weight: 0.0,
        })
    }

    /// Record the path obtained by extending `prefix` across `edge`.
    pub fn extend(&mut self, prefix: PathId, edge: &Edge) -> PathId {
        let cumulative_weight = self.record(prefix).cumulative_weight + edge.weight();
        self.push(PathRecord {
            node: edge.destination(),
            previous: Some(prefix),
            cumulative_weight,
        })
    }

    /// View of the path terminating at `id`.
    pub fn get(&self, id: PathId) -> Path<'_> {
        Path { arena: self, id }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn push(&mut self, record: PathRecord) -> PathId {
        self.records.push(record);
        PathId(self.records.len() - 1)
    }

    fn record(&self, id: PathId) -> &PathRecord {
        &self.records[id.0]
    }
}

/// Borrowed view of one path chain inside a [`PathArena`].
#[derive(Debug, Clone, Copy)]
pub struct Path<'a> {
    arena: &'a PathArena,
    id: PathId,
}

impl<'a> Path<'a> {
    pub fn id(&self) -> PathId {
        self.id
    }

    /// Terminal node of this path.
    pub fn node(&self) -> NodeId {
        self.arena.record(self.id).node
    }

    /// Total weight accumulated from the start node to the terminal node.
    pub fn cumulative_weight(&self) -> f64 {
        self.arena.record(self.id).cumulative_weight
    }

    /// The prefix this path extends, or `None` for a start path.
    pub fn previous(&self) -> Option<Path<'a>> {
        self.arena
            .record(self.id)
            .previous
            .map(|id| self.arena.get(id))
    }

    /// Reconstruct the full route by walking the chain back to its start.
    pub fn route(&self) -> Vec<NodeId> {
        let mut nodes = Vec::new();
        let mut current = Some(self.id);
        while let Some(id) = current {
            let record = self.arena.record(id);
            nodes.push(record.node);
            current = record.previous;
        }
        nodes.reverse();
        nodes
    }
}
