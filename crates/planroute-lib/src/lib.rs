//! Planroute library entry points.
//!
//! This crate provides the routing core used by map-view consumers: a
//! weighted, directed graph over planar points and a single-source,
//! single-destination shortest-path search. Projection from geographic
//! coordinates and rendering of the resulting route are the responsibility of
//! higher-level consumers; they should only depend on the types exported
//! here.
//!

#![deny(warnings)]

pub mod error;
pub mod graph;
pub mod path;
pub mod point;
pub mod search;

pub use error::{Error, Result};
pub use graph::{Edge, EdgeId, Graph, Node, NodeId};
pub use path::{Path, PathArena, PathId};
pub use point::Point;
pub use search::{RouteSummary, ShortestPathSearch};
