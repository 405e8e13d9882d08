//! sr-graph: road network layer for shortroute.
//!
//! Provides:
//! - The location registry (label <-> compact id)
//! - The undirected road network with symmetric adjacency
//! - Shortest routes via lazy-deletion Dijkstra
//! - A render-ready view with route highlighting
//!
//! # Example
//!
//! ```
//! use sr_graph::RoadNetwork;
//!
//! let mut network = RoadNetwork::new();
//! network.add_road("A", "B", 1.0).unwrap();
//! network.add_road("B", "C", 2.0).unwrap();
//! network.add_road("A", "C", 10.0).unwrap();
//!
//! let route = network.shortest_path("A", "C").unwrap();
//! assert_eq!(route.distance, 3.0);
//! assert_eq!(route.path, ["A", "B", "C"]);
//! ```

pub mod dijkstra;
pub mod error;
pub mod graph;
pub mod registry;
pub(crate) mod validate;
pub mod view;

// Re-exports for ergonomics
pub use dijkstra::{Route, shortest_path};
pub use error::{GraphError, GraphResult};
pub use graph::{AdjacencyEntry, LocationAdjacency, Road, RoadNetwork};
pub use registry::LocationRegistry;
pub use view::{NetworkView, ViewEdge};
