//! Core road network data structures.

use std::fmt;

use sr_core::{NodeId, Real, SrError, ensure_distance};
use tracing::debug;

use crate::dijkstra::{self, Route};
use crate::error::{GraphError, GraphResult};
use crate::registry::LocationRegistry;
use crate::validate;

/// One half of a road as seen from one endpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjacencyEntry {
    pub neighbor: NodeId,
    pub weight: Real,
}

/// A submitted road, recorded once in submission order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Road {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: Real,
}

/// A location and its roads, resolved to labels for display.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LocationAdjacency {
    pub location: String,
    pub roads: Vec<(String, Real)>,
}

impl fmt::Display for LocationAdjacency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.location)?;
        for (i, (neighbor, weight)) in self.roads.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} ({})", neighbor, weight)?;
        }
        Ok(())
    }
}

/// The road network: an undirected, weighted multigraph keyed by location label.
///
/// The network stores:
/// - The location registry (label <-> `NodeId`).
/// - Per-location adjacency lists, indexed by `NodeId`, in insertion order.
/// - The log of submitted roads.
///
/// Every road is stored on both endpoints. Parallel roads are kept as-is.
#[derive(Debug, Clone, Default)]
pub struct RoadNetwork {
    pub(crate) registry: LocationRegistry,
    pub(crate) adjacency: Vec<Vec<AdjacencyEntry>>,
    pub(crate) roads: Vec<Road>,
}

impl RoadNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an undirected road between `from` and `to`.
    ///
    /// Both labels must be non-empty and `weight` must be finite and >= 0.
    /// Nothing is registered or appended unless every check passes.
    /// Returns the ids of both endpoints.
    pub fn add_road(
        &mut self,
        from: &str,
        to: &str,
        weight: Real,
    ) -> GraphResult<(NodeId, NodeId)> {
        if from.is_empty() {
            return Err(GraphError::EmptyLabel { role: "Source" });
        }
        if to.is_empty() {
            return Err(GraphError::EmptyLabel {
                role: "Destination",
            });
        }
        let weight = ensure_distance(weight, "road distance").map_err(|err| match err {
            SrError::Negative { value, .. } => GraphError::NegativeWeight { value },
            _ => GraphError::NonFiniteWeight { value: weight },
        })?;

        let from_id = self.registry.get_or_create(from);
        let to_id = self.registry.get_or_create(to);
        if self.adjacency.len() < self.registry.len() {
            self.adjacency.resize_with(self.registry.len(), Vec::new);
        }

        self.adjacency[from_id.index() as usize].push(AdjacencyEntry {
            neighbor: to_id,
            weight,
        });
        self.adjacency[to_id.index() as usize].push(AdjacencyEntry {
            neighbor: from_id,
            weight,
        });
        self.roads.push(Road {
            from: from_id,
            to: to_id,
            weight,
        });

        debug!(from, to, weight, roads = self.roads.len(), "road added");
        Ok((from_id, to_id))
    }

    pub fn registry(&self) -> &LocationRegistry {
        &self.registry
    }

    pub fn location_count(&self) -> usize {
        self.registry.len()
    }

    /// Number of submitted roads (parallel roads counted individually).
    pub fn road_count(&self) -> usize {
        self.roads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roads.is_empty()
    }

    /// All submitted roads, in submission order.
    pub fn roads(&self) -> &[Road] {
        &self.roads
    }

    /// Adjacency entries of a location (empty if the ID is unknown).
    pub fn neighbors(&self, id: NodeId) -> &[AdjacencyEntry] {
        self.adjacency
            .get(id.index() as usize)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn neighbors_of(&self, label: &str) -> GraphResult<&[AdjacencyEntry]> {
        let id = self.registry.id(label)?;
        Ok(self.neighbors(id))
    }

    /// The current network, one row per location in registration order.
    pub fn adjacency_listing(&self) -> GraphResult<Vec<LocationAdjacency>> {
        self.registry
            .iter()
            .map(|(id, location)| {
                let roads = self
                    .neighbors(id)
                    .iter()
                    .map(|entry| {
                        let label = self.registry.label_of(entry.neighbor)?;
                        Ok((label.to_owned(), entry.weight))
                    })
                    .collect::<GraphResult<Vec<_>>>()?;
                Ok(LocationAdjacency {
                    location: location.to_owned(),
                    roads,
                })
            })
            .collect()
    }

    /// Shortest route between two registered labels.
    pub fn shortest_path(&self, start: &str, end: &str) -> GraphResult<Route> {
        let start_id = self.registry.id(start)?;
        let end_id = self.registry.id(end)?;
        dijkstra::shortest_path(self, start_id, end_id)
    }

    /// Check that every road is mirrored on both endpoints.
    pub fn validate(&self) -> GraphResult<()> {
        validate::validate_symmetry(&self.registry, &self.adjacency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_road_is_symmetric() {
        let mut network = RoadNetwork::new();
        let (a, b) = network.add_road("A", "B", 4.5).unwrap();

        assert_eq!(
            network.neighbors(a),
            [AdjacencyEntry {
                neighbor: b,
                weight: 4.5
            }]
        );
        assert_eq!(
            network.neighbors(b),
            [AdjacencyEntry {
                neighbor: a,
                weight: 4.5
            }]
        );
        assert_eq!(network.location_count(), 2);
        assert_eq!(network.road_count(), 1);
        assert!(network.validate().is_ok());
    }

    #[test]
    fn parallel_roads_accumulate() {
        let mut network = RoadNetwork::new();
        network.add_road("A", "B", 5.0).unwrap();
        network.add_road("A", "B", 2.0).unwrap();

        let weights: Vec<Real> = network
            .neighbors_of("A")
            .unwrap()
            .iter()
            .map(|e| e.weight)
            .collect();
        assert_eq!(weights, [5.0, 2.0]);
        assert_eq!(network.neighbors_of("B").unwrap().len(), 2);
        assert_eq!(network.road_count(), 2);
    }

    #[test]
    fn self_loop_adds_two_entries() {
        let mut network = RoadNetwork::new();
        let (a, _) = network.add_road("A", "A", 1.0).unwrap();
        assert_eq!(network.location_count(), 1);
        assert_eq!(network.neighbors(a).len(), 2);
        assert!(network.neighbors(a).iter().all(|e| e.neighbor == a));
        assert!(network.validate().is_ok());
    }

    #[test]
    fn rejected_roads_leave_network_untouched() {
        let mut network = RoadNetwork::new();
        network.add_road("A", "B", 1.0).unwrap();

        assert_eq!(
            network.add_road("", "C", 1.0),
            Err(GraphError::EmptyLabel { role: "Source" })
        );
        assert_eq!(
            network.add_road("C", "", 1.0),
            Err(GraphError::EmptyLabel {
                role: "Destination"
            })
        );
        assert_eq!(
            network.add_road("C", "D", -3.0),
            Err(GraphError::NegativeWeight { value: -3.0 })
        );
        assert!(matches!(
            network.add_road("C", "D", Real::NAN),
            Err(GraphError::NonFiniteWeight { .. })
        ));
        assert!(matches!(
            network.add_road("C", "D", Real::INFINITY),
            Err(GraphError::NonFiniteWeight { .. })
        ));

        assert_eq!(network.location_count(), 2);
        assert_eq!(network.road_count(), 1);
        assert!(!network.registry().contains("C"));
    }

    #[test]
    fn adjacency_listing_in_registration_order() {
        let mut network = RoadNetwork::new();
        network.add_road("B", "A", 1.0).unwrap();
        network.add_road("B", "C", 2.5).unwrap();

        let listing = network.adjacency_listing().unwrap();
        let rows: Vec<String> = listing.iter().map(ToString::to_string).collect();
        assert_eq!(rows, ["B: A (1), C (2.5)", "A: B (1)", "C: B (2.5)"]);
    }

    #[test]
    fn unknown_labels_are_reported() {
        let network = RoadNetwork::new();
        assert!(matches!(
            network.neighbors_of("nowhere"),
            Err(GraphError::UnknownLocation { .. })
        ));
        assert!(network.neighbors(NodeId::from_index(3)).is_empty());
        assert!(network.is_empty());
    }
}
