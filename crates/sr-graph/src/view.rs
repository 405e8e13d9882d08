//! Render-ready view of the road network.
//!
//! Collapses parallel roads into one edge per location pair and marks the
//! edges a route actually travels.

use std::collections::HashMap;

use sr_core::{NodeId, Real};

use crate::dijkstra::Route;
use crate::error::GraphResult;
use crate::graph::RoadNetwork;

/// One drawable edge: every road between the same two locations.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ViewEdge {
    pub from: String,
    pub to: String,
    /// Parallel road distances in submission order.
    pub weights: Vec<Real>,
    pub on_path: bool,
}

impl ViewEdge {
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }

    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NetworkView {
    /// Locations in registration order.
    pub locations: Vec<String>,
    /// Edges in order of first submission.
    pub edges: Vec<ViewEdge>,
}

impl NetworkView {
    /// The whole network with nothing highlighted.
    pub fn full(network: &RoadNetwork) -> GraphResult<Self> {
        let registry = network.registry();
        let mut slots: HashMap<(NodeId, NodeId), usize> = HashMap::new();
        let mut edges: Vec<ViewEdge> = Vec::new();

        for road in network.roads() {
            let key = if road.from <= road.to {
                (road.from, road.to)
            } else {
                (road.to, road.from)
            };
            match slots.get(&key) {
                Some(&slot) => edges[slot].weights.push(road.weight),
                None => {
                    slots.insert(key, edges.len());
                    edges.push(ViewEdge {
                        from: registry.label_of(road.from)?.to_owned(),
                        to: registry.label_of(road.to)?.to_owned(),
                        weights: vec![road.weight],
                        on_path: false,
                    });
                }
            }
        }

        Ok(Self {
            locations: registry.labels().to_vec(),
            edges,
        })
    }

    /// The whole network with the edges travelled by `route` marked.
    ///
    /// An edge is on the path only when its endpoints are neighbours in the
    /// route; a road linking two route locations that the route skips over
    /// stays unmarked.
    pub fn highlighted(network: &RoadNetwork, route: &Route) -> GraphResult<Self> {
        let mut view = Self::full(network)?;
        for edge in &mut view.edges {
            edge.on_path = route.contains_step(&edge.from, &edge.to);
        }
        Ok(view)
    }

    /// Marked edges, in the order the route travels them.
    pub fn path_edges<'a>(&'a self, route: &Route) -> Vec<&'a ViewEdge> {
        route
            .path
            .windows(2)
            .filter_map(|step| {
                self.edges
                    .iter()
                    .find(|e| e.on_path && e.connects(&step[0], &step[1]))
            })
            .collect()
    }

    pub fn on_path_count(&self) -> usize {
        self.edges.iter().filter(|e| e.on_path).count()
    }
}
