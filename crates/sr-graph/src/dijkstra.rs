//! Shortest routes over the road network.
//!
//! Lazy-deletion Dijkstra: states are pushed without decrease-key, and stale
//! entries for already finalized locations are skipped when popped. Requires
//! non-negative weights, which `RoadNetwork::add_road` enforces.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};
use std::fmt;

use sr_core::{NodeId, Real, UNREACHABLE, cmp_distance};
use tracing::{debug, trace};

use crate::error::{GraphError, GraphResult};
use crate::graph::RoadNetwork;

/// Result of a shortest-route query.
///
/// A disconnected pair yields `distance == UNREACHABLE` (infinity) and an
/// empty path.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Route {
    pub distance: Real,
    pub path: Vec<String>,
}

impl Route {
    pub fn unreachable() -> Self {
        Self {
            distance: UNREACHABLE,
            path: Vec::new(),
        }
    }

    pub fn is_reachable(&self) -> bool {
        self.distance.is_finite()
    }

    /// Number of roads travelled.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// First position of `label` in the path.
    pub fn position(&self, label: &str) -> Option<usize> {
        self.path.iter().position(|p| p == label)
    }

    /// True if `a` and `b` sit next to each other in the path (either direction).
    pub fn contains_step(&self, a: &str, b: &str) -> bool {
        match (self.position(a), self.position(b)) {
            (Some(i), Some(j)) => i.abs_diff(j) == 1,
            _ => false,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.join(" → "))
    }
}

/// Tentative state in the priority queue.
///
/// Ordered by distance, then location label, then the predecessor's label,
/// and reversed so that `BinaryHeap` pops the smallest.
#[derive(Debug)]
struct State<'a> {
    distance: Real,
    label: &'a str,
    node: NodeId,
    via: Option<NodeId>,
    via_label: Option<&'a str>,
}

impl Ord for State<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_distance(other.distance, self.distance)
            .then_with(|| other.label.cmp(self.label))
            .then_with(|| other.via_label.cmp(&self.via_label))
    }
}

impl PartialOrd for State<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for State<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State<'_> {}

/// Shortest route from `start` to `end`.
///
/// Returns `Route::unreachable()` when the queue runs dry before `end` is
/// finalized. Fails if an id is not registered in `network`, or with
/// `GraphError::DistanceOverflow` when `end` is connected but every route
/// to it sums to infinity.
pub fn shortest_path(network: &RoadNetwork, start: NodeId, end: NodeId) -> GraphResult<Route> {
    let registry = network.registry();
    let start_label = registry.label_of(start)?;
    let end_label = registry.label_of(end)?;

    let n = registry.len();
    let mut finalized = vec![false; n];
    let mut parent: Vec<Option<NodeId>> = vec![None; n];
    let mut heap = BinaryHeap::new();
    let mut stale = 0usize;
    let mut overflowed = false;

    heap.push(State {
        distance: 0.0,
        label: start_label,
        node: start,
        via: None,
        via_label: None,
    });

    while let Some(State {
        distance,
        label,
        node,
        via,
        ..
    }) = heap.pop()
    {
        let idx = node.index() as usize;
        if finalized[idx] {
            stale += 1;
            continue;
        }
        finalized[idx] = true;
        parent[idx] = via;
        trace!(location = label, distance, "finalized");

        if node == end {
            let path = rebuild_path(network, &parent, end)?;
            debug!(
                from = start_label,
                hops = path.len().saturating_sub(1),
                distance,
                stale,
                "route found"
            );
            return Ok(Route { distance, path });
        }

        for entry in network.neighbors(node) {
            if finalized[entry.neighbor.index() as usize] {
                continue;
            }
            let next = distance + entry.weight;
            if !next.is_finite() {
                overflowed = true;
                continue;
            }
            heap.push(State {
                distance: next,
                label: registry.label_of(entry.neighbor)?,
                node: entry.neighbor,
                via: Some(node),
                via_label: Some(label),
            });
        }
    }

    if overflowed && connected(network, start, end) {
        debug!(from = start_label, to = end_label, "route distance overflowed");
        return Err(GraphError::DistanceOverflow {
            from: start_label.to_owned(),
            to: end_label.to_owned(),
        });
    }

    debug!(from = start_label, stale, "no route");
    Ok(Route::unreachable())
}

/// Weight-blind reachability.
fn connected(network: &RoadNetwork, start: NodeId, end: NodeId) -> bool {
    let mut seen = vec![false; network.location_count()];
    let mut queue = VecDeque::from([start]);
    seen[start.index() as usize] = true;
    while let Some(node) = queue.pop_front() {
        if node == end {
            return true;
        }
        for entry in network.neighbors(node) {
            let idx = entry.neighbor.index() as usize;
            if !seen[idx] {
                seen[idx] = true;
                queue.push_back(entry.neighbor);
            }
        }
    }
    false
}

/// Walk the predecessor chain back from `end` and resolve labels.
fn rebuild_path(
    network: &RoadNetwork,
    parent: &[Option<NodeId>],
    end: NodeId,
) -> GraphResult<Vec<String>> {
    let registry = network.registry();
    let mut path = Vec::new();
    let mut cur = Some(end);
    while let Some(id) = cur {
        path.push(registry.label_of(id)?.to_owned());
        cur = parent[id.index() as usize];
    }
    path.reverse();
    Ok(path)
}
