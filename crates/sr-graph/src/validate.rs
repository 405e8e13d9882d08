//! Road network validation logic.

use std::collections::HashMap;

use sr_core::NodeId;

use crate::error::{GraphError, GraphResult};
use crate::graph::AdjacencyEntry;
use crate::registry::LocationRegistry;

/// Validate that every adjacency entry is mirrored on the other endpoint.
///
/// For each unordered pair the multiset of weights seen from one side must
/// equal the multiset seen from the other. A self-loop contributes two
/// identical entries to its own list, so each of its weights must occur an
/// even number of times.
pub(crate) fn validate_symmetry(
    registry: &LocationRegistry,
    adjacency: &[Vec<AdjacencyEntry>],
) -> GraphResult<()> {
    // Every adjacency row must belong to a registered location
    if adjacency.len() > registry.len() {
        return Err(GraphError::IdNotFound {
            id: NodeId::from_index(registry.len() as u32),
        });
    }

    // (from, to, weight bits) -> occurrences
    let mut directed: HashMap<(NodeId, NodeId, u64), usize> = HashMap::new();
    for (i, entries) in adjacency.iter().enumerate() {
        let from = NodeId::from_index(i as u32);
        for entry in entries {
            registry.label_of(entry.neighbor)?;
            *directed
                .entry((from, entry.neighbor, entry.weight.to_bits()))
                .or_default() += 1;
        }
    }

    for (&(from, to, bits), &count) in &directed {
        let balanced = if from == to {
            count % 2 == 0
        } else {
            directed.get(&(to, from, bits)) == Some(&count)
        };
        if !balanced {
            return Err(GraphError::AsymmetricEdge {
                from: registry.label_of(from)?.to_owned(),
                to: registry.label_of(to)?.to_owned(),
                weight: f64::from_bits(bits),
            });
        }
    }

    Ok(())
}
