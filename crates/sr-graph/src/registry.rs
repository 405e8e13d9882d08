//! Location registry.
//!
//! Provides bidirectional mappings between free-form location labels and the
//! contiguous `NodeId`s used by the adjacency store (0..N, registration order).

use std::collections::HashMap;

use sr_core::NodeId;

use crate::error::{GraphError, GraphResult};

/// Every location label ever introduced, with O(1) lookup both ways.
///
/// Labels are compared by exact string equality. Entries are never removed.
#[derive(Debug, Clone, Default)]
pub struct LocationRegistry {
    /// Contiguous list of labels (index -> label).
    labels: Vec<String>,

    /// Reverse lookup: label -> NodeId.
    by_label: HashMap<String, NodeId>,
}

impl LocationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the id for `label`, registering it first if it is new.
    pub fn get_or_create(&mut self, label: &str) -> NodeId {
        if let Some(&id) = self.by_label.get(label) {
            return id;
        }
        let id = NodeId::from_index(self.labels.len() as u32);
        self.labels.push(label.to_owned());
        self.by_label.insert(label.to_owned(), id);
        id
    }

    /// Id of an already registered label.
    pub fn lookup(&self, label: &str) -> Option<NodeId> {
        self.by_label.get(label).copied()
    }

    /// Like [`lookup`](Self::lookup) but reports unknown labels as an error.
    pub fn id(&self, label: &str) -> GraphResult<NodeId> {
        self.lookup(label)
            .ok_or_else(|| GraphError::UnknownLocation {
                label: label.to_owned(),
            })
    }

    pub fn label(&self, id: NodeId) -> Option<&str> {
        self.labels.get(id.index() as usize).map(String::as_str)
    }

    pub fn label_of(&self, id: NodeId) -> GraphResult<&str> {
        self.label(id).ok_or(GraphError::IdNotFound { id })
    }

    pub fn contains(&self, label: &str) -> bool {
        self.by_label.contains_key(label)
    }

    /// Number of registered locations.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Labels in registration order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Labels in lexicographic order, as offered by the source/destination pickers.
    pub fn sorted_labels(&self) -> Vec<&str> {
        let mut sorted: Vec<&str> = self.labels.iter().map(String::as_str).collect();
        sorted.sort_unstable();
        sorted
    }

    /// Iterate `(id, label)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &str)> + '_ {
        self.labels
            .iter()
            .enumerate()
            .map(|(i, label)| (NodeId::from_index(i as u32), label.as_str()))
    }
}
