//! Low-level graph storage for diagram validation.
//!
//! This module provides the minimal directed-graph structure that backs
//! [`DiagramGraph`](super::DiagramGraph). It stores nodes by [`Id`] and
//! edges as an ordered list, and rejects rather than panics on invalid
//! input: inserting a duplicate node or an edge with a missing endpoint is
//! reported to the caller, because those conditions are diagram
//! declaration errors, not programming bugs.

use std::collections::HashMap;

use archmap_core::identifier::Id;

/// Core graph data structure.
///
/// The graph is directed, keeps edges in insertion order, and allows
/// multiple edges between the same pair of nodes. Edge payloads carry
/// their own endpoint references; the graph only checks them against the
/// node set when an edge is added.
///
/// Type parameters:
/// - `N`: Node data type (must be Copy and Debug)
/// - `E`: Edge data type (must be Copy and Debug)
#[derive(Debug)]
pub(super) struct GraphInternal<N, E>
where
    N: Copy + std::fmt::Debug,
    E: Copy + std::fmt::Debug,
{
    nodes: HashMap<Id, N>,
    edges: Vec<E>,
}

impl<N, E> GraphInternal<N, E>
where
    N: Copy + std::fmt::Debug,
    E: Copy + std::fmt::Debug,
{
    /// Creates a new empty graph.
    pub(super) fn new() -> Self {
        GraphInternal {
            nodes: HashMap::new(),
            edges: Vec::new(),
        }
    }

    /// Returns the node data for the given ID, if it exists.
    pub(super) fn node(&self, id: Id) -> Option<N> {
        self.nodes.get(&id).copied()
    }

    /// Returns the total number of nodes in the graph.
    pub(super) fn nodes_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the total number of edges in the graph.
    pub(super) fn edges_count(&self) -> usize {
        self.edges.len()
    }

    /// Checks if a node with the given ID exists in the graph.
    pub(super) fn contains_node(&self, id: Id) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Returns an iterator over all edge data, in insertion order.
    pub(super) fn edges(&self) -> impl Iterator<Item = E> {
        self.edges.iter().copied()
    }

    /// Adds a node to the graph with the given ID and data.
    ///
    /// Returns `false` if a node with the same ID was already present;
    /// the existing node is left untouched in that case.
    pub(super) fn add_node(&mut self, id: Id, node: N) -> bool {
        use std::collections::hash_map::Entry;

        match self.nodes.entry(id) {
            Entry::Occupied(_) => false,
            Entry::Vacant(vacant) => {
                vacant.insert(node);
                true
            }
        }
    }

    /// Adds a directed edge between two existing nodes.
    ///
    /// Returns the ID of the first missing endpoint as `Err` when either
    /// endpoint has not been declared; the edge is not stored in that case.
    pub(super) fn add_edge(&mut self, source_id: Id, target_id: Id, edge: E) -> Result<(), Id> {
        if !self.contains_node(source_id) {
            return Err(source_id);
        }
        if !self.contains_node(target_id) {
            return Err(target_id);
        }

        self.edges.push(edge);
        Ok(())
    }
}
