//! Structural validation of a semantic diagram.
//!
//! A [`Diagram`](archmap_core::semantic::Diagram) is a declaration: an
//! ordered tree of nodes, clusters, and relations. Before anything is
//! exported, the declaration is flattened into a [`DiagramGraph`], which
//! checks the structural invariants the declaration must uphold:
//!
//! - every node ID is declared exactly once, across all cluster scopes;
//! - every relation endpoint refers to a declared node.
//!
//! Validation runs in two passes over the element tree. The first pass
//! registers every node (wherever it is nested) so that the second pass
//! can resolve relation endpoints regardless of declaration order. A
//! relation may therefore legally point at a node declared later in the
//! file, or inside a different cluster.

mod graph_base;

use archmap_core::identifier::Id;
use archmap_core::semantic::{Diagram, Element, Node, Relation, Scope};
use log::debug;

use crate::error::ArchmapError;
use graph_base::GraphInternal;

/// A cluster discovered while flattening the element tree.
///
/// Records where the cluster sits in the containment hierarchy and how
/// many nodes it directly holds. Used for validation reporting and by
/// tests; the exporter walks the semantic tree itself to preserve
/// declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterScope {
    /// The cluster's ID.
    pub id: Id,
    /// ID of the enclosing cluster, or `None` at top level.
    pub container: Option<Id>,
    /// Number of nodes declared directly inside this cluster.
    pub node_count: usize,
}

/// The validated, flattened view of a diagram.
///
/// Holds references into the [`Diagram`] it was built from, so the
/// diagram must outlive it.
#[derive(Debug)]
pub struct DiagramGraph<'a> {
    graph: GraphInternal<&'a Node, &'a Relation>,
    clusters: Vec<ClusterScope>,
}

impl<'a> DiagramGraph<'a> {
    /// Validates `diagram` and builds the flattened graph view.
    ///
    /// # Errors
    ///
    /// Returns [`ArchmapError::Graph`] when a node ID is declared more
    /// than once or a relation endpoint does not match any declared node.
    pub fn from_diagram(diagram: &'a Diagram) -> Result<Self, ArchmapError> {
        let mut builder = DiagramGraph {
            graph: GraphInternal::new(),
            clusters: Vec::new(),
        };

        builder.collect_nodes(diagram.scope(), None)?;
        builder.collect_relations(diagram.scope())?;

        debug!(
            nodes = builder.graph.nodes_count(),
            relations = builder.graph.edges_count(),
            clusters = builder.clusters.len();
            "validated diagram structure"
        );

        Ok(builder)
    }

    /// Returns the node with the given ID, if declared.
    pub fn node(&self, id: Id) -> Option<&'a Node> {
        self.graph.node(id)
    }

    /// Returns the number of declared nodes.
    pub fn node_count(&self) -> usize {
        self.graph.nodes_count()
    }

    /// Returns the number of declared relations.
    pub fn relation_count(&self) -> usize {
        self.graph.edges_count()
    }

    /// Returns an iterator over all relations, in declaration order.
    pub fn relations(&self) -> impl Iterator<Item = &'a Relation> {
        self.graph.edges()
    }

    /// Returns the clusters discovered during validation, in declaration
    /// order (outer before inner).
    pub fn clusters(&self) -> &[ClusterScope] {
        &self.clusters
    }

    /// First pass: register every node and cluster in the scope tree.
    fn collect_nodes(&mut self, scope: &'a Scope, container: Option<Id>) -> Result<(), ArchmapError> {
        for element in scope.elements() {
            match element {
                Element::Node(node) => {
                    if !self.graph.add_node(node.id(), node) {
                        return Err(ArchmapError::Graph(format!(
                            "Node '{}' is declared more than once",
                            node.id()
                        )));
                    }
                }
                Element::Cluster(cluster) => {
                    let direct_nodes = cluster
                        .scope()
                        .elements()
                        .iter()
                        .filter(|element| matches!(element, Element::Node(_)))
                        .count();
                    self.clusters.push(ClusterScope {
                        id: cluster.id(),
                        container,
                        node_count: direct_nodes,
                    });
                    self.collect_nodes(cluster.scope(), Some(cluster.id()))?;
                }
                Element::Relation(_) => {}
            }
        }
        Ok(())
    }

    /// Second pass: resolve relation endpoints against the node set.
    fn collect_relations(&mut self, scope: &'a Scope) -> Result<(), ArchmapError> {
        for element in scope.elements() {
            match element {
                Element::Relation(relation) => {
                    self.graph
                        .add_edge(relation.source(), relation.target(), relation)
                        .map_err(|missing| {
                            ArchmapError::Graph(format!(
                                "Relation '{}' -> '{}' refers to undeclared node '{missing}'",
                                relation.source(),
                                relation.target()
                            ))
                        })?;
                }
                Element::Cluster(cluster) => {
                    self.collect_relations(cluster.scope())?;
                }
                Element::Node(_) => {}
            }
        }
        Ok(())
    }
}
