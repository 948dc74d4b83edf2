//! Diagram element types for the semantic model.

use std::fmt;

use crate::{identifier::Id, semantic::diagram::Scope};

/// Visual category of a node.
///
/// The kind has no semantic effect on connectivity; it only selects the
/// shape and color the renderer draws the node with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A human actor or browser client
    Client,
    /// A frontend web application
    Framework,
    /// A reverse proxy / API gateway
    Gateway,
    /// A backend service process
    Service,
    /// A database or other data store
    Database,
}

/// A diagram node representing one system participant.
#[derive(Debug, Clone)]
pub struct Node {
    id: Id,
    name: String,
    label: Option<String>,
    kind: NodeKind,
}

impl Node {
    /// Create a new Node. The label may span multiple lines; when absent,
    /// the identifier name is displayed instead.
    pub fn new(id: Id, name: impl Into<String>, label: Option<String>, kind: NodeKind) -> Self {
        Self {
            id,
            name: name.into(),
            label,
            kind,
        }
    }

    /// Get the node identifier.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Get the node's identifier name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the node's visual category.
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Returns the display text for this node.
    /// Uses the label if present, otherwise falls back to the identifier name.
    pub fn display_text(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// A directed relation (edge) between two nodes.
///
/// Relations refer to their endpoints by [`Id`]; both endpoints must be
/// declared somewhere in the same diagram, which the structure pass
/// validates before export.
#[derive(Debug, Clone)]
pub struct Relation {
    source: Id,
    target: Id,
    label: Option<String>,
}

impl Relation {
    /// Create a new Relation between two node Ids with an optional label
    /// describing the relationship (protocol, path pattern).
    pub fn new(source: Id, target: Id, label: Option<String>) -> Self {
        Self {
            source,
            target,
            label,
        }
    }

    /// Get the source node Id of this relation.
    pub fn source(&self) -> Id {
        self.source
    }

    /// Get the target node Id of this relation.
    pub fn target(&self) -> Id {
        self.target
    }

    /// Get the relation's label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// A named visual grouping of elements.
///
/// Clusters are purely presentational: they draw a labeled box around their
/// contents but have no effect on connectivity. Clusters nest arbitrarily
/// by containing further `Element::Cluster` entries, and a node belongs to
/// at most one immediate cluster by construction.
#[derive(Debug, Clone)]
pub struct Cluster {
    id: Id,
    label: String,
    scope: Scope,
}

impl Cluster {
    /// Create a new Cluster with its identifier, display label, and contents.
    pub fn new(id: Id, label: impl Into<String>, scope: Scope) -> Self {
        Self {
            id,
            label: label.into(),
            scope,
        }
    }

    /// Get the cluster identifier.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Get the cluster's display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Borrow the cluster's contents.
    pub fn scope(&self) -> &Scope {
        &self.scope
    }
}

/// Top-level element within a scope.
#[derive(Debug, Clone)]
pub enum Element {
    /// A diagram node
    Node(Node),
    /// A relation between nodes
    Relation(Relation),
    /// A named visual grouping
    Cluster(Cluster),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_display_text_prefers_label() {
        let node = Node::new(
            Id::new("gateway"),
            "gateway",
            Some("API Gateway\nPort: 8080".to_string()),
            NodeKind::Gateway,
        );
        assert_eq!(node.display_text(), "API Gateway\nPort: 8080");
    }

    #[test]
    fn test_node_display_text_falls_back_to_name() {
        let node = Node::new(Id::new("user"), "user", None, NodeKind::Client);
        assert_eq!(node.display_text(), "user");
    }

    #[test]
    fn test_relation_accessors() {
        let relation = Relation::new(
            Id::new("frontend"),
            Id::new("gateway"),
            Some("REST API".to_string()),
        );
        assert_eq!(relation.source(), Id::new("frontend"));
        assert_eq!(relation.target(), Id::new("gateway"));
        assert_eq!(relation.label(), Some("REST API"));
    }

    #[test]
    fn test_cluster_nesting() {
        let inner = Cluster::new(
            Id::new("auth_box"),
            "Auth Service (8081)",
            Scope::new(vec![Element::Node(Node::new(
                Id::new("auth"),
                "auth",
                None,
                NodeKind::Service,
            ))]),
        );
        let outer = Cluster::new(
            Id::new("microservices"),
            "Microservices",
            Scope::new(vec![Element::Cluster(inner)]),
        );

        assert_eq!(outer.label(), "Microservices");
        match &outer.scope().elements()[0] {
            Element::Cluster(cluster) => assert_eq!(cluster.label(), "Auth Service (8081)"),
            other => panic!("expected nested cluster, got {other:?}"),
        }
    }
}
