//! Translation of a semantic diagram into Graphviz DOT.
//!
//! The builder walks the diagram's element tree in declaration order and
//! produces a [`dot_structures::Graph`], which prints to DOT source text.
//! Because the walk follows declaration order and never consults any
//! unordered collection, the emitted DOT is byte-identical across runs
//! for the same diagram and style.
//!
//! Layout is entirely Graphviz's job: this module emits structure and
//! style attributes only, never coordinates.

use dot_generator::{attr, id};
use dot_structures::*;
use log::debug;

use archmap_core::identifier;
use archmap_core::semantic::{Cluster, Diagram, Element, NodeKind, Relation, Scope};
use graphviz_rust::printer::{DotPrinter, PrinterContext};

use crate::config::StyleConfig;
use crate::error::ArchmapError;

/// Default color for relation arrows and their labels.
const EDGE_COLOR: &str = "#34495e";

/// Builds a DOT graph from a semantic diagram.
pub struct DotBuilder<'a> {
    diagram: &'a Diagram,
    style: &'a StyleConfig,
}

impl<'a> DotBuilder<'a> {
    /// Creates a builder for the given diagram and style.
    pub fn new(diagram: &'a Diagram, style: &'a StyleConfig) -> Self {
        Self { diagram, style }
    }

    /// Builds the DOT graph structure.
    ///
    /// # Errors
    ///
    /// Returns [`ArchmapError::Config`] when the configured background
    /// color cannot be parsed.
    pub fn build(&self) -> Result<Graph, ArchmapError> {
        let mut stmts = self.graph_attributes()?;
        self.push_scope(self.diagram.scope(), &mut stmts);

        debug!(title = self.diagram.title(), statements = stmts.len(); "built dot graph");

        Ok(Graph::DiGraph {
            id: id!("architecture"),
            strict: false,
            stmts,
        })
    }

    /// Graph-level attributes plus the node/edge defaults, emitted before
    /// any element statement.
    fn graph_attributes(&self) -> Result<Vec<Stmt>, ArchmapError> {
        let mut stmts = vec![
            Stmt::from(attr!("rankdir", self.diagram.direction())),
            Stmt::from(attr!("label", esc escape_text(self.diagram.title()))),
            Stmt::from(attr!("labelloc", "t")),
            Stmt::from(attr!("fontsize", self.style.graph_font_size())),
            Stmt::from(attr!("pad", self.style.pad())),
        ];

        let background = self
            .style
            .background_color()
            .map_err(ArchmapError::Config)?;
        if let Some(color) = background {
            stmts.push(Stmt::from(attr!("bgcolor", esc color)));
        }

        stmts.push(Stmt::GAttribute(GraphAttributes::Node(vec![attr!(
            "fontsize",
            self.style.node_font_size()
        )])));
        stmts.push(Stmt::GAttribute(GraphAttributes::Edge(vec![
            attr!("fontsize", self.style.edge_font_size()),
            attr!("color", esc EDGE_COLOR),
            attr!("fontcolor", esc EDGE_COLOR),
        ])));

        Ok(stmts)
    }

    /// Emits every element of `scope`, in declaration order.
    fn push_scope(&self, scope: &Scope, stmts: &mut Vec<Stmt>) {
        for element in scope.elements() {
            match element {
                Element::Node(node) => stmts.push(Stmt::Node(self.build_node(node))),
                Element::Relation(relation) => stmts.push(Stmt::Edge(self.build_edge(relation))),
                Element::Cluster(cluster) => {
                    stmts.push(Stmt::Subgraph(self.build_cluster(cluster)));
                }
            }
        }
    }

    fn build_node(&self, node: &archmap_core::semantic::Node) -> Node {
        let mut attributes = vec![attr!("label", esc escape_text(node.display_text()))];
        attributes.extend(kind_attributes(node.kind()));

        Node {
            id: NodeId(id!(node.id()), None),
            attributes,
        }
    }

    fn build_edge(&self, relation: &Relation) -> Edge {
        let mut attributes = Vec::new();
        if let Some(label) = relation.label() {
            attributes.push(attr!("label", esc escape_text(label)));
        }

        Edge {
            ty: EdgeTy::Pair(
                Vertex::N(NodeId(id!(relation.source()), None)),
                Vertex::N(NodeId(id!(relation.target()), None)),
            ),
            attributes,
        }
    }

    fn build_cluster(&self, cluster: &Cluster) -> Subgraph {
        let mut stmts = vec![
            Stmt::from(attr!("label", esc escape_text(cluster.label()))),
            Stmt::from(attr!("style", esc "rounded")),
        ];
        self.push_scope(cluster.scope(), &mut stmts);

        Subgraph {
            id: id!(cluster_id(cluster.id())),
            stmts,
        }
    }
}

/// Renders the DOT graph to source text.
pub fn to_dot_source(graph: &Graph) -> String {
    graph.print(&mut PrinterContext::default())
}

/// Exporter that writes the DOT source verbatim to a file.
///
/// Useful for inspecting the generated graph, and works without a
/// Graphviz installation.
pub struct DotFile {
    output: std::path::PathBuf,
}

impl DotFile {
    /// Creates an exporter that writes to `output`.
    pub fn new(output: &std::path::Path) -> Self {
        Self {
            output: output.to_path_buf(),
        }
    }
}

impl crate::export::Exporter for DotFile {
    fn export_dot(&mut self, dot_source: &str) -> Result<(), crate::export::Error> {
        std::fs::write(&self.output, dot_source).map_err(crate::export::Error::Io)?;
        debug!(output = self.output.display().to_string(); "wrote dot source");
        Ok(())
    }
}

/// Shape and fill attributes for each node kind.
fn kind_attributes(kind: NodeKind) -> Vec<Attribute> {
    match kind {
        NodeKind::Client => vec![attr!("shape", "oval")],
        NodeKind::Framework => filled_box("#3498db"),
        NodeKind::Gateway => filled_box("#e67e22"),
        NodeKind::Service => filled_box("#2ecc71"),
        NodeKind::Database => vec![
            attr!("shape", "cylinder"),
            attr!("style", "filled"),
            attr!("fillcolor", esc "#7f8c8d"),
            attr!("fontcolor", "white"),
        ],
    }
}

fn filled_box(fill: &str) -> Vec<Attribute> {
    vec![
        attr!("shape", "box"),
        attr!("style", esc "rounded,filled"),
        attr!("fillcolor", esc fill),
        attr!("fontcolor", "white"),
    ]
}

/// DOT subgraph name for a cluster. The `cluster_` prefix is what makes
/// Graphviz draw the subgraph as a box; nested-ID separators are not
/// valid in DOT identifiers and become underscores.
fn cluster_id(id: identifier::Id) -> String {
    format!("cluster_{}", id.to_string().replace("::", "__"))
}

/// Escapes text for use inside a double-quoted DOT string.
///
/// Backslashes are doubled first, then quotes are escaped, then real
/// newlines become the `\n` escape Graphviz interprets as a line break.
fn escape_text(text: impl ToString) -> String {
    text.to_string()
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use archmap_core::identifier::Id;
    use archmap_core::semantic::{Node as SemNode, RankDir};

    fn sample_diagram() -> Diagram {
        let services = Cluster::new(
            Id::new("services"),
            "Microservices",
            Scope::new(vec![Element::Node(SemNode::new(
                Id::new("auth"),
                "auth",
                Some("Auth Service\nPort: 8081".to_string()),
                NodeKind::Service,
            ))]),
        );
        Diagram::new(
            "BlogSite Architecture",
            RankDir::Tb,
            Scope::new(vec![
                Element::Node(SemNode::new(
                    Id::new("user"),
                    "user",
                    Some("User\n(Browser)".to_string()),
                    NodeKind::Client,
                )),
                Element::Cluster(services),
                Element::Relation(Relation::new(
                    Id::new("user"),
                    Id::new("auth"),
                    Some("HTTPS".to_string()),
                )),
            ]),
        )
    }

    #[test]
    fn test_dot_source_contains_graph_attributes() {
        let diagram = sample_diagram();
        let style = StyleConfig::default();
        let graph = DotBuilder::new(&diagram, &style).build().unwrap();
        let source = to_dot_source(&graph);

        assert!(source.starts_with("digraph architecture"));
        assert!(source.contains("rankdir=TB"));
        assert!(source.contains("label=\"BlogSite Architecture\""));
        assert!(source.contains("labelloc=t"));
        assert!(source.contains("fontsize=16"));
        assert!(source.contains("bgcolor=\"white\""));
        assert!(source.contains("pad=0.5"));
    }

    #[test]
    fn test_dot_source_contains_cluster_and_node() {
        let diagram = sample_diagram();
        let style = StyleConfig::default();
        let graph = DotBuilder::new(&diagram, &style).build().unwrap();
        let source = to_dot_source(&graph);

        assert!(source.contains("subgraph cluster_services"));
        assert!(source.contains("label=\"Auth Service\\nPort: 8081\""));
        assert!(source.contains("fillcolor=\"#2ecc71\""));
        assert!(source.contains("user -> auth"));
        assert!(source.contains("label=\"HTTPS\""));
    }

    #[test]
    fn test_nested_cluster_id_is_sanitized() {
        assert_eq!(
            cluster_id(Id::new("services").create_nested(Id::new("auth"))),
            "cluster_services__auth"
        );
    }

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("plain"), "plain");
        assert_eq!(escape_text("two\nlines"), "two\\nlines");
        assert_eq!(escape_text("say \"hi\""), "say \\\"hi\\\"");
        assert_eq!(escape_text("back\\slash"), "back\\\\slash");
    }

    #[test]
    fn test_output_is_deterministic() {
        let diagram = sample_diagram();
        let style = StyleConfig::default();

        let first = to_dot_source(&DotBuilder::new(&diagram, &style).build().unwrap());
        let second = to_dot_source(&DotBuilder::new(&diagram, &style).build().unwrap());
        assert_eq!(first, second);
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::escape_text;

    proptest! {
        /// Escaped text never carries a raw newline; line breaks become
        /// the two-character sequence Graphviz interprets.
        #[test]
        fn escaped_text_has_no_raw_newlines(text in ".*") {
            prop_assert!(!escape_text(text.as_str()).contains('\n'));
        }

        /// Every double quote in the output is preceded by a backslash,
        /// so the result is safe inside a quoted DOT string.
        #[test]
        fn quotes_are_always_escaped(text in ".*") {
            let escaped = escape_text(text.as_str());
            let bytes = escaped.as_bytes();
            for (i, b) in bytes.iter().enumerate() {
                if *b == b'"' {
                    let preceding = bytes[..i].iter().rev().take_while(|b| **b == b'\\').count();
                    prop_assert!(preceding % 2 == 1);
                }
            }
        }

        /// Text without characters needing escapes passes through untouched.
        #[test]
        fn plain_text_is_unchanged(text in "[a-zA-Z0-9 ./:()•-]*") {
            prop_assert_eq!(escape_text(text.as_str()), text);
        }
    }
}

