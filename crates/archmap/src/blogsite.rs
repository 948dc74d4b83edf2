//! The built-in BlogSite microservices topology.
//!
//! This is the diagram the tool exists to draw: a browser client, a React
//! frontend, an Nginx API gateway, two Spring Boot services, and the two
//! MySQL databases behind them, grouped into layer clusters. The topology
//! is fixed; styling comes from [`StyleConfig`](crate::config::StyleConfig)
//! at render time.

use archmap_core::identifier::Id;
use archmap_core::semantic::{
    Cluster, Diagram, Element, Node, NodeKind, RankDir, Relation, Scope,
};

/// Default output file stem, extended per output format.
pub const DEFAULT_FILE_STEM: &str = "architecture_diagram";

fn node(id: Id, name: &str, label: &str, kind: NodeKind) -> Element {
    Element::Node(Node::new(id, name, Some(label.to_string()), kind))
}

fn relation(source: Id, target: Id, label: &str) -> Element {
    Element::Relation(Relation::new(source, target, Some(label.to_string())))
}

/// Builds the BlogSite architecture diagram.
///
/// Declares seven nodes, six relations, and six clusters (two of them
/// nested inside the Microservices cluster), top to bottom.
pub fn diagram() -> Diagram {
    let user = Id::new("user");
    let frontend = Id::new("frontend");
    let gateway = Id::new("gateway");
    let auth = Id::new("auth_service");
    let blog = Id::new("blog_service");
    let db_auth = Id::new("db_auth");
    let db_blog = Id::new("db_blog");

    let microservices = Id::new("microservices");

    let elements = vec![
        node(user, "user", "Browser\nlocalhost:5173", NodeKind::Client),
        Element::Cluster(Cluster::new(
            Id::new("frontend_layer"),
            "Frontend Layer",
            Scope::new(vec![node(
                frontend,
                "frontend",
                "React + Vite\nPort: 5173\n• Login/Register\n• Blog UI\n• Axios Interceptor",
                NodeKind::Framework,
            )]),
        )),
        Element::Cluster(Cluster::new(
            Id::new("gateway_layer"),
            "API Gateway Layer",
            Scope::new(vec![node(
                gateway,
                "gateway",
                "API Gateway\nPort: 8080\n• JWT Validation\n• Routing\n• CORS",
                NodeKind::Gateway,
            )]),
        )),
        Element::Cluster(Cluster::new(
            microservices,
            "Microservices",
            Scope::new(vec![
                Element::Cluster(Cluster::new(
                    microservices.create_nested(Id::new("auth")),
                    "Auth Service (8081)",
                    Scope::new(vec![node(
                        auth,
                        "auth_service",
                        "Spring Boot\n• Registration\n• Login\n• JWT Tokens\n• Token Refresh",
                        NodeKind::Service,
                    )]),
                )),
                Element::Cluster(Cluster::new(
                    microservices.create_nested(Id::new("blog")),
                    "Blog Service (8082)",
                    Scope::new(vec![node(
                        blog,
                        "blog_service",
                        "Spring Boot\n• Blog CRUD\n• Categories\n• Authorization",
                        NodeKind::Service,
                    )]),
                )),
            ]),
        )),
        Element::Cluster(Cluster::new(
            Id::new("database_layer"),
            "Database Layer",
            Scope::new(vec![
                node(db_auth, "db_auth", "blog_auth\n• users\n• roles", NodeKind::Database),
                node(
                    db_blog,
                    "db_blog",
                    "blog_content\n• blogs\n• categories",
                    NodeKind::Database,
                ),
            ]),
        )),
        relation(user, frontend, "HTTP/HTTPS"),
        relation(frontend, gateway, "REST API\nJWT Bearer"),
        relation(gateway, auth, "/auth/**"),
        relation(gateway, blog, "/blogs/**\n/categories"),
        relation(auth, db_auth, "JPA/Hibernate"),
        relation(blog, db_blog, "JPA/Hibernate"),
    ];

    Diagram::new(
        "BlogSite Microservices Architecture",
        RankDir::Tb,
        Scope::new(elements),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::DiagramGraph;

    #[test]
    fn test_topology_counts() {
        let diagram = diagram();
        let graph = DiagramGraph::from_diagram(&diagram).unwrap();

        assert_eq!(graph.node_count(), 7);
        assert_eq!(graph.relation_count(), 6);
        assert_eq!(graph.clusters().len(), 6);
    }

    #[test]
    fn test_service_clusters_nest_inside_microservices() {
        let diagram = diagram();
        let graph = DiagramGraph::from_diagram(&diagram).unwrap();

        let nested: Vec<_> = graph
            .clusters()
            .iter()
            .filter(|cluster| cluster.container == Some(Id::new("microservices")))
            .collect();
        assert_eq!(nested.len(), 2);

        let top_level = graph
            .clusters()
            .iter()
            .filter(|cluster| cluster.container.is_none())
            .count();
        assert_eq!(top_level, 4);
    }

    #[test]
    fn test_gateway_routes_to_both_services() {
        let diagram = diagram();
        let graph = DiagramGraph::from_diagram(&diagram).unwrap();

        let from_gateway: Vec<_> = graph
            .relations()
            .filter(|relation| relation.source() == Id::new("gateway"))
            .collect();
        assert_eq!(from_gateway.len(), 2);
        assert_eq!(from_gateway[0].target(), Id::new("auth_service"));
        assert_eq!(from_gateway[0].label(), Some("/auth/**"));
        assert_eq!(from_gateway[1].target(), Id::new("blog_service"));
    }

    #[test]
    fn test_each_service_owns_its_database() {
        let diagram = diagram();
        let graph = DiagramGraph::from_diagram(&diagram).unwrap();

        let db_edges: Vec<_> = graph
            .relations()
            .filter(|relation| relation.label() == Some("JPA/Hibernate"))
            .map(|relation| (relation.source(), relation.target()))
            .collect();
        assert_eq!(
            db_edges,
            vec![
                (Id::new("auth_service"), Id::new("db_auth")),
                (Id::new("blog_service"), Id::new("db_blog")),
            ]
        );
    }

    #[test]
    fn test_title_and_direction() {
        let diagram = diagram();
        assert_eq!(diagram.title(), "BlogSite Microservices Architecture");
        assert_eq!(
            <&'static str>::from(diagram.direction()),
            "TB"
        );
    }
}
