//! Graph data model: typed nodes, directed labeled links, ordered graphs.
//!
//! A [`Graph`] is a plain ordered sequence of nodes and links. Insertion
//! order is preserved end to end so repeated builds over the same snapshot
//! produce identical output documents. No deduplication is performed: two
//! modules exporting the same package name append two `Package` nodes that
//! share an id, matching the legacy behavior of the wire format's consumers.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, IntoStaticStr};

/// Id prefix for module nodes.
pub const MODULE_PREFIX: &str = "m.";
/// Id prefix for package nodes.
pub const PACKAGE_PREFIX: &str = "p.";
/// Id prefix for service definition nodes.
pub const SERVICE_PREFIX: &str = "sd.";

/// The kind of entity a node represents.
///
/// Serialized names follow the established output vocabulary, including the
/// spaced `"Service definition"`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr, Serialize, Deserialize,
)]
pub enum NodeKind {
    Module,
    Package,
    #[strum(serialize = "Service definition")]
    #[serde(rename = "Service definition")]
    ServiceDefinition,
}

/// The semantic meaning of a directed link.
///
/// Direction encodes meaning, not traversal convenience:
/// - `Exports`: module -> package
/// - `Requires`: package -> requiring module
/// - `Provides`: module -> service definition
/// - `Uses`: service definition -> consuming module
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr, Serialize, Deserialize,
)]
pub enum LinkLabel {
    Exports,
    Requires,
    Provides,
    Uses,
}

/// A graph node with a namespaced id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
}

impl Node {
    /// Node for a module, identified by its stable numeric id.
    pub fn module(id: u64, name: impl Into<String>) -> Self {
        Self {
            id: module_id(id),
            name: name.into(),
            kind: NodeKind::Module,
        }
    }

    /// Node for an exported package.
    pub fn package(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: package_id(&name),
            name,
            kind: NodeKind::Package,
        }
    }

    /// Node for a registered service interface.
    pub fn service_definition(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: service_id(&name),
            name,
            kind: NodeKind::ServiceDefinition,
        }
    }
}

/// A directed, labeled link between two node ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub from: String,
    pub to: String,
    pub label: LinkLabel,
}

impl Link {
    /// `Exports` link from a module to a package it exports.
    pub fn exports(module: u64, package: &str) -> Self {
        Self {
            from: module_id(module),
            to: package_id(package),
            label: LinkLabel::Exports,
        }
    }

    /// `Requires` link from a required package to the requiring module.
    pub fn requires(package: &str, module: u64) -> Self {
        Self {
            from: package_id(package),
            to: module_id(module),
            label: LinkLabel::Requires,
        }
    }

    /// `Provides` link from a providing module to a service definition.
    pub fn provides(module: u64, interface: &str) -> Self {
        Self {
            from: module_id(module),
            to: service_id(interface),
            label: LinkLabel::Provides,
        }
    }

    /// `Uses` link from a service definition to a consuming module.
    pub fn uses(interface: &str, module: u64) -> Self {
        Self {
            from: service_id(interface),
            to: module_id(module),
            label: LinkLabel::Uses,
        }
    }
}

/// Prefixed id for a module node.
pub fn module_id(id: u64) -> String {
    format!("{MODULE_PREFIX}{id}")
}

/// Prefixed id for a package node.
pub fn package_id(name: &str) -> String {
    format!("{PACKAGE_PREFIX}{name}")
}

/// Prefixed id for a service definition node.
pub fn service_id(name: &str) -> String {
    format!("{SERVICE_PREFIX}{name}")
}

/// An ordered node/link sequence forming one graph projection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub links: Vec<Link>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node, preserving insertion order.
    pub fn push_node(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// Append a link, preserving insertion order.
    pub fn push_link(&mut self, link: Link) {
        self.links.push(link);
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.links.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id_prefixes() {
        let module = Node::module(7, "com.a");
        assert_eq!(module.id, "m.7");
        assert_eq!(module.name, "com.a");
        assert_eq!(module.kind, NodeKind::Module);

        let package = Node::package("com.a.api");
        assert_eq!(package.id, "p.com.a.api");
        assert_eq!(package.name, "com.a.api");

        let service = Node::service_definition("com.a.api.Greeter");
        assert_eq!(service.id, "sd.com.a.api.Greeter");
        assert_eq!(service.kind, NodeKind::ServiceDefinition);
    }

    #[test]
    fn test_link_directions() {
        let exports = Link::exports(1, "com.a.api");
        assert_eq!((exports.from.as_str(), exports.to.as_str()), ("m.1", "p.com.a.api"));

        let requires = Link::requires("com.a.api", 2);
        assert_eq!((requires.from.as_str(), requires.to.as_str()), ("p.com.a.api", "m.2"));

        let provides = Link::provides(1, "com.a.api.Greeter");
        assert_eq!((provides.from.as_str(), provides.to.as_str()), ("m.1", "sd.com.a.api.Greeter"));

        let uses = Link::uses("com.a.api.Greeter", 2);
        assert_eq!((uses.from.as_str(), uses.to.as_str()), ("sd.com.a.api.Greeter", "m.2"));
    }

    #[test]
    fn test_node_kind_vocabulary() {
        assert_eq!(NodeKind::Module.to_string(), "Module");
        assert_eq!(NodeKind::ServiceDefinition.to_string(), "Service definition");

        let json = serde_json::to_string(&Node::service_definition("a.B")).unwrap();
        assert!(json.contains(r#""type":"Service definition""#), "{json}");
    }

    #[test]
    fn test_identical_ids_are_not_deduplicated() {
        let mut graph = Graph::new();
        graph.push_node(Node::package("com.a.api"));
        graph.push_node(Node::package("com.a.api"));
        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.nodes[0], graph.nodes[1]);
    }
}
