//! JSON graph rendering for modviz.
//!
//! Renders a [`Graph`] to the document shape consumed by visualization
//! frontends:
//!
//! ```json
//! { "nodes": [ {"id": "...", "name": "...", "type": "..."}, ... ],
//!   "links": [ {"from": "...", "to": "...", "label": "..."}, ... ] }
//! ```
//!
//! Node and link array order equals the builder's insertion order; the
//! renderer never reorders. [`parse_graph`] is the inverse and reproduces
//! the ordered sequences exactly.

use modviz_core::Graph;
use modviz_error::{Error, Result};

/// Render a graph to a pretty-printed JSON document.
pub fn render_graph(graph: &Graph) -> Result<String> {
    serde_json::to_string_pretty(graph).map_err(|e| {
        Error::serialization_failed("graph does not render to JSON")
            .with_operation("json::render_graph")
            .set_source(e)
    })
}

/// Parse a JSON document back into a graph.
pub fn parse_graph(document: &str) -> Result<Graph> {
    serde_json::from_str(document).map_err(|e| {
        Error::deserialization_failed("document is not a graph")
            .with_operation("json::parse_graph")
            .set_source(e)
    })
}
