//! Output generation: one JSON document per view.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use modviz_core::{GraphViews, Severity};
use modviz_error::{Error, Result};

/// Write the four view documents into `out_dir`.
///
/// A render or write failure affects only that one document: it is returned
/// as a recoverable error and the remaining documents are still produced.
/// Already-written documents are never rolled back. Only failing to create
/// the output directory itself is fatal.
pub fn write_view_documents(views: &GraphViews, out_dir: &Path) -> Result<(Vec<PathBuf>, Vec<Error>)> {
    fs::create_dir_all(out_dir).map_err(|e| {
        Error::from(e)
            .with_operation("output::write_view_documents")
            .with_context("dir", out_dir.display().to_string())
    })?;

    let mut written = Vec::new();
    let mut failures = Vec::new();

    for (kind, graph) in views.named() {
        let path = out_dir.join(format!("{}.json", kind.as_str()));
        let result = modviz_json::render_graph(graph)
            .and_then(|document| fs::write(&path, document).map_err(Error::from));

        match result {
            Ok(()) => {
                info!(
                    view = kind.as_str(),
                    path = %path.display(),
                    nodes = graph.nodes.len(),
                    links = graph.links.len(),
                    "document written"
                );
                written.push(path);
            }
            Err(err) => {
                failures.push(
                    err.with_operation("output::write_view_documents")
                        .with_context("view", kind.as_str())
                        .with_severity(Severity::Recoverable),
                );
            }
        }
    }

    Ok((written, failures))
}

#[cfg(test)]
mod tests {
    use super::*;
    use modviz_core::{Node, ViewKind};
    use tempfile::tempdir;

    #[test]
    fn test_writes_all_four_documents() {
        let mut views = GraphViews::default();
        views.modules.push_node(Node::module(1, "com.a"));

        let dir = tempdir().expect("tempdir");
        let (written, failures) = write_view_documents(&views, dir.path()).unwrap();

        assert!(failures.is_empty());
        let names: Vec<_> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(
            names,
            ["modules.json", "services.json", "packages.json", "all.json"]
        );

        for (kind, path) in ViewKind::ORDER.iter().zip(&written) {
            let document = std::fs::read_to_string(path).unwrap();
            let graph = modviz_json::parse_graph(&document).unwrap();
            assert_eq!(&graph, views.get(*kind));
        }
    }

    #[test]
    fn test_creates_output_directory() {
        let dir = tempdir().expect("tempdir");
        let nested = dir.path().join("html").join("data");

        let (written, failures) = write_view_documents(&GraphViews::default(), &nested).unwrap();
        assert!(failures.is_empty());
        assert_eq!(written.len(), 4);
        assert!(nested.join("all.json").exists());
    }
}
