//! Single-pass construction of the four graph views.
//!
//! One traversal over a snapshot's module and service records populates the
//! modules/services/packages/all projections together with [`BuildStats`].
//! Traversal order is the snapshot's record order and is preserved verbatim
//! in every view; nothing is sorted or batched by kind.

use modviz_error::{Error, Result};
use tracing::debug;

use crate::filter::FilterParser;
use crate::graph::{Link, Node};
use crate::record::{ModuleRecord, ServiceRecord, Snapshot};
use crate::views::GraphViews;

/// Options controlling a build.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Reject filters containing several package clauses instead of keeping
    /// the first one.
    pub strict_filters: bool,
    /// Abort the build on the first malformed filter instead of recording a
    /// diagnostic and skipping the link.
    pub fail_on_malformed: bool,
    /// Override of the wiring attribute key naming required packages.
    pub package_attribute: Option<String>,
}

impl BuildOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strict_filters(mut self, strict: bool) -> Self {
        self.strict_filters = strict;
        self
    }

    pub fn with_fail_on_malformed(mut self, fail: bool) -> Self {
        self.fail_on_malformed = fail;
        self
    }

    pub fn with_package_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.package_attribute = Some(attribute.into());
        self
    }
}

/// Counters collected during the build pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Modules traversed.
    pub module_count: usize,
    /// Service definitions appended (one per exposed interface name).
    pub service_definition_count: usize,
}

/// Everything one build produces: the four views, the counters, and the
/// diagnostics collected under the skip-and-report policy.
#[derive(Debug, Default)]
pub struct BuildOutput {
    pub views: GraphViews,
    pub stats: BuildStats,
    pub diagnostics: Vec<Error>,
}

struct GraphBuilder {
    parser: FilterParser,
    fail_on_malformed: bool,
    views: GraphViews,
    stats: BuildStats,
    diagnostics: Vec<Error>,
}

impl GraphBuilder {
    fn new(options: &BuildOptions) -> Result<Self> {
        let parser = match options.package_attribute.as_deref() {
            Some(attribute) => FilterParser::with_attribute(attribute)?,
            None => FilterParser::new(),
        };
        Ok(Self {
            parser: parser.with_strict(options.strict_filters),
            fail_on_malformed: options.fail_on_malformed,
            views: GraphViews::default(),
            stats: BuildStats::default(),
            diagnostics: Vec::new(),
        })
    }

    fn add_module(&mut self, module: &ModuleRecord) -> Result<()> {
        debug!(id = module.id, name = %module.symbolic_name, "processing module");

        let node = Node::module(module.id, &module.symbolic_name);
        self.views.modules.push_node(node.clone());
        self.views.services.push_node(node.clone());
        self.views.packages.push_node(node.clone());
        self.views.all.push_node(node);
        self.stats.module_count += 1;

        for export in &module.exports {
            let node = Node::package(&export.package);
            self.views.packages.push_node(node.clone());
            self.views.all.push_node(node);

            let link = Link::exports(module.id, &export.package);
            self.views.packages.push_link(link.clone());
            self.views.all.push_link(link);
        }

        for requirement in &module.requirements {
            // a requirement with no attributes produces no link
            let Some(filter) = requirement.filter.as_deref() else {
                continue;
            };

            match self.parser.parse(filter) {
                Ok(package) => {
                    let link = Link::requires(package, module.id);
                    self.views.packages.push_link(link.clone());
                    self.views.all.push_link(link);
                }
                Err(err) => {
                    let err = err
                        .with_context("module", module.id.to_string())
                        .with_operation("graph_builder::add_module");
                    if self.fail_on_malformed {
                        return Err(err.escalate());
                    }
                    self.diagnostics.push(err);
                }
            }
        }

        Ok(())
    }

    fn add_service(&mut self, service: &ServiceRecord) {
        for interface in &service.object_classes {
            let node = Node::service_definition(interface);
            self.views.services.push_node(node.clone());
            self.views.all.push_node(node);
            self.stats.service_definition_count += 1;

            let link = Link::provides(service.provider, interface);
            self.views.services.push_link(link.clone());
            self.views.all.push_link(link);

            for &user in &service.using_modules {
                let link = Link::uses(interface, user);
                self.views.services.push_link(link.clone());
                self.views.all.push_link(link);
            }
        }
    }

    fn finish(self) -> BuildOutput {
        BuildOutput {
            views: self.views,
            stats: self.stats,
            diagnostics: self.diagnostics,
        }
    }
}

/// Build the four graph views from a snapshot.
///
/// Fails only on invalid options or, with
/// [`BuildOptions::fail_on_malformed`], on the first malformed filter.
/// Otherwise malformed filters become entries in
/// [`BuildOutput::diagnostics`] and the affected `Requires` link is skipped;
/// nodes and links appended before a failure are never removed.
pub fn build_views(snapshot: &Snapshot, options: &BuildOptions) -> Result<BuildOutput> {
    let mut builder = GraphBuilder::new(options)?;

    for module in &snapshot.modules {
        builder.add_module(module)?;
    }
    for service in &snapshot.services {
        builder.add_service(service);
    }

    Ok(builder.finish())
}
