pub mod filter;
pub mod graph;
pub mod graph_builder;
pub mod record;
pub mod views;

pub use filter::{FilterParser, PACKAGE_ATTRIBUTE};
pub use graph::{Graph, Link, LinkLabel, Node, NodeKind};
pub use graph_builder::{BuildOptions, BuildOutput, BuildStats, build_views};
pub use record::{
    IntrospectReport, Introspector, ModuleRecord, PackageExport, PackageRequirement, ServiceRecord,
    Snapshot, StaticIntrospector,
};
pub use views::{GraphViews, ViewKind};

pub use modviz_error::{Error, ErrorKind, Result, Severity};
