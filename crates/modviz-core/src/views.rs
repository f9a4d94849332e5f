//! View assembly: the four named graph projections of one build.

use strum_macros::{Display, IntoStaticStr};

use crate::graph::Graph;

/// Which projection of the component system a graph shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum ViewKind {
    Modules,
    Services,
    Packages,
    All,
}

impl ViewKind {
    /// All views in their conventional output order.
    pub const ORDER: [ViewKind; 4] = [
        ViewKind::Modules,
        ViewKind::Services,
        ViewKind::Packages,
        ViewKind::All,
    ];

    /// The view's output name (`modules`, `services`, `packages`, `all`).
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}

/// The four graphs produced by one build.
///
/// Views do not share storage: a module's node is appended independently to
/// every view it participates in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphViews {
    pub modules: Graph,
    pub services: Graph,
    pub packages: Graph,
    pub all: Graph,
}

impl GraphViews {
    pub fn get(&self, kind: ViewKind) -> &Graph {
        match kind {
            ViewKind::Modules => &self.modules,
            ViewKind::Services => &self.services,
            ViewKind::Packages => &self.packages,
            ViewKind::All => &self.all,
        }
    }

    /// The views paired with their output names, in output order.
    pub fn named(&self) -> [(ViewKind, &Graph); 4] {
        ViewKind::ORDER.map(|kind| (kind, self.get(kind)))
    }
}
