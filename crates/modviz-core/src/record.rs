//! Normalized introspection records consumed by the graph builder.
//!
//! The builder never talks to a live component system. An [`Introspector`]
//! turns whatever runtime or archive handle it wraps into one static
//! [`Snapshot`] of plain records, and the build is a single pass over that
//! snapshot. This keeps the core testable with synthetic record sequences
//! and portable across module-system implementations.

use modviz_error::{Error, Result};
use serde::{Deserialize, Serialize};

/// One module with its package wiring, in snapshot order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRecord {
    /// Stable numeric identity assigned by the component system.
    pub id: u64,
    pub symbolic_name: String,
    #[serde(default)]
    pub exports: Vec<PackageExport>,
    #[serde(default)]
    pub requirements: Vec<PackageRequirement>,
}

/// An exported-package capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageExport {
    pub package: String,
}

/// A package requirement.
///
/// `filter` is the raw wiring filter expression attached to the
/// requirement's attributes; `None` models a requirement that carries no
/// attributes at all, which the builder skips without producing a link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRequirement {
    #[serde(default)]
    pub filter: Option<String>,
}

/// One service registration: a providing module exposing one or more
/// interfaces to zero or more consuming modules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRecord {
    /// Id of the providing module.
    pub provider: u64,
    /// Exposed interface names, one service definition each.
    pub object_classes: Vec<String>,
    /// Ids of modules consuming this registration.
    #[serde(default)]
    pub using_modules: Vec<u64>,
}

/// A fully materialized, static view of a component system.
///
/// Record order is meaningful: the builder traverses modules and services
/// exactly as listed, and graph output order follows from it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub modules: Vec<ModuleRecord>,
    #[serde(default)]
    pub services: Vec<ServiceRecord>,
}

impl Snapshot {
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty() && self.services.is_empty()
    }
}

/// The outcome of introspecting a component system.
///
/// Records that could not be enumerated do not abort introspection; each
/// becomes one `AdapterFailed` entry in `failures` and the remaining records
/// still land in the snapshot.
#[derive(Debug, Default)]
pub struct IntrospectReport {
    pub snapshot: Snapshot,
    pub failures: Vec<Error>,
}

impl IntrospectReport {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot,
            failures: Vec::new(),
        }
    }
}

/// Boundary to a loaded component system.
///
/// Implementations own the messy part (runtime handles, archive formats,
/// on-disk snapshots) and surface only normalized records.
pub trait Introspector {
    fn introspect(&self) -> Result<IntrospectReport>;
}

/// Trivial adapter over an already-built snapshot, used by tests and by
/// callers that assemble records themselves.
#[derive(Debug, Clone, Default)]
pub struct StaticIntrospector {
    snapshot: Snapshot,
}

impl StaticIntrospector {
    pub fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }
}

impl Introspector for StaticIntrospector {
    fn introspect(&self) -> Result<IntrospectReport> {
        Ok(IntrospectReport::new(self.snapshot.clone()))
    }
}
