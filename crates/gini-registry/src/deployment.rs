//! Deployment registry for tracking which packages are live.

use std::collections::HashMap;

use gini_core::{DeploymentRecord, Layer, PackageSpec, Result};
use parking_lot::RwLock;

/// Registry of deployed packages, keyed by name.
///
/// A second deploy of the same name replaces the record (last write wins).
/// Writers take the lock exclusively, so readers never observe a partially
/// written record.
#[derive(Debug, Default)]
pub struct DeploymentRegistry {
    packages: RwLock<HashMap<String, DeploymentRecord>>,
}

impl DeploymentRegistry {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            packages: RwLock::new(HashMap::new()),
        }
    }

    /// Records a deployment of `name` at `version` on `layer`.
    pub fn deploy(
        &self,
        name: impl Into<String>,
        version: impl Into<String>,
        layer: Layer,
    ) -> DeploymentRecord {
        let record = DeploymentRecord::now(name, version, layer);
        self.packages
            .write()
            .insert(record.name.clone(), record.clone());

        tracing::info!(
            package = %record.name,
            version = %record.version,
            layer = %record.layer,
            "Deployed package"
        );
        record
    }

    /// Records a deployment described by a catalog entry.
    pub fn deploy_spec(&self, spec: &PackageSpec) -> DeploymentRecord {
        self.deploy(spec.name.as_str(), spec.version.as_str(), spec.layer)
    }

    /// Records a deployment whose layer arrives as free text.
    ///
    /// # Errors
    ///
    /// Returns [`gini_core::Error::InvalidLayer`] if `layer` is not one of the
    /// three known layers. The registry is left untouched in that case.
    pub fn deploy_parsed(&self, name: &str, version: &str, layer: &str) -> Result<DeploymentRecord> {
        let layer: Layer = layer.parse()?;
        Ok(self.deploy(name, version, layer))
    }

    /// Deploys every catalog entry in order, returning the records in the
    /// same order.
    pub fn deploy_all(&self, catalog: &[PackageSpec]) -> Vec<DeploymentRecord> {
        catalog.iter().map(|spec| self.deploy_spec(spec)).collect()
    }

    /// Returns a snapshot of every record. Order is unspecified.
    #[must_use]
    pub fn list(&self) -> Vec<DeploymentRecord> {
        self.packages.read().values().cloned().collect()
    }

    /// Gets the record for a package.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<DeploymentRecord> {
        self.packages.read().get(name).cloned()
    }

    /// Returns the number of deployed packages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.packages.read().len()
    }

    /// Returns true if nothing has been deployed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.packages.read().is_empty()
    }
}
