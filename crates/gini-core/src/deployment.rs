//! Deployment records and catalog entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Layer;

/// A package descriptor as it appears in a deploy catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageSpec {
    /// Package name, unique within a registry.
    pub name: String,
    /// Version string, stored verbatim.
    pub version: String,
    /// Layer the package is deployed to.
    pub layer: Layer,
}

impl PackageSpec {
    /// Creates a new package spec.
    #[must_use]
    pub fn new(name: impl Into<String>, version: impl Into<String>, layer: Layer) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            layer,
        }
    }
}

/// The recorded outcome of deploying a package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentRecord {
    /// Package name.
    pub name: String,
    /// Version that was deployed.
    pub version: String,
    /// Layer the package was deployed to.
    pub layer: Layer,
    /// Always `true` once a record exists.
    pub deployed: bool,
    /// When the package was last deployed.
    pub timestamp: DateTime<Utc>,
}

impl DeploymentRecord {
    /// Creates a record for a deployment happening now.
    #[must_use]
    pub fn now(name: impl Into<String>, version: impl Into<String>, layer: Layer) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            layer,
            deployed: true,
            timestamp: Utc::now(),
        }
    }
}
