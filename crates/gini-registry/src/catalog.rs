//! The fixed deploy catalog.

use gini_core::{Layer, PackageSpec};

/// Returns the six packages deployed by "deploy all", in deploy order.
#[must_use]
pub fn default_catalog() -> Vec<PackageSpec> {
    [
        ("libpolycall", "1.0.0", Layer::Infrastructure),
        ("rift-compiler", "2.0.0", Layer::Platform),
        ("gosilang", "3.0.0", Layer::Platform),
        ("obinexus-core", "1.0.0", Layer::Application),
        ("node-zero", "1.0.0", Layer::Infrastructure),
        ("quantum-threat", "1.0.0", Layer::Platform),
    ]
    .into_iter()
    .map(|(name, version, layer)| PackageSpec::new(name, version, layer))
    .collect()
}
