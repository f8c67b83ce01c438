//! Common types used across the GINI servers.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// IaaS layer a package or stanza belongs to.
///
/// Used for display grouping only; no behavior hangs off the layer.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum Layer {
    /// Bottom of the stack: runtimes, linkers, system libraries.
    Infrastructure,
    /// Languages, compilers and build tooling.
    Platform,
    /// End-user facing code.
    Application,
}

impl Layer {
    /// All layers, bottom to top.
    pub const ALL: [Layer; 3] = [Layer::Infrastructure, Layer::Platform, Layer::Application];

    /// Returns the canonical name of the layer.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Infrastructure => "Infrastructure",
            Self::Platform => "Platform",
            Self::Application => "Application",
        }
    }
}

impl std::fmt::Display for Layer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layer {
    type Err = Error;

    /// Parses a layer name, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|layer| layer.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| Error::invalid_layer(s))
    }
}
