//! Static content served by the two server variants.

use serde::{Deserialize, Serialize};

use crate::Layer;

/// One annotated line of the consciousness-mirror poem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stanza {
    /// 1-based position in the poem.
    pub line: usize,
    /// The line itself.
    pub text: String,
    /// What the line means for the toolchain.
    pub meaning: String,
    /// Layer the line is filed under.
    pub iaas_layer: Layer,
    /// Package the line is attributed to.
    pub package: String,
}

impl Stanza {
    /// Creates a new stanza.
    #[must_use]
    pub fn new(
        line: usize,
        text: impl Into<String>,
        meaning: impl Into<String>,
        iaas_layer: Layer,
        package: impl Into<String>,
    ) -> Self {
        Self {
            line,
            text: text.into(),
            meaning: meaning.into(),
            iaas_layer,
            package: package.into(),
        }
    }
}

/// What the questioning parrot says when asked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GossipProfile {
    /// Opening line.
    pub greeting: String,
    /// Questions, in declaration order.
    pub questions: Vec<String>,
    /// Gossip, in declaration order.
    pub gossip: Vec<String>,
    /// Languages the parrot speaks.
    pub languages: Vec<String>,
    /// Closing quote.
    pub quote: String,
}
