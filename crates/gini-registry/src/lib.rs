//! # GINI Registry
//!
//! The in-memory state behind the GINI servers.
//!
//! ## Features
//!
//! - **Content Registry**: immutable, ordered tables shared freely between handlers
//! - **Deployment Registry**: last-write-wins package records behind a single lock
//! - **Default Tables**: the poem, the parrot's gossip and the six-package catalog

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod content;
pub mod deployment;
pub mod gossip;
pub mod poem;

pub use catalog::default_catalog;
pub use content::ContentRegistry;
pub use deployment::DeploymentRegistry;
pub use gossip::default_profile;
pub use poem::default_stanzas;
