//! # GINI Core
//!
//! Core types shared by every GINI component.
//!
//! This crate provides the foundational vocabulary of the servers:
//! - The unified error type
//! - The IaaS layer classification
//! - Deployment records and catalog entries
//! - Poem stanzas and the gossip profile

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod content;
pub mod deployment;
pub mod error;
pub mod types;

pub use content::{GossipProfile, Stanza};
pub use deployment::{DeploymentRecord, PackageSpec};
pub use error::{Error, Result};
pub use types::Layer;
