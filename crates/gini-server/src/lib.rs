//! # GINI Server
//!
//! HTTP API server for the questioning parrot and the consciousness mirror.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod pages;
pub mod server;

pub use server::{AppState, Content, Server, ServerConfig, ServerConfigBuilder, Variant};
