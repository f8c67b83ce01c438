//! HTML shell pages, one per variant.

/// Landing page of the questioning parrot.
pub const GOSSIP_INDEX: &str = include_str!("../assets/gossip.html");

/// Landing page of the consciousness mirror.
pub const POEM_INDEX: &str = include_str!("../assets/poem.html");
