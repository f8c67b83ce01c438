//! CLI command implementations.

use std::net::SocketAddr;
use std::path::PathBuf;

use color_eyre::eyre::{eyre, Result};

use gini_core::Layer;
use gini_registry::{default_catalog, default_stanzas, ContentRegistry};
use gini_server::{Server, ServerConfig, Variant};

/// Start a GINI server.
pub async fn serve(
    host: String,
    port: u16,
    variant: Variant,
    static_dir: PathBuf,
    cors: bool,
) -> Result<()> {
    tracing::info!(variant = %variant, "Starting GINI server...");

    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .map_err(|e| eyre!("Invalid listen address {}:{}: {}", host, port, e))?;
    let config = ServerConfig::builder()
        .addr(addr)
        .variant(variant)
        .static_dir(static_dir)
        .cors(cors)
        .build();

    let server = Server::new(config);
    server.run().await?;

    Ok(())
}

/// Print the annotated poem, optionally restricted to one layer.
pub fn poem(layer: Option<Layer>) {
    let registry = ContentRegistry::new(default_stanzas());

    let stanzas = match layer {
        Some(layer) => registry.by_layer(layer),
        None => registry.iter().collect(),
    };

    for stanza in stanzas {
        println!("{:>2}. {}", stanza.line, stanza.text);
        println!("    {} [{}] ({})", stanza.meaning, stanza.iaas_layer, stanza.package);
    }
}

/// Print the deploy catalog.
pub fn catalog() {
    println!("{:<16} {:<8} LAYER", "PACKAGE", "VERSION");
    for spec in default_catalog() {
        println!("{:<16} {:<8} {}", spec.name, spec.version, spec.layer);
    }
}

/// Display version and build info.
pub fn version() {
    println!("gini {}", env!("CARGO_PKG_VERSION"));
    println!("Variants: gossip | poem");
    println!(
        "Layers:   {}",
        Layer::ALL
            .iter()
            .map(Layer::as_str)
            .collect::<Vec<_>>()
            .join(" | ")
    );
}
