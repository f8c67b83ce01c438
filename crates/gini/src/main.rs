//! # GINI CLI
//!
//! *"Gini?" means "What?" in Igbo.*
//!
//! Runs the questioning parrot or the consciousness mirror.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;

use gini_core::Layer;
use gini_server::Variant;

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "gini")]
#[command(author = "OBINexus Engineering")]
#[command(version)]
#[command(about = "The questioning parrot and the consciousness mirror", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,

    /// Enable JSON logging
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a server
    Serve {
        /// Host to bind to
        #[arg(short = 'H', long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Which server to run (gossip or poem)
        #[arg(short, long)]
        variant: Option<Variant>,

        /// Directory served under /static
        #[arg(long)]
        static_dir: Option<PathBuf>,

        /// Disable CORS
        #[arg(long)]
        no_cors: bool,
    },

    /// Print the annotated poem
    Poem {
        /// Only show stanzas of this layer
        #[arg(long)]
        layer: Option<Layer>,
    },

    /// Print the deploy catalog
    Catalog,

    /// Display version and build info
    Version,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,

    /// Set the default variant
    SetVariant {
        /// gossip or poem
        variant: Variant,
    },

    /// Restore default settings
    Reset,

    /// Show config file path
    Path,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    // Initialize logging
    let telemetry_config =
        gini_telemetry::TelemetryConfig::new("gini").with_log_level(&cli.log_level);

    let telemetry_config = if cli.json_logs {
        telemetry_config.with_json_logs()
    } else {
        telemetry_config
    };

    gini_telemetry::init_logging(&telemetry_config)?;

    // Load configuration for default values
    let cfg = config::Config::load();

    match cli.command {
        Commands::Serve {
            host,
            port,
            variant,
            static_dir,
            no_cors,
        } => {
            commands::serve(
                host.unwrap_or(cfg.server_host),
                port.unwrap_or(cfg.server_port),
                variant.unwrap_or(cfg.variant),
                static_dir.unwrap_or(cfg.static_dir),
                cfg.cors && !no_cors,
            )
            .await?;
        }

        Commands::Poem { layer } => commands::poem(layer),

        Commands::Catalog => commands::catalog(),

        Commands::Version => commands::version(),

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                config::show_config();
            }
            ConfigAction::SetVariant { variant } => {
                let mut cfg = cfg;
                match cfg.set_variant(variant) {
                    Ok(()) => {
                        println!("Default variant set to: {}", variant);
                        println!("Config saved to: {}", config::Config::config_path().display());
                    }
                    Err(e) => {
                        eprintln!("Failed to save config: {}", e);
                    }
                }
            }
            ConfigAction::Reset => {
                let mut cfg = cfg;
                match cfg.reset() {
                    Ok(()) => {
                        println!("Configuration reset to defaults.");
                    }
                    Err(e) => {
                        eprintln!("Failed to save config: {}", e);
                    }
                }
            }
            ConfigAction::Path => {
                println!("{}", config::Config::config_path().display());
            }
        },
    }

    Ok(())
}
