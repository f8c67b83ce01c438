//! Configuration management for the GINI CLI.
//!
//! Configuration is loaded from (in order of precedence):
//! 1. Command-line arguments
//! 2. Environment variables (GINI_*)
//! 3. Config file (~/.config/gini/config.toml)
//! 4. Default values

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use gini_server::Variant;
use serde::{Deserialize, Serialize};

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Server host.
    #[serde(default = "default_host")]
    pub server_host: String,

    /// Server port.
    #[serde(default = "default_port")]
    pub server_port: u16,

    /// Which server to run.
    #[serde(default)]
    pub variant: Variant,

    /// Directory served under /static.
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    /// Enable permissive CORS.
    #[serde(default = "default_cors")]
    pub cors: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("./static")
}

fn default_cors() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: default_host(),
            server_port: default_port(),
            variant: Variant::default(),
            static_dir: default_static_dir(),
            cors: default_cors(),
        }
    }
}

impl Config {
    /// Loads configuration from all sources.
    ///
    /// Reports warnings for configuration errors but falls back to defaults.
    pub fn load() -> Self {
        let config_path = Self::config_path();

        match Self::figment(&config_path).extract::<Config>() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("\x1b[33mWarning:\x1b[0m Configuration error, using defaults");
                eprintln!("  Config file: {}", config_path.display());
                eprintln!("  Error: {}", e);
                eprintln!();
                eprintln!("  To fix, edit or delete the config file:");
                eprintln!("    rm {}", config_path.display());
                eprintln!();
                Config::default()
            }
        }
    }

    fn figment(config_path: &Path) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_path))
            .merge(Env::prefixed("GINI_"))
    }

    /// Returns the path to the config file.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Returns the path to the config directory.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gini")
    }

    /// Saves the current configuration to the config file.
    pub fn save(&self) -> Result<(), std::io::Error> {
        self.save_to(&Self::config_path())
    }

    fn save_to(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }

        let toml_str = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

        std::fs::write(path, toml_str)?;
        Ok(())
    }

    /// Sets the default variant and saves.
    pub fn set_variant(&mut self, variant: Variant) -> Result<(), std::io::Error> {
        self.variant = variant;
        self.save()
    }

    /// Restores every setting to its default and saves.
    pub fn reset(&mut self) -> Result<(), std::io::Error> {
        *self = Config::default();
        self.save()
    }
}

/// Prints the current configuration and its sources.
pub fn show_config() {
    let config = Config::load();
    let config_path = Config::config_path();

    println!("GINI Configuration");
    println!("==================\n");

    println!("Config file: {}", config_path.display());
    if config_path.exists() {
        println!("Status: Found\n");
    } else {
        println!("Status: Not found (using defaults)\n");
    }

    println!("Current settings:");
    println!("  server_host: {}", config.server_host);
    println!("  server_port: {}", config.server_port);
    println!("  variant: {}", config.variant);
    println!("  static_dir: {}", config.static_dir.display());
    println!("  cors: {}", config.cors);

    println!("\nEnvironment variables:");
    println!("  GINI_SERVER_HOST");
    println!("  GINI_SERVER_PORT");
    println!("  GINI_VARIANT");
    println!("  GINI_STATIC_DIR");
    println!("  GINI_CORS");
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults_without_sources() {
        Jail::expect_with(|jail| {
            let path = jail.directory().join("config.toml");
            let config: Config = Config::figment(&path).extract()?;

            assert_eq!(config, Config::default());
            assert_eq!(config.server_port, 8080);
            assert_eq!(config.variant, Variant::Poem);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r#"
                server_port = 9000
                variant = "gossip"
                "#,
            )?;
            jail.set_env("GINI_SERVER_PORT", "9100");

            let path = jail.directory().join("config.toml");
            let config: Config = Config::figment(&path).extract()?;

            assert_eq!(config.server_port, 9100);
            assert_eq!(config.variant, Variant::Gossip);
            assert_eq!(config.server_host, "0.0.0.0");
            Ok(())
        });
    }

    #[test]
    fn test_invalid_variant_is_an_error() {
        Jail::expect_with(|jail| {
            jail.set_env("GINI_VARIANT", "opera");

            let path = jail.directory().join("config.toml");
            assert!(Config::figment(&path).extract::<Config>().is_err());
            Ok(())
        });
    }

    #[test]
    fn test_save_round_trips() {
        Jail::expect_with(|jail| {
            let path = jail.directory().join("nested").join("config.toml");
            let config = Config {
                server_port: 3000,
                variant: Variant::Gossip,
                cors: false,
                ..Config::default()
            };

            config.save_to(&path).map_err(|e| e.to_string())?;
            let loaded: Config = Config::figment(&path).extract()?;

            assert_eq!(loaded, config);
            Ok(())
        });
    }
}
