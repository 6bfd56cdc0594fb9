//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only receives the values it needs
//! (vehicle types, initial capacity).
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, `CARPARK_` prefix, `__` between sections
//!    (e.g. `CARPARK_LOT__INITIAL_CAPACITY=6`,
//!    `CARPARK_LOT__VEHICLE_TYPES=Mobil,Motor`)
//! 3. Config file (`--config FILE`, or the platform default if present)
//! 4. Built-in defaults (always present)

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Lot settings.
    pub lot: LotConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LotConfig {
    /// Vehicle types the lot admits, matched case-insensitively.
    pub vehicle_types: Vec<String>,
    /// Create a lot of this size when a session starts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_capacity: Option<NonZeroUsize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// Prompt shown by the interactive shell.
    pub prompt: String,
}

impl Default for LotConfig {
    fn default() -> Self {
        Self {
            vehicle_types: vec!["Mobil".into(), "Motor".into()],
            initial_capacity: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            prompt: "> ".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration on top of the built-in defaults.
    ///
    /// A file passed via `--config` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let file = match config_file {
            Some(path) => config::File::from(path.as_path()).required(true),
            None => config::File::from(Self::config_path()).required(false),
        };

        let env = config::Environment::with_prefix("CARPARK")
            .prefix_separator("_")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("lot.vehicle_types")
            .try_parsing(true);

        let settings = config::Config::builder()
            .add_source(file)
            .add_source(env)
            .build()
            .context("Failed to read configuration")?;

        settings
            .try_deserialize()
            .context("Configuration has invalid values")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.carpark.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "carpark", "carpark")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".carpark.toml"))
    }

    /// Render as the TOML written by `carpark init` and shown by
    /// `carpark config list`.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Write this configuration to `path`, creating parent directories.
    pub fn write_to(&self, path: &Path) -> anyhow::Result<()> {
        let toml = self.to_toml().context("Failed to serialise config")?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory '{}'", parent.display())
            })?;
        }
        std::fs::write(path, toml)
            .with_context(|| format!("Failed to write config to '{}'", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn default_types_are_mobil_and_motor() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.lot.vehicle_types, ["Mobil", "Motor"]);
        assert_eq!(cfg.lot.initial_capacity, None);
    }

    #[test]
    fn default_prompt() {
        assert_eq!(AppConfig::default().output.prompt, "> ");
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn load_from_file_overrides_defaults() {
        let file = write_config(
            r#"
[lot]
vehicle_types = ["Bus", "Truk"]
initial_capacity = 4
"#,
        );
        let path = file.path().to_path_buf();
        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.lot.vehicle_types, ["Bus", "Truk"]);
        assert_eq!(cfg.lot.initial_capacity.map(NonZeroUsize::get), Some(4));
        assert_eq!(cfg.output.prompt, "> ");
    }

    #[test]
    fn zero_capacity_in_file_is_rejected() {
        let file = write_config("[lot]\ninitial_capacity = 0\n");
        let path = file.path().to_path_buf();
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn write_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("carpark.toml");
        let mut cfg = AppConfig::default();
        cfg.output.prompt = "lot> ".into();
        cfg.write_to(&path).unwrap();

        let loaded = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(loaded.output.prompt, "lot> ");
        assert_eq!(loaded.lot.vehicle_types, cfg.lot.vehicle_types);
    }

    #[test]
    fn toml_omits_unset_capacity() {
        let toml = AppConfig::default().to_toml().unwrap();
        assert!(toml.contains("vehicle_types"));
        assert!(!toml.contains("initial_capacity"));
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
