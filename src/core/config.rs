//! # Configuration
//!
//! Box count and starting refresh rate, with a clear override hierarchy:
//! defaults → config file → CLI flags.
//!
//! Config lives at `~/.bouncebox/config.toml` unless `--config` points
//! elsewhere. A missing default file just means defaults. A field with a
//! bad value is dropped on its own; the rest of the file still applies.

use log::{debug, info, warn};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::state::MIN_REFRESH_MS;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct BounceConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct GeneralConfig {
    pub box_count: Option<usize>,
    pub refresh_ms: Option<u64>,
}

/// Values given on the command line. `None` = flag not passed.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub box_count: Option<usize>,
    pub refresh_ms: Option<u64>,
}

/// A config file after loading, plus whatever was wrong with it.
///
/// `problems` holds every rejected field (`Invalid`), or the single
/// `Io`/`Parse` error that made the whole file unusable.
#[derive(Debug, Default)]
pub struct LoadedConfig {
    pub config: BounceConfig,
    pub problems: Vec<ConfigError>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BOX_COUNT: usize = 10;
pub const DEFAULT_REFRESH_MS: u64 = 100;
/// Index labels are two digits wide.
pub const MAX_BOX_COUNT: usize = 99;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub box_count: usize,
    pub refresh_ms: u64,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve(&BounceConfig::default(), &CliOverrides::default())
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

// ============================================================================
// Validation
// ============================================================================

impl BounceConfig {
    /// Clears every out-of-range field and reports one `Invalid` per field.
    pub fn discard_invalid(&mut self) -> Vec<ConfigError> {
        let mut problems = Vec::new();
        if let Some(n) = self.general.box_count
            && !(1..=MAX_BOX_COUNT).contains(&n)
        {
            problems.push(ConfigError::Invalid(format!(
                "box_count must be between 1 and {MAX_BOX_COUNT}, got {n}"
            )));
            self.general.box_count = None;
        }
        problems
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.bouncebox/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".bouncebox").join("config.toml"))
}

/// Load config from `explicit` if given, otherwise from the default path.
///
/// A missing default file yields an empty `LoadedConfig`. A missing
/// explicit file is an `Io` error and malformed TOML a `Parse` error.
/// Out-of-range fields are not errors here; they land in `problems`.
pub fn load_config(explicit: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Some(p) if p.exists() => p,
            Some(p) => {
                debug!("No config file at {}, using defaults", p.display());
                return Ok(LoadedConfig::default());
            }
            None => {
                warn!("Could not determine home directory, using default config");
                return Ok(LoadedConfig::default());
            }
        },
    };

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let loaded = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    Ok(loaded)
}

/// Parse TOML config contents, dropping out-of-range fields.
pub fn parse_config(contents: &str) -> Result<LoadedConfig, ConfigError> {
    let mut config: BounceConfig = toml::from_str(contents).map_err(ConfigError::Parse)?;
    let problems = config.discard_invalid();
    debug!("Config: {:?}", config);
    Ok(LoadedConfig { config, problems })
}

/// Like `load_config`, but an unusable file becomes a problem on an
/// otherwise default config instead of an error.
pub fn load_or_default(explicit: Option<&Path>) -> LoadedConfig {
    load_config(explicit).unwrap_or_else(|e| LoadedConfig {
        config: BounceConfig::default(),
        problems: vec![e],
    })
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → CLI.
///
/// Box counts are range-checked where they enter (file validation, clap),
/// not here. A refresh interval below the floor is clamped, not rejected.
pub fn resolve(config: &BounceConfig, cli: &CliOverrides) -> ResolvedConfig {
    let box_count = cli
        .box_count
        .or(config.general.box_count)
        .unwrap_or(DEFAULT_BOX_COUNT);

    let refresh_ms = cli
        .refresh_ms
        .or(config.general.refresh_ms)
        .unwrap_or(DEFAULT_REFRESH_MS);
    if refresh_ms < MIN_REFRESH_MS {
        warn!("refresh_ms {} below minimum, using {}", refresh_ms, MIN_REFRESH_MS);
    }

    ResolvedConfig {
        box_count,
        refresh_ms: refresh_ms.max(MIN_REFRESH_MS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve(&BounceConfig::default(), &CliOverrides::default());
        assert_eq!(resolved.box_count, DEFAULT_BOX_COUNT);
        assert_eq!(resolved.refresh_ms, DEFAULT_REFRESH_MS);
        assert_eq!(resolved, ResolvedConfig::default());
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = BounceConfig {
            general: GeneralConfig {
                box_count: Some(5),
                refresh_ms: Some(250),
            },
        };
        let resolved = resolve(&config, &CliOverrides::default());
        assert_eq!(resolved.box_count, 5);
        assert_eq!(resolved.refresh_ms, 250);
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = BounceConfig {
            general: GeneralConfig {
                box_count: Some(5),
                refresh_ms: Some(250),
            },
        };
        let cli = CliOverrides {
            box_count: Some(8),
            refresh_ms: None,
        };
        let resolved = resolve(&config, &cli);
        assert_eq!(resolved.box_count, 8);
        assert_eq!(resolved.refresh_ms, 250);
    }

    #[test]
    fn test_resolve_clamps_refresh_to_floor() {
        let cli = CliOverrides {
            refresh_ms: Some(1),
            ..Default::default()
        };
        let resolved = resolve(&BounceConfig::default(), &cli);
        assert_eq!(resolved.refresh_ms, MIN_REFRESH_MS);
    }

    #[test]
    fn test_toml_parses() {
        let toml_str = r#"
[general]
box_count = 12
refresh_ms = 50
"#;
        let loaded = parse_config(toml_str).unwrap();
        assert!(loaded.problems.is_empty());
        assert_eq!(loaded.config.general.box_count, Some(12));
        assert_eq!(loaded.config.general.refresh_ms, Some(50));
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[general]
refresh_ms = 40
"#;
        let loaded = parse_config(toml_str).unwrap();
        assert_eq!(loaded.config.general.refresh_ms, Some(40));
        assert!(loaded.config.general.box_count.is_none());

        let empty = parse_config("").unwrap();
        assert!(empty.config.general.refresh_ms.is_none());
        assert!(empty.problems.is_empty());
    }

    #[test]
    fn test_box_count_out_of_range_is_reported() {
        for bad in ["box_count = 0", "box_count = 100"] {
            let toml_str = format!("[general]\n{bad}\n");
            let loaded = parse_config(&toml_str).unwrap();
            assert_eq!(loaded.problems.len(), 1, "{bad}");
            assert!(matches!(loaded.problems[0], ConfigError::Invalid(_)));
            assert!(loaded.config.general.box_count.is_none());
        }
    }

    #[test]
    fn test_bad_field_keeps_valid_fields() {
        let loaded = parse_config("[general]\nbox_count = 150\nrefresh_ms = 50\n").unwrap();
        assert_eq!(
            loaded.problems[0].to_string(),
            "invalid config: box_count must be between 1 and 99, got 150"
        );

        let resolved = resolve(&loaded.config, &CliOverrides::default());
        assert_eq!(resolved.box_count, DEFAULT_BOX_COUNT);
        assert_eq!(resolved.refresh_ms, 50);
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = parse_config("[general\nbox_count = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_explicit_file_is_io_error() {
        let err = load_config(Some(Path::new("/nonexistent/bouncebox/config.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
        assert!(err.to_string().starts_with("config I/O error"));
    }

    #[test]
    fn test_load_or_default_falls_back_with_problem() {
        let loaded = load_or_default(Some(Path::new("/nonexistent/bouncebox/config.toml")));
        assert_eq!(loaded.problems.len(), 1);
        assert!(matches!(loaded.problems[0], ConfigError::Io(_)));

        let resolved = resolve(&loaded.config, &CliOverrides::default());
        assert_eq!(resolved, ResolvedConfig::default());
    }

    #[test]
    fn test_load_or_default_reads_file_with_bad_field() {
        let path = std::env::temp_dir().join(format!(
            "bouncebox-config-test-{}.toml",
            std::process::id()
        ));
        fs::write(&path, "[general]\nbox_count = 0\nrefresh_ms = 30\n").unwrap();

        let loaded = load_or_default(Some(&path));
        let _ = fs::remove_file(&path);

        assert_eq!(loaded.problems.len(), 1);
        assert!(matches!(loaded.problems[0], ConfigError::Invalid(_)));
        let resolved = resolve(&loaded.config, &CliOverrides::default());
        assert_eq!(resolved.box_count, DEFAULT_BOX_COUNT);
        assert_eq!(resolved.refresh_ms, 30);
    }
}
