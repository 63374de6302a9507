use primix_core::{BasisError, GridOrigin, PrimaryBasis, DEFAULT_STEP};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when `CONFIG_FILE` is unset.
pub const DEFAULT_CONFIG_FILE: &str = "primix.yaml";

/// Application configuration loaded from primix.yaml
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Default primaries as hex strings, used when a request omits them
    #[serde(default = "default_primaries")]
    pub primaries: Vec<String>,

    /// Coverage scan defaults and limits
    #[serde(default)]
    pub coverage: CoverageConfig,
}

fn default_primaries() -> Vec<String> {
    vec![
        "#FF0000".to_string(),
        "#00FF00".to_string(),
        "#0000FF".to_string(),
    ]
}

/// Coverage scan settings
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct CoverageConfig {
    /// Grid step used when a request does not name one
    #[serde(default = "default_step")]
    pub step: u32,

    /// Grid origin convention
    #[serde(default)]
    pub origin: GridOrigin,

    /// Smallest step the HTTP API accepts (bounds scan latency)
    #[serde(default = "default_min_step")]
    pub min_step: u32,
}

fn default_step() -> u32 {
    DEFAULT_STEP
}

fn default_min_step() -> u32 {
    4 // 64^3 = 262144 samples
}

impl Default for CoverageConfig {
    fn default() -> Self {
        Self {
            step: default_step(),
            origin: GridOrigin::default(),
            min_step: default_min_step(),
        }
    }
}

impl AppConfig {
    /// Resolve the config file from `CONFIG_FILE`, falling back to
    /// `primix.yaml` in the working directory, then to built-in defaults.
    pub fn from_env() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from_file(&path),
            None => {
                tracing::debug!("No config file, using defaults");
                Self::default()
            }
        }
    }

    /// The config file that [`from_env`](Self::from_env) would read, if any.
    pub fn config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("CONFIG_FILE") {
            return Some(PathBuf::from(path));
        }
        let local = PathBuf::from(DEFAULT_CONFIG_FILE);
        local.exists().then_some(local)
    }

    /// Load configuration from a YAML file.
    ///
    /// A missing, unreadable or invalid file logs a warning and yields the
    /// defaults.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml_str(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        primaries = ?config.primaries,
                        step = config.coverage.step,
                        origin = %config.coverage.origin,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), %e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), %e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Parse and validate a YAML document.
    pub fn from_yaml_str(yaml: &str) -> anyhow::Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        self.basis()?;
        let CoverageConfig { step, min_step, .. } = self.coverage;
        if !(1..=255).contains(&step) {
            anyhow::bail!("coverage.step must be between 1 and 255, got {step}");
        }
        if min_step == 0 || min_step > step {
            anyhow::bail!("coverage.min_step must be between 1 and coverage.step ({step}), got {min_step}");
        }
        Ok(())
    }

    /// The configured default primaries.
    pub fn basis(&self) -> Result<PrimaryBasis, BasisError> {
        PrimaryBasis::from_hex(self.primaries.as_slice())
    }

    /// The configured default primaries, or red/green/blue if they don't
    /// parse.
    pub fn default_basis(&self) -> PrimaryBasis {
        self.basis().unwrap_or_default()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            primaries: default_primaries(),
            coverage: CoverageConfig::default(),
        }
    }
}
