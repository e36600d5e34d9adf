//! Sandbox configuration — optional YAML file tuning the host program.
//!
//! Resolution: `--config <path>` → `.sandbox/config.yaml` → built-in defaults.
//! An explicit path must exist; the project file is optional.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{SandboxError, SandboxResult};
use crate::stream::DEFAULT_INTERVAL;

/// Project-level config location, relative to the working directory.
pub const PROJECT_CONFIG_PATH: &str = ".sandbox/config.yaml";

fn default_thought_interval_ms() -> u64 {
    DEFAULT_INTERVAL.as_millis() as u64
}

fn default_render_fps() -> u32 {
    30
}

/// Above this a frame would be shorter than the 1 ms timer resolution.
pub const MAX_RENDER_FPS: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SandboxConfig {
    /// Milliseconds between generated thoughts.
    #[serde(default = "default_thought_interval_ms")]
    pub thought_interval_ms: u64,
    /// Frame rate of the dashboard.
    #[serde(default = "default_render_fps")]
    pub render_fps: u32,
    /// Seed for pattern sampling. Unseeded when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            thought_interval_ms: default_thought_interval_ms(),
            render_fps: default_render_fps(),
            seed: None,
        }
    }
}

impl SandboxConfig {
    /// Load from an explicit path, or the project file if it exists.
    pub fn load(explicit: Option<&Path>) -> SandboxResult<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let path = Path::new(PROJECT_CONFIG_PATH);
                if path.exists() {
                    Self::from_file(path)
                } else {
                    debug!("no project config, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Read and validate a YAML config file.
    pub fn from_file(path: &Path) -> SandboxResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| SandboxError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&content).map_err(|e| match e {
            SandboxError::ConfigParse { source, .. } => SandboxError::ConfigParse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;
        debug!(path = %path.display(), ?config, "config loaded");
        Ok(config)
    }

    /// Parse and validate YAML text.
    pub fn from_yaml(content: &str) -> SandboxResult<Self> {
        // An empty document means "all defaults".
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content).map_err(|source| {
            SandboxError::ConfigParse {
                path: PathBuf::from("<inline>"),
                source,
            }
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> SandboxResult<()> {
        if self.thought_interval_ms == 0 {
            return Err(SandboxError::InvalidConfig(
                "thought_interval_ms must be greater than 0".into(),
            ));
        }
        if self.render_fps == 0 || self.render_fps > MAX_RENDER_FPS {
            return Err(SandboxError::InvalidConfig(format!(
                "render_fps must be between 1 and {MAX_RENDER_FPS}"
            )));
        }
        Ok(())
    }

    pub fn thought_interval(&self) -> Duration {
        Duration::from_millis(self.thought_interval_ms)
    }

    pub fn frame_interval(&self) -> Duration {
        // Never zero: tokio intervals reject a zero period.
        Duration::from_millis((1000 / u64::from(self.render_fps).max(1)).max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults() {
        let config = SandboxConfig::default();
        assert_eq!(config.thought_interval(), Duration::from_millis(2000));
        assert_eq!(config.render_fps, 30);
        assert_eq!(config.frame_interval(), Duration::from_millis(33));
        assert!(config.seed.is_none());
    }

    #[test]
    fn partial_yaml_fills_defaults() {
        let config = SandboxConfig::from_yaml("seed: 9\n").unwrap();
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.thought_interval_ms, 2000);
    }

    #[test]
    fn empty_yaml_is_default() {
        assert_eq!(SandboxConfig::from_yaml("").unwrap(), SandboxConfig::default());
    }

    #[test]
    fn zero_interval_rejected() {
        let err = SandboxConfig::from_yaml("thought_interval_ms: 0\n").unwrap_err();
        assert!(matches!(err, SandboxError::InvalidConfig(_)));
    }

    #[test]
    fn zero_fps_rejected() {
        let err = SandboxConfig::from_yaml("render_fps: 0\n").unwrap_err();
        assert!(matches!(err, SandboxError::InvalidConfig(_)));
    }

    #[test]
    fn fps_above_timer_resolution_rejected() {
        let err = SandboxConfig::from_yaml("render_fps: 2000\n").unwrap_err();
        assert!(matches!(err, SandboxError::InvalidConfig(_)));
        assert!(SandboxConfig::from_yaml("render_fps: 1000\n").is_ok());
    }

    #[test]
    fn frame_interval_never_zero() {
        let config = SandboxConfig {
            render_fps: 5000,
            ..SandboxConfig::default()
        };
        assert_eq!(config.frame_interval(), Duration::from_millis(1));
    }

    #[test]
    fn malformed_yaml_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "render_fps: [not, a, number]\n").unwrap();
        let err = SandboxConfig::from_file(&path).unwrap_err();
        match err {
            SandboxError::ConfigParse { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_explicit_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.yaml");
        let err = SandboxConfig::load(Some(&path)).unwrap_err();
        assert!(matches!(err, SandboxError::ConfigRead { .. }));
    }

    #[test]
    fn round_trip_yaml() {
        let config = SandboxConfig {
            thought_interval_ms: 500,
            render_fps: 60,
            seed: Some(3),
        };
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert_eq!(SandboxConfig::from_yaml(&yaml).unwrap(), config);
    }
}
