//! Engine configuration

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use gauge_core::GaugeError;
use serde::{Deserialize, Serialize};
use tracing::info;
use crate::cache::DEFAULT_WARN_THRESHOLD;

/// Environment variable holding the path of a JSON config file
pub const CONFIG_ENV: &str = "GAUGE_CONFIG";

/// Settings for a [`UnitAlgebra`](crate::UnitAlgebra).
///
/// ```json
/// { "named_results": true, "cache_warn_threshold": 1024 }
/// ```
///
/// Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlgebraConfig {
    /// Collapse known combinations (distance / time, ...) into named units
    pub named_results: bool,
    /// Cache size past which a warning is logged
    pub cache_warn_threshold: usize,
}

impl Default for AlgebraConfig {
    fn default() -> Self {
        Self {
            named_results: true,
            cache_warn_threshold: DEFAULT_WARN_THRESHOLD,
        }
    }
}

impl AlgebraConfig {
    pub fn from_json(json: &str) -> Result<Self, GaugeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GaugeError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| GaugeError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&content)?;
        info!(path = %path.display(), ?config, "loaded algebra config");
        Ok(config)
    }

    /// Load the file named by `GAUGE_CONFIG`, or the defaults when it is unset
    pub fn from_env() -> Result<Self, GaugeError> {
        Self::from_optional_path(env::var_os(CONFIG_ENV).map(PathBuf::from))
    }

    fn from_optional_path(path: Option<PathBuf>) -> Result<Self, GaugeError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = env::temp_dir().join(format!("gauge-{}-{}.json", name, std::process::id()));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let config = AlgebraConfig::default();
        assert!(config.named_results);
        assert_eq!(config.cache_warn_threshold, 1024);
    }

    #[test]
    fn test_from_json_partial() {
        let config = AlgebraConfig::from_json(r#"{ "named_results": false }"#).unwrap();
        assert!(!config.named_results);
        assert_eq!(config.cache_warn_threshold, DEFAULT_WARN_THRESHOLD);

        let config = AlgebraConfig::from_json("{}").unwrap();
        assert_eq!(config, AlgebraConfig::default());
    }

    #[test]
    fn test_from_json_invalid() {
        let err = AlgebraConfig::from_json(r#"{ "named_results": "yes" }"#).unwrap_err();
        assert!(matches!(err, GaugeError::ConfigParse(_)));
    }

    #[test]
    fn test_load() {
        let path = temp_file("load", r#"{ "cache_warn_threshold": 16 }"#);
        let config = AlgebraConfig::load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(config.cache_warn_threshold, 16);
        assert!(config.named_results);
    }

    #[test]
    fn test_load_missing_file() {
        let err = AlgebraConfig::load("/nonexistent/gauge.json").unwrap_err();
        assert!(matches!(err, GaugeError::ConfigIo { .. }));
        assert!(err.to_string().contains("/nonexistent/gauge.json"));
    }

    #[test]
    fn test_optional_path() {
        assert_eq!(AlgebraConfig::from_optional_path(None).unwrap(), AlgebraConfig::default());

        let path = temp_file("env", r#"{ "named_results": false }"#);
        let config = AlgebraConfig::from_optional_path(Some(path.clone())).unwrap();
        fs::remove_file(&path).unwrap();
        assert!(!config.named_results);
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&AlgebraConfig::default()).unwrap();
        assert_eq!(json, r#"{"named_results":true,"cache_warn_threshold":1024}"#);
    }
}
