//! Binding-layer configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::view::DispatchCadence;

/// Configuration for the binding layer.
///
/// # Example
///
/// ```ignore
/// use viewbind::config::BindConfig;
/// use viewbind::view::DispatchCadence;
///
/// let config = BindConfig::default().with_inset_cadence(DispatchCadence::OncePerAttach);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BindConfig {
    /// How often inset events are delivered to the view chain.
    pub inset_cadence: DispatchCadence,
}

impl BindConfig {
    /// Configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the inset dispatch cadence.
    pub fn with_inset_cadence(mut self, cadence: DispatchCadence) -> Self {
        self.inset_cadence = cadence;
        self
    }

    /// Parse configuration from a JSON string.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&text)?;
        tracing::debug!(?path, ?config, "config loaded");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_cadence_is_every_event() {
        let config = BindConfig::default();
        assert_eq!(config.inset_cadence, DispatchCadence::EveryEvent);
    }

    #[test]
    fn test_builder_sets_cadence() {
        let config = BindConfig::new().with_inset_cadence(DispatchCadence::OncePerAttach);
        assert_eq!(config.inset_cadence, DispatchCadence::OncePerAttach);
    }

    #[test]
    fn test_from_json() {
        let config = BindConfig::from_json(r#"{"inset_cadence": "once_per_attach"}"#).unwrap();
        assert_eq!(config.inset_cadence, DispatchCadence::OncePerAttach);
    }

    #[test]
    fn test_from_json_missing_fields_use_defaults() {
        let config = BindConfig::from_json("{}").unwrap();
        assert_eq!(config, BindConfig::default());
    }

    #[test]
    fn test_from_json_rejects_unknown_cadence() {
        let err = BindConfig::from_json(r#"{"inset_cadence": "sometimes"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_json_round_trip() {
        let config = BindConfig::new().with_inset_cadence(DispatchCadence::OncePerAttach);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(BindConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"inset_cadence": "once_per_attach"}}"#).unwrap();

        let config = BindConfig::load(file.path()).unwrap();
        assert_eq!(config.inset_cadence, DispatchCadence::OncePerAttach);
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = BindConfig::load(Path::new("/nonexistent/viewbind.json")).unwrap_err();
        match err {
            ConfigError::Io { path, .. } => {
                assert_eq!(path, Path::new("/nonexistent/viewbind.json"));
            }
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
