use crate::error::{HeroError, Result};
use crate::flow::FlowKind;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// JourneyConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JourneyConfig {
    #[serde(default = "default_flow")]
    pub flow: FlowKind,
}

fn default_flow() -> FlowKind {
    FlowKind::Express
}

impl Default for JourneyConfig {
    fn default() -> Self {
        Self {
            flow: default_flow(),
        }
    }
}

// ---------------------------------------------------------------------------
// RemoteConfig / OracleConfig / UserConfig
// ---------------------------------------------------------------------------

/// Remote session store. Absent URL means sessions stay local-only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoteConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Content-generation endpoint. Absent URL means the built-in scripted
/// generator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OracleConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

// ---------------------------------------------------------------------------
// Config (top-level)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub journey: JourneyConfig,
    #[serde(default)]
    pub remote: RemoteConfig,
    #[serde(default)]
    pub oracle: OracleConfig,
    #[serde(default)]
    pub user: UserConfig,
}

fn default_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            journey: JourneyConfig::default(),
            remote: RemoteConfig::default(),
            oracle: OracleConfig::default(),
            user: UserConfig::default(),
        }
    }
}

impl Config {
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Err(HeroError::NotInitialized);
        }
        let data = std::fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::config_path(root);
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if self.version != 1 {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: format!("unknown config version {}", self.version),
            });
        }

        if let Some(id) = &self.user.id {
            if paths::validate_user_id(id).is_err() {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Error,
                    message: format!(
                        "user.id '{id}' is not a valid user id (lowercase alphanumeric with hyphens)"
                    ),
                });
            }
            if self.remote.url.is_none() {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: "user.id is set but remote.url is not; sessions stay local".to_string(),
                });
            }
        }

        for (field, url) in [
            ("remote.url", &self.remote.url),
            ("oracle.url", &self.oracle.url),
        ] {
            if let Some(url) = url {
                if !url.starts_with("http://") && !url.starts_with("https://") {
                    warnings.push(ConfigWarning {
                        level: WarnLevel::Warning,
                        message: format!("{field} '{url}' does not look like an http(s) URL"),
                    });
                }
            }
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_are_express_and_local() {
        let cfg = Config::default();
        assert_eq!(cfg.version, 1);
        assert_eq!(cfg.journey.flow, FlowKind::Express);
        assert!(cfg.remote.url.is_none());
        assert!(cfg.user.id.is_none());
        assert!(cfg.validate().is_empty());
    }

    #[test]
    fn load_missing_is_not_initialized() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            Config::load(dir.path()),
            Err(HeroError::NotInitialized)
        ));
    }

    #[test]
    fn save_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let mut cfg = Config::default();
        cfg.journey.flow = FlowKind::Guided;
        cfg.remote.url = Some("http://localhost:4177".to_string());
        cfg.user.id = Some("cosmic-wanderer".to_string());
        cfg.save(dir.path()).unwrap();

        let loaded = Config::load(dir.path()).unwrap();
        assert_eq!(loaded.journey.flow, FlowKind::Guided);
        assert_eq!(loaded.remote.url.as_deref(), Some("http://localhost:4177"));
        assert_eq!(loaded.user.id.as_deref(), Some("cosmic-wanderer"));
    }

    #[test]
    fn partial_yaml_fills_defaults() {
        let cfg: Config = serde_yaml::from_str("journey:\n  flow: guided\n").unwrap();
        assert_eq!(cfg.version, 1);
        assert_eq!(cfg.journey.flow, FlowKind::Guided);
        assert!(cfg.remote.url.is_none());
    }

    #[test]
    fn validate_flags_bad_user_id() {
        let mut cfg = Config::default();
        cfg.user.id = Some("Not A Slug".to_string());
        cfg.remote.url = Some("http://localhost:4177".to_string());
        let warnings = cfg.validate();
        assert!(warnings.iter().any(|w| w.level == WarnLevel::Error));
    }

    #[test]
    fn validate_flags_user_without_remote() {
        let mut cfg = Config::default();
        cfg.user.id = Some("zed".to_string());
        let warnings = cfg.validate();
        assert!(warnings
            .iter()
            .any(|w| w.level == WarnLevel::Warning && w.message.contains("remote.url")));
    }

    #[test]
    fn validate_flags_odd_urls() {
        let mut cfg = Config::default();
        cfg.remote.url = Some("localhost:4177".to_string());
        let warnings = cfg.validate();
        assert!(warnings.iter().any(|w| w.message.contains("remote.url")));
    }
}
