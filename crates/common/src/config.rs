use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub importer: ImporterConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_path(".")
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Config::builder()
            .add_source(
                File::with_name(
                    path.as_ref()
                        .join("config/default")
                        .to_string_lossy()
                        .as_ref(),
                )
                .required(false),
            )
            .add_source(
                File::with_name(
                    path.as_ref()
                        .join("config/local")
                        .to_string_lossy()
                        .as_ref(),
                )
                .required(false),
            )
            .add_source(Environment::default().separator("__"))
            .build()?
            .try_deserialize()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImporterConfig {
    /// JSON array of raw pull requests as returned by the pulls API.
    pub pull_requests_path: String,
    /// JSON snapshot of the target project (branches, users, milestones).
    pub project_path: String,
    /// JSON lines destination; stdout when unset.
    #[serde(default)]
    pub output_path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObservabilityConfig {
    #[serde(default = "ObservabilityConfig::default_log_level")]
    pub log_level: String,
}

impl ObservabilityConfig {
    fn default_log_level() -> String {
        "info".to_string()
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: Self::default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observability_defaults_to_info() {
        let cfg: ObservabilityConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.log_level, "info");
    }

    #[test]
    fn importer_output_path_is_optional() {
        let cfg: AppConfig = serde_json::from_str(
            r#"{"importer":{"pull_requests_path":"prs.json","project_path":"project.json"}}"#,
        )
        .unwrap();
        assert_eq!(cfg.importer.pull_requests_path, "prs.json");
        assert!(cfg.importer.output_path.is_none());
        assert_eq!(cfg.observability.log_level, "info");
    }
}
