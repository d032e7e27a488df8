//! Manifest loading and validation.

use crate::error::ConfigError;
use crate::types::ProjectConfig;
use std::path::Path;

/// Name of the manifest file within a project directory.
const MANIFEST_FILE: &str = "javelin.toml";

/// Loads and validates a `javelin.toml` manifest from a project directory.
pub fn load_config(project_dir: &Path) -> Result<ProjectConfig, ConfigError> {
    load_config_file(&project_dir.join(MANIFEST_FILE))
}

/// Loads and validates a manifest from an explicit file path.
pub fn load_config_file(path: &Path) -> Result<ProjectConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Parses and validates a manifest from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<ProjectConfig, ConfigError> {
    let config: ProjectConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Validates that required fields are present.
fn validate_config(config: &ProjectConfig) -> Result<(), ConfigError> {
    if config.project.name.is_empty() {
        return Err(ConfigError::MissingField("project.name".to_string()));
    }
    if config.project.version.is_empty() {
        return Err(ConfigError::MissingField("project.version".to_string()));
    }
    if config.build.release.is_empty() {
        return Err(ConfigError::MissingField("build.release".to_string()));
    }
    for (alias, dep) in &config.dependencies {
        if dep.group.is_empty() {
            return Err(ConfigError::MissingField(format!(
                "dependencies.{alias}.group"
            )));
        }
        if dep.name.is_empty() {
            return Err(ConfigError::MissingField(format!(
                "dependencies.{alias}.name"
            )));
        }
        if dep.version.is_empty() {
            return Err(ConfigError::MissingField(format!(
                "dependencies.{alias}.version"
            )));
        }
    }
    Ok(())
}
