//! Configuration types deserialized from `javelin.toml`.

use serde::Deserialize;
use std::collections::BTreeMap;

/// The top-level project manifest parsed from `javelin.toml`.
#[derive(Debug, Deserialize)]
pub struct ProjectConfig {
    /// Core project metadata.
    pub project: ProjectMeta,
    /// Compilation settings.
    #[serde(default)]
    pub build: BuildConfig,
    /// Maven dependencies, keyed by a local alias.
    #[serde(default)]
    pub dependencies: BTreeMap<String, MavenDependency>,
}

/// Core project metadata required in every `javelin.toml`.
#[derive(Debug, Deserialize)]
pub struct ProjectMeta {
    /// The project name.
    pub name: String,
    /// The project version string.
    pub version: String,
}

/// Compilation settings for a single module.
#[derive(Debug, Deserialize)]
pub struct BuildConfig {
    /// Directories scanned recursively for `.java` sources.
    #[serde(default = "default_sources")]
    pub sources: Vec<String>,
    /// Output directory for compiled classes.
    #[serde(default = "default_target")]
    pub target: String,
    /// Java release level passed to `javac --release`.
    #[serde(default = "default_release")]
    pub release: String,
    /// Extra options passed to `javac` verbatim.
    #[serde(default)]
    pub javac_opts: Vec<String>,
    /// Entries for `javac --module-path`.
    #[serde(default)]
    pub module_path: Vec<String>,
    /// Module names for `javac --add-modules`.
    #[serde(default)]
    pub add_modules: Vec<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig {
            sources: default_sources(),
            target: default_target(),
            release: default_release(),
            javac_opts: Vec::new(),
            module_path: Vec::new(),
            add_modules: Vec::new(),
        }
    }
}

fn default_sources() -> Vec<String> {
    vec!["src".to_string()]
}

fn default_target() -> String {
    "target/classes".to_string()
}

fn default_release() -> String {
    "11".to_string()
}

/// A single Maven dependency declaration.
///
/// `group`, `name`, and `version` follow Maven coordinates exactly. The
/// optional `classifier` selects a variant artifact (e.g. a per-platform
/// native jar); the optional `repo` overrides the repository base URL for
/// this dependency only.
#[derive(Debug, Clone, Deserialize)]
pub struct MavenDependency {
    /// Maven group id (dot-separated).
    pub group: String,
    /// Maven artifact id.
    pub name: String,
    /// Maven version string.
    pub version: String,
    /// Optional artifact classifier.
    #[serde(default)]
    pub classifier: Option<String>,
    /// Optional repository base URL override.
    #[serde(default)]
    pub repo: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_config_defaults() {
        let build = BuildConfig::default();
        assert_eq!(build.sources, vec!["src"]);
        assert_eq!(build.target, "target/classes");
        assert_eq!(build.release, "11");
        assert!(build.javac_opts.is_empty());
        assert!(build.module_path.is_empty());
        assert!(build.add_modules.is_empty());
    }
}
