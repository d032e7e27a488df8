//! Configuration for the Javelin build orchestrator.
//!
//! This crate resolves everything that is fixed for the lifetime of one
//! invocation: the host platform (architecture, operating system, classpath
//! separator), the `javelin.toml` project manifest, and CI release metadata
//! extracted from git refs and commit ids.

#![warn(missing_docs)]

pub mod ci;
pub mod error;
pub mod host;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use host::{Arch, HostConfig, Os};
pub use loader::{load_config, load_config_file, load_config_from_str};
pub use types::{BuildConfig, MavenDependency, ProjectConfig, ProjectMeta};
