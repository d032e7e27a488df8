//! Javelin CLI — the command-line interface for the Javelin build orchestrator.
//!
//! Provides `javelin build` for incremental compilation, `javelin fetch` for
//! materializing Maven dependencies into the local repository, `javelin clean`
//! for removing build output, and `javelin info` for inspecting the resolved
//! host configuration and CI release metadata.

#![warn(missing_docs)]

mod build;
mod clean;
mod fetch;
mod info;
mod javac;
mod sources;

use std::path::Path;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use javelin_config::{HostConfig, ProjectConfig};

/// Javelin — an incremental Java build orchestrator.
#[derive(Parser, Debug)]
#[command(name = "javelin", version, about = "Incremental Java build orchestrator")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a custom `javelin.toml` manifest.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Override the detected CPU architecture (`x64`, `arm64`).
    #[arg(long, global = true)]
    pub arch: Option<String>,

    /// Override the detected operating system (`windows`, `macos`, `linux`).
    #[arg(long, global = true)]
    pub os: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch dependencies and compile changed sources.
    Build(BuildArgs),
    /// Materialize all manifest dependencies into the local repository.
    Fetch(FetchArgs),
    /// Remove the build output directory.
    Clean,
    /// Print the resolved host configuration and CI release metadata.
    Info(InfoArgs),
}

/// Arguments for the `javelin build` subcommand.
#[derive(Parser, Debug)]
pub struct BuildArgs {
    /// Local repository root (default: `~/.m2/repository`).
    #[arg(long)]
    pub repo_root: Option<String>,
}

/// Arguments for the `javelin fetch` subcommand.
#[derive(Parser, Debug)]
pub struct FetchArgs {
    /// Local repository root (default: `~/.m2/repository`).
    #[arg(long)]
    pub repo_root: Option<String>,

    /// Output format for the resolved paths.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Arguments for the `javelin info` subcommand.
#[derive(Parser, Debug)]
pub struct InfoArgs {
    /// Output format.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Git ref to derive the release tag from (default: `GITHUB_REF`).
    #[arg(long = "ref")]
    pub git_ref: Option<String>,

    /// Commit id to shorten (default: `GITHUB_SHA`).
    #[arg(long)]
    pub sha: Option<String>,
}

/// Output format for machine-facing subcommands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable terminal output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Optional path to a custom manifest file.
    pub config: Option<String>,
}

/// Loads the project manifest from `--config` or `./javelin.toml`.
pub fn load_manifest(global: &GlobalArgs) -> Result<ProjectConfig, javelin_config::ConfigError> {
    match &global.config {
        Some(path) => javelin_config::load_config_file(Path::new(path)),
        None => javelin_config::load_config(Path::new(".")),
    }
}

fn main() {
    let cli = Cli::parse();

    let result = run(cli);
    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let host = HostConfig::resolve(cli.arch.as_deref(), cli.os.as_deref())?;
    let global = GlobalArgs {
        quiet: cli.quiet,
        config: cli.config,
    };

    match cli.command {
        Command::Build(ref args) => build::run(args, &host, &global),
        Command::Fetch(ref args) => fetch::run(args, &global),
        Command::Clean => clean::run(&global),
        Command::Info(ref args) => info::run(args, &host),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_build_default() {
        let cli = Cli::parse_from(["javelin", "build"]);
        match cli.command {
            Command::Build(ref args) => assert!(args.repo_root.is_none()),
            _ => panic!("expected Build command"),
        }
    }

    #[test]
    fn parse_build_with_repo_root() {
        let cli = Cli::parse_from(["javelin", "build", "--repo-root", "/tmp/repo"]);
        match cli.command {
            Command::Build(ref args) => {
                assert_eq!(args.repo_root.as_deref(), Some("/tmp/repo"));
            }
            _ => panic!("expected Build command"),
        }
    }

    #[test]
    fn parse_fetch_default() {
        let cli = Cli::parse_from(["javelin", "fetch"]);
        match cli.command {
            Command::Fetch(ref args) => {
                assert!(args.repo_root.is_none());
                assert_eq!(args.format, ReportFormat::Text);
            }
            _ => panic!("expected Fetch command"),
        }
    }

    #[test]
    fn parse_fetch_json() {
        let cli = Cli::parse_from(["javelin", "fetch", "--format", "json"]);
        match cli.command {
            Command::Fetch(ref args) => assert_eq!(args.format, ReportFormat::Json),
            _ => panic!("expected Fetch command"),
        }
    }

    #[test]
    fn parse_clean() {
        let cli = Cli::parse_from(["javelin", "clean"]);
        assert!(matches!(cli.command, Command::Clean));
    }

    #[test]
    fn parse_info_with_ref_and_sha() {
        let cli = Cli::parse_from([
            "javelin",
            "info",
            "--ref",
            "refs/tags/v0.9.3",
            "--sha",
            "0123456789abcdef",
        ]);
        match cli.command {
            Command::Info(ref args) => {
                assert_eq!(args.git_ref.as_deref(), Some("refs/tags/v0.9.3"));
                assert_eq!(args.sha.as_deref(), Some("0123456789abcdef"));
            }
            _ => panic!("expected Info command"),
        }
    }

    #[test]
    fn parse_global_flags() {
        let cli = Cli::parse_from([
            "javelin",
            "--quiet",
            "--arch",
            "arm64",
            "--os",
            "macos",
            "build",
        ]);
        assert!(cli.quiet);
        assert_eq!(cli.arch.as_deref(), Some("arm64"));
        assert_eq!(cli.os.as_deref(), Some("macos"));
    }

    #[test]
    fn parse_config_path() {
        let cli = Cli::parse_from(["javelin", "--config", "/path/to/javelin.toml", "build"]);
        assert_eq!(cli.config.as_deref(), Some("/path/to/javelin.toml"));
    }

    #[test]
    fn unknown_arch_fails_at_run() {
        let cli = Cli::parse_from(["javelin", "--arch", "sparc", "clean"]);
        assert!(run(cli).is_err());
    }
}
