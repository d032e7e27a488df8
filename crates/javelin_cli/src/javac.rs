//! External `javac` invocation.

use std::path::{Path, PathBuf};
use std::process::Command;

use javelin_config::HostConfig;

/// Everything one compiler invocation needs.
pub struct JavacInvocation<'a> {
    /// The changed sources to compile, in order.
    pub sources: &'a [PathBuf],
    /// Output directory for compiled classes.
    pub target: &'a Path,
    /// Classpath entries (the target directory is appended automatically).
    pub classpath: &'a [PathBuf],
    /// Entries for `--module-path`.
    pub module_path: &'a [String],
    /// Module names for `--add-modules`.
    pub add_modules: &'a [String],
    /// Java release level for `--release`.
    pub release: &'a str,
    /// Extra options passed through verbatim.
    pub opts: &'a [String],
}

/// Assembles the full `javac` argument list.
///
/// Mirrors the fixed invocation shape: UTF-8 encoding, caller options,
/// release level, optional classpath (with the target directory appended so
/// previously compiled classes resolve), optional module path and modules,
/// the output directory, then the sources.
pub fn javac_args(inv: &JavacInvocation, host: &HostConfig) -> Vec<String> {
    let mut args = vec!["-encoding".to_string(), "UTF8".to_string()];
    args.extend(inv.opts.iter().cloned());
    args.push("--release".to_string());
    args.push(inv.release.to_string());

    if !inv.classpath.is_empty() {
        let mut entries: Vec<PathBuf> = inv.classpath.to_vec();
        entries.push(inv.target.to_path_buf());
        args.push("--class-path".to_string());
        args.push(host.classpath_join(&entries));
    }
    if !inv.module_path.is_empty() {
        args.push("--module-path".to_string());
        args.push(host.classpath_join(inv.module_path));
    }
    if !inv.add_modules.is_empty() {
        args.push("--add-modules".to_string());
        args.push(inv.add_modules.join(","));
    }

    args.push("-d".to_string());
    args.push(inv.target.to_string_lossy().into_owned());
    args.extend(
        inv.sources
            .iter()
            .map(|s| s.to_string_lossy().into_owned()),
    );
    args
}

/// Runs `javac` with the assembled arguments.
///
/// A non-zero exit is fatal and propagated to the caller; there is no retry.
pub fn run_javac(
    inv: &JavacInvocation,
    host: &HostConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let status = Command::new("javac").args(javac_args(inv, host)).status()?;
    if !status.success() {
        return Err(format!("javac failed: {status}").into());
    }
    Ok(())
}
