//! `javelin clean` — remove build output.

use std::path::PathBuf;

use crate::{load_manifest, GlobalArgs};

/// Runs the `javelin clean` command.
///
/// Removes the manifest's target directory; an already absent directory is
/// not an error.
pub fn run(global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let config = load_manifest(global)?;
    let target = PathBuf::from(&config.build.target);

    match std::fs::remove_dir_all(&target) {
        Ok(()) => {
            if !global.quiet {
                eprintln!("   Removed {}", target.display());
            }
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }
    Ok(0)
}
