//! Java source discovery.

use std::path::{Path, PathBuf};

/// File extension of Java sources.
const JAVA_EXT: &str = "java";

/// Recursively collects `.java` files under the given source directories.
///
/// Missing directories are skipped; the result is sorted so the compiler
/// sees a deterministic file order across runs.
pub fn discover_java_sources(source_dirs: &[PathBuf]) -> std::io::Result<Vec<PathBuf>> {
    let mut sources = Vec::new();
    for dir in source_dirs {
        if dir.is_dir() {
            collect_java_files(dir, &mut sources)?;
        }
    }
    sources.sort();
    Ok(sources)
}

fn collect_java_files(dir: &Path, out: &mut Vec<PathBuf>) -> std::io::Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_java_files(&path, out)?;
        } else if path.extension().and_then(|e| e.to_str()) == Some(JAVA_EXT) {
            out.push(path);
        }
    }
    Ok(())
}
