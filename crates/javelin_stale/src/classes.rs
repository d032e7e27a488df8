//! Per-source change detection against a compiled-class directory.
//!
//! Each compilation unit is tracked by its base name: `Foo.java` is
//! considered up to date when a `Foo.class` with an equal-or-newer mtime
//! exists anywhere under the class directory. Inner classes (`Foo$1.class`,
//! `Foo$Inner.class`) are excluded from the index since they never
//! correspond to a source file of their own.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::oracle::mtime;

/// File extension of compiled classes.
const CLASS_EXT: &str = "class";

/// Marker javac puts in the names of nested and anonymous classes.
const INNER_CLASS_MARKER: char = '$';

/// An index of previously compiled classes, keyed by stem.
///
/// Rebuilt from disk on every scan; never cached across invocations, so
/// staleness is entirely a function of current mtimes.
#[derive(Debug, Default)]
pub struct ClassIndex {
    mtimes: HashMap<String, SystemTime>,
}

impl ClassIndex {
    /// Scans a class directory recursively and builds the stem → mtime index.
    ///
    /// A missing or unreadable directory yields an empty index, which makes
    /// every source count as changed.
    pub fn scan(classes_dir: &Path) -> Self {
        let mut mtimes = HashMap::new();
        collect_classes(classes_dir, &mut mtimes);
        ClassIndex { mtimes }
    }

    /// Returns the number of indexed classes.
    pub fn len(&self) -> usize {
        self.mtimes.len()
    }

    /// Returns `true` if no classes were found.
    pub fn is_empty(&self) -> bool {
        self.mtimes.is_empty()
    }

    /// Returns the recorded mtime for a class stem, if indexed.
    pub fn class_mtime(&self, stem: &str) -> Option<SystemTime> {
        self.mtimes.get(stem).copied()
    }

    /// Decides whether a source file needs recompiling.
    ///
    /// A source is changed when its stem has no indexed class or its own
    /// mtime exceeds the recorded class mtime. A source whose stem or mtime
    /// cannot be read counts as changed.
    pub fn is_changed(&self, source: &Path) -> bool {
        let stem = match source.file_stem().and_then(|s| s.to_str()) {
            Some(stem) => stem,
            None => return true,
        };
        let source_mtime = match mtime(source) {
            Some(t) => t,
            None => return true,
        };
        match self.mtimes.get(stem) {
            Some(class_mtime) => source_mtime > *class_mtime,
            None => true,
        }
    }
}

/// Filters a source list down to the files that need recompiling.
///
/// Scans `classes_dir` once and keeps each source whose class is missing or
/// older than the source itself. Input order is preserved.
///
/// Known limitation: a source whose own file is unchanged but whose
/// referenced type changed elsewhere is silently skipped. Callers must pass
/// the entire affected source set themselves when a shared type changes.
pub fn filter_changed(sources: &[PathBuf], classes_dir: &Path) -> Vec<PathBuf> {
    let index = ClassIndex::scan(classes_dir);
    sources
        .iter()
        .filter(|source| index.is_changed(source))
        .cloned()
        .collect()
}

/// Recursively records `*.class` mtimes, skipping inner classes.
fn collect_classes(dir: &Path, mtimes: &mut HashMap<String, SystemTime>) {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return,
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_classes(&path, mtimes);
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some(CLASS_EXT) {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        if stem.contains(INNER_CLASS_MARKER) {
            continue;
        }
        if let Some(t) = mtime(&path) {
            mtimes.insert(stem.to_string(), t);
        }
    }
}
