//! Per-process memoization of resolved dependency sets.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::cache::ArtifactCache;
use crate::coordinate::MavenCoordinate;
use crate::error::FetchError;

/// A coordinate paired with the repository it should be fetched from.
pub type DepRequest = (MavenCoordinate, String);

/// Memoizes resolved dependency lists for one process invocation.
///
/// Constructed once and threaded by reference to callers. Resolving a set a
/// second time under the same name returns the stored paths without going
/// back to the [`ArtifactCache`]. This is purely an optimization to avoid
/// redundant resolution; it has no effect on on-disk state.
#[derive(Debug, Default)]
pub struct DepCache {
    resolved: HashMap<String, Vec<PathBuf>>,
}

impl DepCache {
    /// Creates an empty dependency cache.
    pub fn new() -> Self {
        DepCache::default()
    }

    /// Materializes a named dependency set, memoizing the result.
    ///
    /// On the first call for `name`, every coordinate is ensured through the
    /// artifact cache in order and the local paths are stored. Later calls
    /// return the stored paths regardless of the `deps` argument. A fetch
    /// failure leaves the set unresolved, so the next call retries.
    pub fn ensure_set(
        &mut self,
        name: &str,
        cache: &ArtifactCache,
        deps: &[DepRequest],
    ) -> Result<&[PathBuf], FetchError> {
        if !self.resolved.contains_key(name) {
            let mut paths = Vec::with_capacity(deps.len());
            for (coord, repo) in deps {
                paths.push(cache.ensure(coord, repo)?);
            }
            self.resolved.insert(name.to_string(), paths);
        }
        Ok(self.resolved[name].as_slice())
    }

    /// Returns an already resolved set, if present.
    pub fn get(&self, name: &str) -> Option<&[PathBuf]> {
        self.resolved.get(name).map(Vec::as_slice)
    }
}
