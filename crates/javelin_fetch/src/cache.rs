//! The on-disk artifact cache.

use std::path::{Path, PathBuf};

use crate::coordinate::MavenCoordinate;
use crate::error::FetchError;

/// A local Maven-layout repository that fetches artifacts at most once.
///
/// Presence on disk is the sole validity signal: a cached file is never
/// re-checked, re-validated, or evicted. The cache root is shared across
/// arbitrary concurrent invocations of the tool; population is safe without
/// locks because downloads are renamed into the canonical path from a
/// temporary file, so only a fully written file ever becomes visible.
pub struct ArtifactCache {
    /// Root directory of the local repository.
    root: PathBuf,

    /// Reused HTTP client for all fetches. Blocking, no timeout: a hung
    /// fetch blocks the invocation, matching the rest of the pipeline.
    http: reqwest::blocking::Client,
}

impl ArtifactCache {
    /// Creates a cache rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        ArtifactCache {
            root: root.into(),
            http: reqwest::blocking::Client::new(),
        }
    }

    /// The standard local repository root: `~/.m2/repository`.
    pub fn default_root() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".m2")
            .join("repository")
    }

    /// The cache root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Derives the canonical local path for a coordinate.
    ///
    /// Pure string construction; never touches the filesystem or network.
    pub fn resolve_path(&self, coord: &MavenCoordinate) -> PathBuf {
        self.root.join(coord.relative_path())
    }

    /// Returns `true` if the coordinate is already present on disk.
    pub fn is_cached(&self, coord: &MavenCoordinate) -> bool {
        self.resolve_path(coord).exists()
    }

    /// Guarantees the coordinate exists at its canonical path.
    ///
    /// If the path already exists this is a no-op. Otherwise the artifact is
    /// downloaded from `repo` into a temporary file in the destination
    /// directory and renamed into place on success. On any failure the
    /// canonical path is left untouched, so the next call re-attempts the
    /// fetch.
    pub fn ensure(
        &self,
        coord: &MavenCoordinate,
        repo: &str,
    ) -> Result<PathBuf, FetchError> {
        let path = self.resolve_path(coord);
        if path.exists() {
            return Ok(path);
        }

        let parent = match path.parent() {
            Some(parent) => parent.to_path_buf(),
            None => self.root.clone(),
        };
        std::fs::create_dir_all(&parent).map_err(|e| FetchError::Io {
            path: parent.clone(),
            source: e,
        })?;

        let url = coord.remote_url(repo);
        let mut response = self.http.get(&url).send().map_err(|e| FetchError::Http {
            url: url.clone(),
            source: e,
        })?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url,
                status: status.as_u16(),
            });
        }

        // The temp file lives in the destination directory so the final
        // rename stays on one filesystem.
        let mut tmp = tempfile::NamedTempFile::new_in(&parent).map_err(|e| FetchError::Io {
            path: parent.clone(),
            source: e,
        })?;
        response
            .copy_to(tmp.as_file_mut())
            .map_err(|e| FetchError::Http {
                url: url.clone(),
                source: e,
            })?;
        tmp.persist(&path).map_err(|e| FetchError::Io {
            path: path.clone(),
            source: e.error,
        })?;

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Serves up to `max_requests` canned HTTP responses on a local port,
    /// counting how many requests actually arrived.
    fn serve(
        status_line: &'static str,
        body: &'static [u8],
        max_requests: usize,
    ) -> (String, Arc<AtomicUsize>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let hits = Arc::new(AtomicUsize::new(0));
        let hits_in_thread = Arc::clone(&hits);
        std::thread::spawn(move || {
            for _ in 0..max_requests {
                let Ok((mut stream, _)) = listener.accept() else {
                    break;
                };
                hits_in_thread.fetch_add(1, Ordering::SeqCst);
                let mut buf = [0u8; 2048];
                let _ = stream.read(&mut buf);
                let header = format!(
                    "HTTP/1.1 {status_line}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                    body.len()
                );
                let _ = stream.write_all(header.as_bytes());
                let _ = stream.write_all(body);
            }
        });
        (format!("http://{addr}"), hits)
    }

    #[test]
    fn resolve_path_matches_maven_layout() {
        let cache = ArtifactCache::new("/repo");
        let coord = MavenCoordinate::new("org.example", "lib", "1.0");
        assert_eq!(
            cache.resolve_path(&coord),
            PathBuf::from("/repo/org/example/lib/1.0/lib-1.0.jar")
        );
    }

    #[test]
    fn resolve_path_is_deterministic() {
        let cache = ArtifactCache::new("/repo");
        let coord = MavenCoordinate::new("org.example", "lib", "1.0");
        assert_eq!(cache.resolve_path(&coord), cache.resolve_path(&coord));
    }

    #[test]
    fn default_root_ends_with_m2_repository() {
        let root = ArtifactCache::default_root();
        assert!(root.ends_with(".m2/repository"));
    }

    #[test]
    fn ensure_downloads_a_missing_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let cache = ArtifactCache::new(dir.path());
        let (repo, hits) = serve("200 OK", b"jar bytes", 1);

        let coord = MavenCoordinate::new("org.example", "lib", "1.0");
        let path = cache.ensure(&coord, &repo).unwrap();

        assert_eq!(path, cache.resolve_path(&coord));
        assert_eq!(std::fs::read(&path).unwrap(), b"jar bytes");
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn ensure_twice_fetches_at_most_once() {
        let dir = tempfile::tempdir().unwrap();
        let cache = ArtifactCache::new(dir.path());
        let (repo, hits) = serve("200 OK", b"jar bytes", 2);

        let coord = MavenCoordinate::new("org.example", "lib", "1.0");
        let first = cache.ensure(&coord, &repo).unwrap();
        let second = cache.ensure(&coord, &repo).unwrap();

        assert_eq!(first, second);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn ensure_is_a_no_op_when_already_cached() {
        let dir = tempfile::tempdir().unwrap();
        let cache = ArtifactCache::new(dir.path());
        let coord = MavenCoordinate::new("org.example", "lib", "1.0");

        let path = cache.resolve_path(&coord);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, b"already here").unwrap();

        // An unroutable repo proves no network traffic happens.
        let got = cache.ensure(&coord, "http://127.0.0.1:1").unwrap();
        assert_eq!(got, path);
        assert_eq!(std::fs::read(&got).unwrap(), b"already here");
    }

    #[test]
    fn is_cached_reflects_disk_state() {
        let dir = tempfile::tempdir().unwrap();
        let cache = ArtifactCache::new(dir.path());
        let coord = MavenCoordinate::new("org.example", "lib", "1.0");
        assert!(!cache.is_cached(&coord));

        let path = cache.resolve_path(&coord);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, b"jar").unwrap();
        assert!(cache.is_cached(&coord));
    }

    #[test]
    fn http_error_status_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let cache = ArtifactCache::new(dir.path());
        let (repo, _hits) = serve("404 Not Found", b"not here", 1);

        let coord = MavenCoordinate::new("org.example", "lib", "1.0");
        let err = cache.ensure(&coord, &repo).unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 404, .. }));
        assert!(!cache.resolve_path(&coord).exists());
    }

    #[test]
    fn failed_fetch_is_retried_by_the_next_ensure() {
        let dir = tempfile::tempdir().unwrap();
        let cache = ArtifactCache::new(dir.path());
        let coord = MavenCoordinate::new("org.example", "lib", "1.0");

        let (bad_repo, _) = serve("500 Internal Server Error", b"", 1);
        assert!(cache.ensure(&coord, &bad_repo).is_err());
        assert!(!cache.resolve_path(&coord).exists());

        let (good_repo, _) = serve("200 OK", b"jar bytes", 1);
        let path = cache.ensure(&coord, &good_repo).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"jar bytes");
    }

    #[test]
    fn connection_failure_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let cache = ArtifactCache::new(dir.path());
        let coord = MavenCoordinate::new("org.example", "lib", "1.0");

        let err = cache.ensure(&coord, "http://127.0.0.1:1").unwrap_err();
        assert!(matches!(err, FetchError::Http { .. }));
        assert!(!cache.resolve_path(&coord).exists());
    }

    #[test]
    fn classifier_lands_in_its_own_file() {
        let dir = tempfile::tempdir().unwrap();
        let cache = ArtifactCache::new(dir.path());
        let (repo, _) = serve("200 OK", b"natives", 1);

        let coord = MavenCoordinate::new("org.lwjgl", "lwjgl", "3.3.1")
            .with_classifier("natives-linux");
        let path = cache.ensure(&coord, &repo).unwrap();
        assert!(path.ends_with("org/lwjgl/lwjgl/3.3.1/lwjgl-3.3.1-natives-linux.jar"));
    }
}
