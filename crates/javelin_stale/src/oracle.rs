//! Whole-set staleness comparison.

use std::path::Path;
use std::time::SystemTime;

/// Decides whether any source is newer than the oldest target.
///
/// The threshold starts at the current time and is lowered to the mtime of
/// each target that exists. A missing target drops the threshold to the
/// epoch immediately: everything is stale regardless of the other targets'
/// ages. The set is stale if any source's mtime exceeds the threshold.
///
/// A source whose mtime cannot be read counts as stale. This is a
/// conservative whole-set comparison with no per-file dependency tracking;
/// it never raises and never touches anything but filesystem metadata.
pub fn is_stale<S, T>(sources: &[S], targets: &[T]) -> bool
where
    S: AsRef<Path>,
    T: AsRef<Path>,
{
    let mut threshold = SystemTime::now();
    for target in targets {
        match mtime(target.as_ref()) {
            Some(t) => threshold = threshold.min(t),
            None => {
                threshold = SystemTime::UNIX_EPOCH;
                break;
            }
        }
    }

    for source in sources {
        match mtime(source.as_ref()) {
            Some(t) => {
                if t > threshold {
                    return true;
                }
            }
            // Nonexistent participates as infinitely stale.
            None => return true,
        }
    }
    false
}

/// Reads a path's mtime, mapping any failure to `None`.
pub(crate) fn mtime(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|m| m.modified()).ok()
}
