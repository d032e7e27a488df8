//! CI release metadata.
//!
//! Pure string transforms over the ref and commit id a CI runner exposes:
//! a release tag is the ref with its `refs/tags/` prefix stripped, and a
//! short sha is the first ten characters of the commit id.

/// Prefix a git ref carries when it names a tag.
const TAG_REF_PREFIX: &str = "refs/tags/";

/// Length of a shortened commit id.
const SHORT_SHA_LEN: usize = 10;

/// Extracts the release tag from a git ref.
///
/// Returns `None` when the ref does not name a tag (e.g. a branch ref).
pub fn release_tag(git_ref: &str) -> Option<String> {
    git_ref.strip_prefix(TAG_REF_PREFIX).map(str::to_string)
}

/// Shortens a commit id to its first ten characters.
///
/// Returns `None` for an empty id; an id shorter than ten characters is
/// returned unchanged.
pub fn short_sha(sha: &str) -> Option<String> {
    if sha.is_empty() {
        return None;
    }
    Some(sha.chars().take(SHORT_SHA_LEN).collect())
}

/// Resolves the release tag from an explicit value or `GITHUB_REF`.
pub fn release_tag_from_env(explicit: Option<&str>) -> Option<String> {
    let git_ref = match explicit {
        Some(r) => r.to_string(),
        None => std::env::var("GITHUB_REF").ok()?,
    };
    release_tag(&git_ref)
}

/// Resolves the short sha from an explicit value or `GITHUB_SHA`.
pub fn short_sha_from_env(explicit: Option<&str>) -> Option<String> {
    let sha = match explicit {
        Some(s) => s.to_string(),
        None => std::env::var("GITHUB_SHA").ok()?,
    };
    short_sha(&sha)
}
