//! Maven artifact retrieval into a local repository cache.
//!
//! This crate mirrors the standard Maven repository layout on local disk
//! (`~/.m2/repository` by default) and fetches each artifact from a remote
//! repository at most once: presence on disk is the sole cache-validity
//! signal. Downloads land in a temporary file and are renamed into the
//! canonical path only on success, so a partial download is never
//! observable as a cached artifact.

#![warn(missing_docs)]

pub mod cache;
pub mod coordinate;
pub mod depset;
pub mod error;

pub use cache::ArtifactCache;
pub use coordinate::{MavenCoordinate, MAVEN_CENTRAL};
pub use depset::{DepCache, DepRequest};
pub use error::FetchError;
