//! `javelin build` — incremental compilation of one module.
//!
//! Pipeline:
//! 1. Load the manifest
//! 2. Materialize Maven dependencies into the local repository
//! 3. Discover sources and filter them against the compiled classes
//! 4. Invoke `javac` once if anything changed

use std::path::PathBuf;

use javelin_config::{HostConfig, MavenDependency, ProjectConfig};
use javelin_fetch::{ArtifactCache, DepCache, DepRequest, MavenCoordinate, MAVEN_CENTRAL};
use javelin_stale::filter_changed;

use crate::javac::{run_javac, JavacInvocation};
use crate::sources::discover_java_sources;
use crate::{load_manifest, BuildArgs, GlobalArgs};

/// Name under which the manifest dependency set is memoized.
const COMPILE_SET: &str = "compile";

/// Runs the `javelin build` command.
///
/// Returns exit code 0 on success (including "nothing to do"), 1 when the
/// project has no sources.
pub fn run(
    args: &BuildArgs,
    host: &HostConfig,
    global: &GlobalArgs,
) -> Result<i32, Box<dyn std::error::Error>> {
    let config = load_manifest(global)?;

    if !global.quiet {
        eprintln!(
            "  Building {} v{}",
            config.project.name, config.project.version
        );
    }

    let cache = open_cache(args.repo_root.as_deref());
    let requests = dep_requests(&config);
    report_downloads(&cache, &requests, global);

    let mut deps = DepCache::new();
    let classpath = deps.ensure_set(COMPILE_SET, &cache, &requests)?.to_vec();

    let source_dirs: Vec<PathBuf> = config.build.sources.iter().map(PathBuf::from).collect();
    let sources = discover_java_sources(&source_dirs)?;
    if sources.is_empty() {
        eprintln!(
            "error: no Java sources found under {}",
            config.build.sources.join(", ")
        );
        return Ok(1);
    }

    let target = PathBuf::from(&config.build.target);
    std::fs::create_dir_all(&target)?;

    let changed = filter_changed(&sources, &target);
    if changed.is_empty() {
        if !global.quiet {
            eprintln!("Up to date ({} sources)", sources.len());
        }
        return Ok(0);
    }

    if !global.quiet {
        eprintln!(
            " Compiling {} of {} Java files to {}",
            changed.len(),
            sources.len(),
            target.display()
        );
    }

    run_javac(
        &JavacInvocation {
            sources: &changed,
            target: &target,
            classpath: &classpath,
            module_path: &config.build.module_path,
            add_modules: &config.build.add_modules,
            release: &config.build.release,
            opts: &config.build.javac_opts,
        },
        host,
    )?;

    Ok(0)
}

/// Opens the artifact cache at an override root or the standard location.
pub(crate) fn open_cache(repo_root: Option<&str>) -> ArtifactCache {
    match repo_root {
        Some(root) => ArtifactCache::new(root),
        None => ArtifactCache::new(ArtifactCache::default_root()),
    }
}

/// Maps manifest dependencies to fetch requests.
///
/// Each dependency keeps its declared repository or falls back to Maven
/// Central. Order follows the manifest's alias ordering.
pub(crate) fn dep_requests(config: &ProjectConfig) -> Vec<DepRequest> {
    config.dependencies.values().map(to_request).collect()
}

fn to_request(dep: &MavenDependency) -> DepRequest {
    let mut coord = MavenCoordinate::new(&dep.group, &dep.name, &dep.version);
    if let Some(classifier) = &dep.classifier {
        coord = coord.with_classifier(classifier);
    }
    let repo = dep
        .repo
        .clone()
        .unwrap_or_else(|| MAVEN_CENTRAL.to_string());
    (coord, repo)
}

/// Reports each artifact that is about to be downloaded.
pub(crate) fn report_downloads(
    cache: &ArtifactCache,
    requests: &[DepRequest],
    global: &GlobalArgs,
) {
    if global.quiet {
        return;
    }
    for (coord, repo) in requests {
        if !cache.is_cached(coord) {
            eprintln!("Downloading {}", coord.remote_url(repo));
        }
    }
}
