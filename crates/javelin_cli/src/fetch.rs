//! `javelin fetch` — materialize manifest dependencies.

use javelin_fetch::DepCache;

use crate::build::{dep_requests, open_cache, report_downloads};
use crate::{load_manifest, FetchArgs, GlobalArgs, ReportFormat};

/// Name under which the manifest dependency set is memoized.
const FETCH_SET: &str = "dependencies";

/// Runs the `javelin fetch` command.
///
/// Ensures every manifest dependency exists in the local repository and
/// prints the resolved local paths.
pub fn run(args: &FetchArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let config = load_manifest(global)?;
    let cache = open_cache(args.repo_root.as_deref());
    let requests = dep_requests(&config);
    report_downloads(&cache, &requests, global);

    let mut deps = DepCache::new();
    let paths = deps.ensure_set(FETCH_SET, &cache, &requests)?;

    match args.format {
        ReportFormat::Text => {
            for path in paths {
                println!("{}", path.display());
            }
        }
        ReportFormat::Json => {
            println!("{}", serde_json::to_string_pretty(paths)?);
        }
    }
    Ok(0)
}
