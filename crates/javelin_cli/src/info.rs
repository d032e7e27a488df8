//! `javelin info` — inspect the resolved host and CI metadata.

use javelin_config::{ci, HostConfig};
use javelin_fetch::ArtifactCache;

use crate::{InfoArgs, ReportFormat};

/// Runs the `javelin info` command.
pub fn run(args: &InfoArgs, host: &HostConfig) -> Result<i32, Box<dyn std::error::Error>> {
    let release = ci::release_tag_from_env(args.git_ref.as_deref());
    let sha = ci::short_sha_from_env(args.sha.as_deref());
    let repository = ArtifactCache::default_root();

    match args.format {
        ReportFormat::Text => {
            println!("arch       {}", host.arch.name());
            println!("os         {}", host.os.name());
            println!("separator  {}", host.classpath_separator());
            println!("maven      {}", host.maven_command());
            println!("repository {}", repository.display());
            if let Some(release) = &release {
                println!("release    {release}");
            }
            if let Some(sha) = &sha {
                println!("sha        {sha}");
            }
        }
        ReportFormat::Json => {
            let info = serde_json::json!({
                "arch": host.arch.name(),
                "os": host.os.name(),
                "separator": host.classpath_separator().to_string(),
                "maven": host.maven_command(),
                "repository": repository,
                "release": release,
                "sha": sha,
            });
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
    }
    Ok(0)
}
