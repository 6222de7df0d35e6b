//! Version command - compare with the latest release

use matsuri::core::services::{Version, latest_release_version};
use matsuri::output::OutputMode;

use super::Context;

/// Print the running version and whether a newer release exists
pub fn version(ctx: &Context) -> anyhow::Result<()> {
    let current = Version::parse(matsuri::VERSION)
        .ok_or_else(|| anyhow::anyhow!("invalid package version {}", matsuri::VERSION))?;
    let latest = latest_release_version(ctx.session())?;
    let outdated = current < latest;

    if ctx.mode == OutputMode::Json {
        println!(
            "{}",
            serde_json::json!({
                "version": current.to_string(),
                "latest": latest.to_string(),
                "outdated": outdated
            })
        );
    } else {
        println!("git-matsuri version {current}");
        if outdated {
            println!("A new version is available: {latest}");
        } else {
            println!("You are using the latest version");
        }
    }
    Ok(())
}
