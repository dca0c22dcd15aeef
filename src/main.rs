use std::path::PathBuf;

use anyhow::{bail, Context};

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let (Some(variables), Some(asset_root)) = (args.next(), args.next()) else {
        bail!("usage: skin-defaults <variables.json> <asset-root> <kind>...");
    };
    let kinds: Vec<String> = args.collect();
    if kinds.is_empty() {
        bail!("at least one kind is required");
    }

    let reports = skin_defaults::run(&PathBuf::from(variables), &PathBuf::from(asset_root), &kinds)
        .context("failed to resolve style defaults")?;
    let rendered = serde_json::to_string_pretty(&reports).context("failed to render report")?;
    println!("{rendered}");
    Ok(())
}
