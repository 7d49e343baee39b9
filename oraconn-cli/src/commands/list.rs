//! `oraconn list` command - List inventory descriptors.

use serde::Serialize;

use crate::cli::ListArgs;
use crate::commands::load_inventory;
use crate::config::Config;
use crate::error::CliResult;
use crate::output;

#[derive(Serialize)]
struct ListEntry<'a> {
    id: &'a str,
    kind: &'static str,
    attributes: usize,
}

/// Run the list command
pub async fn run(args: ListArgs, config: &Config) -> CliResult<()> {
    let path = args.inventory.unwrap_or_else(|| config.inventory_path());
    let inventory = load_inventory(&path).await?;

    let entries: Vec<ListEntry<'_>> = inventory
        .descriptors()
        .iter()
        .map(|descriptor| ListEntry {
            id: descriptor.id(),
            kind: descriptor.kind().name(),
            attributes: descriptor.len(),
        })
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    output::section(&format!("{} ({} descriptors)", path.display(), entries.len()));
    for entry in &entries {
        output::list_item(&format!("{} [{}]", entry.id, entry.kind));
    }

    Ok(())
}
