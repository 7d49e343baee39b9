//! `oraconn format` command - Render connection strings.

use std::sync::Arc;

use oraconn_format::{
    DatabaseFormatter, DescriptorKind, DescriptorStore, DiagnosticsSink, FormatKind, MemorySink,
};

use crate::cli::FormatArgs;
use crate::commands::load_inventory;
use crate::config::Config;
use crate::error::{CliError, CliResult};
use crate::output;

/// Run the format command
pub async fn run(args: FormatArgs, config: &Config) -> CliResult<()> {
    let kind = FormatKind::from_name(&args.format)?;
    let path = args.inventory.unwrap_or_else(|| config.inventory_path());

    let store = Arc::new(load_inventory(&path).await?.into_store());
    let sink = Arc::new(MemorySink::new());
    let formatter = DatabaseFormatter::new(store.clone(), sink.clone());

    for id in &args.ids {
        let descriptor = match store.find(id)? {
            Some(descriptor) => descriptor,
            None => {
                sink.error(id, &format!("unknown target {}", id));
                store.synthesize(id, DescriptorKind::Unknown)
            }
        };
        println!("{}", formatter.render(kind, &descriptor)?);
    }

    for entry in sink.entries() {
        output::diagnostic(&entry);
    }

    if (args.strict || config.output.strict) && !sink.is_empty() {
        return Err(CliError::Diagnostics(sink.len()));
    }

    Ok(())
}
