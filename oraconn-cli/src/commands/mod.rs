//! CLI command implementations.

pub mod format;
pub mod list;
pub mod version;

use std::path::Path;

use oraconn_format::{Inventory, InventoryFormat};

use crate::error::{CliError, CliResult};

/// Read and parse an inventory file.
pub(crate) async fn load_inventory(path: &Path) -> CliResult<Inventory> {
    if !path.exists() {
        return Err(CliError::Config(format!(
            "Inventory file not found: {}",
            path.display()
        )));
    }

    let content = tokio::fs::read_to_string(path).await?;
    Ok(Inventory::parse(&content, InventoryFormat::from_path(path))?)
}
