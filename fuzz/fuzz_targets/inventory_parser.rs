//! Fuzz target for the inventory parser.
//!
//! Feeds arbitrary text to both inventory formats.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_inventory_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use oraconn_format::store::{EnvExpander, Inventory, InventoryFormat, MapEnvSource};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let expander = EnvExpander::with_source(MapEnvSource::new().set("HOST", "db1"));
        // The parser should never panic, only return errors
        let _ = Inventory::parse_with(input, InventoryFormat::Toml, &expander);
        let _ = Inventory::parse_with(input, InventoryFormat::Json, &expander);
    }
});
