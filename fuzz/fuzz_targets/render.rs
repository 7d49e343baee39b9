//! Fuzz target for rendering arbitrary descriptors.
//!
//! Every format must return a string for any attribute combination, and
//! the proxy format must only fail through its collaborators.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_render
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use oraconn_format::{DatabaseFormatter, Descriptor, FormatKind, MemorySink, MemoryStore};
use std::sync::Arc;

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    id: String,
    attributes: Vec<(String, String)>,
    servers: Vec<(String, Vec<(String, String)>)>,
}

fn descriptor(id: &str, attributes: &[(String, String)]) -> Descriptor {
    attributes
        .iter()
        .fold(Descriptor::new(id), |d, (name, value)| d.with_attr(name.as_str(), value.as_str()))
}

fuzz_target!(|input: FuzzInput| {
    let store = Arc::new(MemoryStore::new());
    for (id, attributes) in &input.servers {
        store.insert(descriptor(id, attributes));
    }
    let formatter = DatabaseFormatter::new(store, Arc::new(MemorySink::new()));
    let d = descriptor(&input.id, &input.attributes);

    for kind in FormatKind::ALL {
        let first = formatter.render(kind, &d).expect("memory collaborators never fail");
        let second = formatter.render(kind, &d).expect("memory collaborators never fail");
        assert_eq!(first, second);
    }
});
