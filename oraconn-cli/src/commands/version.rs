//! `oraconn version` command - Display version information.

use oraconn_format::FormatKind;

use crate::error::CliResult;
use crate::output::{self, kv};

/// Package version
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name
const NAME: &str = env!("CARGO_PKG_NAME");

/// Run the version command
pub async fn run() -> CliResult<()> {
    kv("Version", VERSION);
    kv("Binary", NAME);

    #[cfg(debug_assertions)]
    let build_mode = "debug";
    #[cfg(not(debug_assertions))]
    let build_mode = "release";

    kv("Build", build_mode);

    let formats: Vec<&str> = FormatKind::ALL.iter().map(FormatKind::name).collect();
    kv("Formats", &format!("{} (alias: ski)", formats.join(", ")));

    output::newline();
    output::dim(env!("CARGO_PKG_DESCRIPTION"));

    Ok(())
}
