//! Diagnostic logging for formatter runs.
//!
//! Formatting emits `tracing` events: a `debug` per render and a `warn` for
//! every recorded diagnostic and every unresolved proxy server. Nothing is
//! printed unless a subscriber is installed, and [`init`] only installs one
//! when asked to through the environment:
//!
//! - `ORACONN_DEBUG=true|1|yes` - log at `debug`
//! - `ORACONN_LOG_LEVEL=trace|debug|info|warn|error` - log at the given level
//! - `ORACONN_LOG_FORMAT=compact|pretty|json` - line format (default: compact)
//!
//! Output always goes to stderr so that rendered strings on stdout can be
//! piped into client tools unchanged.
//!
//! ```rust
//! use oraconn_format::logging::{LogFormat, LogSettings};
//! use oraconn_format::store::MapEnvSource;
//!
//! let env = MapEnvSource::new().set("ORACONN_DEBUG", "1");
//! let settings = LogSettings::from_source(&env).unwrap();
//! assert_eq!(settings.filter(), "oraconn=debug,oraconn_format=debug,oraconn_cli=debug");
//! assert_eq!(settings.format, LogFormat::Compact);
//!
//! assert!(LogSettings::from_source(&MapEnvSource::new()).is_none());
//! ```

use crate::store::{EnvSource, StdEnvSource};
use std::sync::Once;
use tracing::Level;

const DEBUG_VAR: &str = "ORACONN_DEBUG";
const LEVEL_VAR: &str = "ORACONN_LOG_LEVEL";
const FORMAT_VAR: &str = "ORACONN_LOG_FORMAT";

/// Crates whose events pass the filter.
const TARGETS: [&str; 3] = ["oraconn", "oraconn_format", "oraconn_cli"];

static INIT: Once = Once::new();

/// Line format of log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One short line per event.
    #[default]
    Compact,
    /// Multi-line, human oriented.
    Pretty,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    /// Parse a format name; unrecognised names give the default.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "pretty" => Self::Pretty,
            "json" => Self::Json,
            _ => Self::Compact,
        }
    }
}

/// Resolved logging configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogSettings {
    /// Most verbose level that is emitted.
    pub level: Level,
    /// Line format.
    pub format: LogFormat,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            format: LogFormat::default(),
        }
    }
}

impl LogSettings {
    /// Settings from the process environment, `None` when logging is off.
    pub fn from_env() -> Option<Self> {
        Self::from_source(&StdEnvSource)
    }

    /// Settings from `source`, `None` when neither `ORACONN_DEBUG` nor
    /// `ORACONN_LOG_LEVEL` asks for logging.
    pub fn from_source<S: EnvSource + ?Sized>(source: &S) -> Option<Self> {
        let debug = source
            .get(DEBUG_VAR)
            .is_some_and(|v| matches!(v.to_ascii_lowercase().as_str(), "true" | "1" | "yes"));
        let level = source.get(LEVEL_VAR);
        if !debug && level.is_none() {
            return None;
        }

        let fallback = if debug { Level::DEBUG } else { Level::WARN };
        Some(Self {
            level: level
                .and_then(|name| name.parse().ok())
                .unwrap_or(fallback),
            format: source
                .get(FORMAT_VAR)
                .map(|name| LogFormat::from_name(&name))
                .unwrap_or_default(),
        })
    }

    /// Raise the level for `count` repetitions of a verbosity flag.
    ///
    /// The level never drops below what is already configured.
    pub fn with_verbosity(mut self, count: u8) -> Self {
        let wanted = match count {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        };
        self.level = self.level.max(wanted);
        self
    }

    /// The `EnvFilter` directive for these settings.
    pub fn filter(&self) -> String {
        let level = self.level.as_str().to_ascii_lowercase();
        TARGETS
            .iter()
            .map(|target| format!("{}={}", target, level))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Install a subscriber configured from the environment.
///
/// Does nothing when logging is not requested. Subsequent calls are no-ops.
pub fn init() {
    if let Some(settings) = LogSettings::from_env() {
        init_with(settings);
    }
}

/// Install a subscriber with explicit settings. Subsequent calls are no-ops.
///
/// Without the `tracing-subscriber` feature events are left to whatever
/// subscriber the embedding application installs.
pub fn init_with(settings: LogSettings) {
    INIT.call_once(|| {
        #[cfg(feature = "tracing-subscriber")]
        {
            use tracing_subscriber::{EnvFilter, fmt, prelude::*};

            let filter =
                EnvFilter::try_new(settings.filter()).unwrap_or_else(|_| EnvFilter::new("warn"));
            let registry = tracing_subscriber::registry().with(filter);

            match settings.format {
                LogFormat::Json => registry
                    .with(fmt::layer().json().with_writer(std::io::stderr))
                    .init(),
                LogFormat::Pretty => registry
                    .with(fmt::layer().pretty().with_writer(std::io::stderr))
                    .init(),
                LogFormat::Compact => registry
                    .with(fmt::layer().compact().with_writer(std::io::stderr))
                    .init(),
            }

            tracing::debug!(level = %settings.level, format = ?settings.format, "logging initialized");
        }

        #[cfg(not(feature = "tracing-subscriber"))]
        let _ = settings;
    });
}
