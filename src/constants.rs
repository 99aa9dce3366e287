//! Constants used throughout the crate
//!
//! Default string patterns and the fixed offsets used by epoch conversions.

/// Default DateTime pattern: `YYYY-MM-DDTHH:mm:ss.ffffffZ`.
///
/// The trailing `Z` is a literal; no zone conversion takes place.
pub const DEFAULT_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";

/// Default Date pattern: `YYYY-MM-DD`.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Seconds between 1601-01-01T00:00:00 and the Unix epoch.
pub const WINDOWS_TO_UNIX_EPOCH_SECONDS: i64 = 11_644_473_600;

/// Windows file-time ticks (100 ns) per microsecond.
pub const FILE_TIME_TICKS_PER_MICROSECOND: u64 = 10;

// Config file locations
pub const CONFIG_FILE_NAME: &str = "datetime_helpers.toml";
pub const CONFIG_DIR_NAME: &str = "datetime-helpers";
pub const CONFIG_GENERATED: &str = "Generated default configuration file";

// Logging
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const LOG_TIMESTAMP_FORMAT: &str = "%H:%M:%S%.3f";
