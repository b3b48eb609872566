//! File logging for the binaries. The library itself only emits `tracing` events.

use std::str::FromStr;

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;

/// Environment variable holding the log level (`error`, `warn`, `info`, `debug`, `trace`).
pub const LOG_LEVEL_ENV: &str = "MAZEGRID_LOG";

/// Parse a level name, falling back to `info` for missing or unknown values.
pub fn parse_level(value: Option<&str>) -> Level {
    value
        .and_then(|v| Level::from_str(v.trim()).ok())
        .unwrap_or(Level::INFO)
}

/// Install a global subscriber writing to `file_name` in the current directory.
///
/// The returned guard flushes buffered events when dropped, so keep it alive until exit.
pub fn init(file_name: &str) -> WorkerGuard {
    let level = parse_level(std::env::var(LOG_LEVEL_ENV).ok().as_deref());
    let file_appender = tracing_appender::rolling::never(".", file_name);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(level)
        .init();
    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level(Some("debug")), Level::DEBUG);
        assert_eq!(parse_level(Some(" TRACE ")), Level::TRACE);
        assert_eq!(parse_level(Some("loud")), Level::INFO);
        assert_eq!(parse_level(None), Level::INFO);
    }
}
