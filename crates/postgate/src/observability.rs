//! Logging setup for the CLI.
//!
//! Human-readable logs go to stderr (stdout carries command output and, for
//! `serve`, the MCP protocol). When a log path or directory is configured,
//! a JSONL copy is written there through a non-blocking appender.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_PATH_ENV: &str = "POSTGATE_LOG_PATH";
const LOG_DIR_ENV: &str = "POSTGATE_LOG_DIR";
const LOG_FILE_NAME: &str = "postgate.jsonl";

/// Where the JSONL sink writes, if anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Explicit log file. Wins over `log_dir`.
    pub log_path: Option<PathBuf>,
    /// Directory for daily-rotated `postgate.jsonl` files.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Read `POSTGATE_LOG_PATH` / `POSTGATE_LOG_DIR`, falling back to the
    /// configured directory.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self::resolve(
            std::env::var_os(LOG_PATH_ENV).map(PathBuf::from),
            std::env::var_os(LOG_DIR_ENV).map(PathBuf::from),
            config_log_dir,
        )
    }

    fn resolve(
        env_path: Option<PathBuf>,
        env_dir: Option<PathBuf>,
        config_dir: Option<PathBuf>,
    ) -> Self {
        let non_empty = |p: PathBuf| (!p.as_os_str().is_empty()).then_some(p);
        Self {
            log_path: env_path.and_then(non_empty),
            log_dir: env_dir.and_then(non_empty).or(config_dir),
        }
    }

    /// Whether a file sink is configured.
    pub const fn has_file_sink(&self) -> bool {
        self.log_path.is_some() || self.log_dir.is_some()
    }
}

/// Filter directive from flags and the configured level.
fn level_directive(quiet: bool, verbose: u8, config_level: &str) -> &str {
    match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => config_level,
        (false, 1) => "debug",
        (false, _) => "trace",
    }
}

/// Build the filter: `RUST_LOG` when set, otherwise flags, otherwise config.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_directive(quiet, verbose, config_level)))
}

/// Install the global subscriber.
///
/// Returns the appender guard when a file sink is active; keep it alive
/// until exit so buffered lines are flushed.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let (file_layer, guard) = match file_appender(config)? {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_writer(writer)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}

fn file_appender(
    config: &ObservabilityConfig,
) -> anyhow::Result<Option<tracing_appender::rolling::RollingFileAppender>> {
    if let Some(ref path) = config.log_path {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let name = path
            .file_name()
            .with_context(|| format!("log path has no file name: {}", path.display()))?;
        ensure_dir(dir)?;
        return Ok(Some(tracing_appender::rolling::never(dir, name)));
    }
    if let Some(ref dir) = config.log_dir {
        ensure_dir(dir)?;
        return Ok(Some(tracing_appender::rolling::daily(dir, LOG_FILE_NAME)));
    }
    Ok(None)
}

fn ensure_dir(dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_pick_level() {
        assert_eq!(level_directive(false, 0, "warn"), "warn");
        assert_eq!(level_directive(false, 1, "warn"), "debug");
        assert_eq!(level_directive(false, 3, "warn"), "trace");
        assert_eq!(level_directive(true, 2, "warn"), "error");
    }

    #[test]
    fn env_dir_beats_config_dir() {
        let cfg = ObservabilityConfig::resolve(
            None,
            Some(PathBuf::from("/var/log/postgate")),
            Some(PathBuf::from("/tmp/cfg")),
        );
        assert_eq!(cfg.log_dir, Some(PathBuf::from("/var/log/postgate")));
        assert!(cfg.has_file_sink());
    }

    #[test]
    fn empty_env_values_are_ignored() {
        let cfg = ObservabilityConfig::resolve(
            Some(PathBuf::new()),
            Some(PathBuf::new()),
            Some(PathBuf::from("/tmp/cfg")),
        );
        assert_eq!(cfg.log_path, None);
        assert_eq!(cfg.log_dir, Some(PathBuf::from("/tmp/cfg")));
    }

    #[test]
    fn no_sink_by_default() {
        let cfg = ObservabilityConfig::resolve(None, None, None);
        assert!(!cfg.has_file_sink());
        assert!(file_appender(&cfg).unwrap().is_none());
    }

    #[test]
    fn explicit_path_creates_parent() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("logs").join("run.jsonl");
        let cfg = ObservabilityConfig {
            log_path: Some(path),
            log_dir: None,
        };
        assert!(file_appender(&cfg).unwrap().is_some());
        assert!(tmp.path().join("logs").is_dir());
    }
}
