//! Logging setup: human-readable logs on stderr plus JSONL logs in a file.
//!
//! The file sink is chosen from, in order: `READSCORE_LOG_PATH` (exact file),
//! `READSCORE_LOG_DIR`, the configured `log_dir`, then the platform state
//! directory. Explicit locations must be writable; the platform default is
//! skipped silently when it is not.

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_PATH_ENV: &str = "READSCORE_LOG_PATH";
const LOG_DIR_ENV: &str = "READSCORE_LOG_DIR";
const LOG_FILE_NAME: &str = "readscore.jsonl";

/// Where JSONL logs go.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Exact log file, from `READSCORE_LOG_PATH`.
    pub log_path: Option<PathBuf>,
    /// Log directory, from `READSCORE_LOG_DIR` or config.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Read the environment, falling back to `config_log_dir` for the directory.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self::resolve(env_path(LOG_PATH_ENV), env_path(LOG_DIR_ENV), config_log_dir)
    }

    fn resolve(
        log_path: Option<PathBuf>,
        env_dir: Option<PathBuf>,
        config_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            log_path,
            log_dir: env_dir.or(config_dir),
        }
    }

    const fn is_explicit(&self) -> bool {
        self.log_path.is_some() || self.log_dir.is_some()
    }

    /// Directory and file name for the JSONL sink.
    fn target(&self) -> Option<(PathBuf, PathBuf)> {
        if let Some(path) = &self.log_path {
            let file_name = PathBuf::from(path.file_name()?);
            let dir = path
                .parent()
                .filter(|parent| !parent.as_os_str().is_empty())
                .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
            return Some((dir, file_name));
        }
        self.log_dir
            .clone()
            .or_else(default_log_dir)
            .map(|dir| (dir, PathBuf::from(LOG_FILE_NAME)))
    }
}

fn env_path(name: &str) -> Option<PathBuf> {
    std::env::var_os(name)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn default_log_dir() -> Option<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", "readscore")?;
    let base = dirs.state_dir().unwrap_or_else(|| dirs.data_local_dir());
    Some(base.join("logs"))
}

/// Filter directive for the given verbosity flags and configured level.
pub fn filter_directive(quiet: bool, verbose: u8, level: &str) -> String {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => level,
            1 => "debug",
            _ => "trace",
        }
    };
    level.to_string()
}

/// Build the log filter. `RUST_LOG` wins when set and valid.
pub fn env_filter(quiet: bool, verbose: u8, level: &str) -> EnvFilter {
    let fallback = filter_directive(quiet, verbose, level);
    if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some_and(|value| !value.is_empty()) {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&fallback))
    } else {
        EnvFilter::new(fallback)
    }
}

fn file_writer(config: &ObservabilityConfig) -> anyhow::Result<Option<(NonBlocking, WorkerGuard)>> {
    let Some((dir, file_name)) = config.target() else {
        return Ok(None);
    };
    let appender = std::fs::create_dir_all(&dir)
        .map_err(anyhow::Error::from)
        .and_then(|()| {
            RollingFileAppender::builder()
                .rotation(Rotation::NEVER)
                .filename_prefix(file_name.to_string_lossy())
                .build(&dir)
                .map_err(anyhow::Error::from)
        });
    match appender {
        Ok(appender) => Ok(Some(tracing_appender::non_blocking(appender))),
        Err(err) if config.is_explicit() => {
            Err(err).with_context(|| format!("failed to open log file in {}", dir.display()))
        }
        Err(_) => Ok(None),
    }
}

/// Install the global subscriber.
///
/// Keep the returned guard alive until exit so buffered file logs are flushed.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let (file_layer, guard) = match file_writer(config)? {
        Some((writer, guard)) => (
            Some(fmt::layer().json().with_writer(writer)),
            Some(guard),
        ),
        None => (None, None),
    };
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal());

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;
    Ok(guard)
}
