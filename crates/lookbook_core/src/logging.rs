//! Logging bootstrap and redaction helpers.
//!
//! # Responsibility
//! - Start rotating file logs at most once per process.
//! - Keep credentials out of log lines.
//!
//! # Invariants
//! - Initialization is idempotent for an identical `(level, dir)` pair and
//!   rejects any different pair afterwards.
//! - Initialization never panics.
//! - Log lines are single-line `event=... module=... status=...` records.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "lookbook";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;
const MAX_PANIC_PAYLOAD_CHARS: usize = 160;
const SECRET_VISIBLE_PREFIX: usize = 5;

pub const LOG_LEVEL_ENV: &str = "LOOKBOOK_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "LOOKBOOK_LOG_DIR";

static ACTIVE_LOGGER: OnceCell<ActiveLogger> = OnceCell::new();
static PANIC_HOOK: OnceCell<()> = OnceCell::new();

struct ActiveLogger {
    level: &'static str,
    dir: PathBuf,
    _handle: LoggerHandle,
}

/// Starts file logging at `level` inside the absolute directory `log_dir`.
///
/// # Errors
/// - Unknown level, empty or relative directory.
/// - Directory creation or logger startup failure.
/// - A logger is already active with a different level or directory.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), String> {
    let level = parse_level(level)?;
    let dir = parse_log_dir(log_dir)?;

    let active = ACTIVE_LOGGER.get_or_try_init(|| start_logger(level, &dir))?;
    if active.dir != dir {
        return Err(format!(
            "logging already active in `{}`; refusing to switch to `{}`",
            active.dir.display(),
            dir.display()
        ));
    }
    if active.level != level {
        return Err(format!(
            "logging already active at level `{}`; refusing to switch to `{level}`",
            active.level
        ));
    }
    Ok(())
}

/// Starts logging from `LOOKBOOK_LOG_LEVEL` / `LOOKBOOK_LOG_DIR`.
///
/// Returns `Ok(false)` without starting anything when no directory is set.
pub fn init_logging_from_env() -> Result<bool, String> {
    let Some(dir) = std::env::var(LOG_DIR_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
    else {
        return Ok(false);
    };
    let level = std::env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| default_log_level().to_string());
    init_logging(&level, &dir).map(|()| true)
}

/// Active `(level, dir)`, or `None` before initialization.
pub fn logging_status() -> Option<(&'static str, PathBuf)> {
    ACTIVE_LOGGER
        .get()
        .map(|active| (active.level, active.dir.clone()))
}

/// `debug` for debug builds, `info` otherwise.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

/// Masks a credential down to a short prefix, e.g. `patAB…`.
pub fn redact_secret(secret: &str) -> String {
    let trimmed = secret.trim();
    if trimmed.is_empty() {
        return "<unset>".to_string();
    }
    if trimmed.chars().count() <= SECRET_VISIBLE_PREFIX {
        return "…".to_string();
    }
    let prefix: String = trimmed.chars().take(SECRET_VISIBLE_PREFIX).collect();
    format!("{prefix}…")
}

fn start_logger(level: &'static str, dir: &Path) -> Result<ActiveLogger, String> {
    std::fs::create_dir_all(dir)
        .map_err(|err| format!("cannot create log directory `{}`: {err}", dir.display()))?;

    let handle = Logger::try_with_str(level)
        .map_err(|err| format!("invalid log level `{level}`: {err}"))?
        .log_to_file(
            FileSpec::default()
                .directory(dir)
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| format!("cannot start logger: {err}"))?;

    install_panic_hook();
    info!(
        "event=logging_started module=logging status=ok level={} version={} os={}",
        level,
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS
    );

    Ok(ActiveLogger {
        level,
        dir: dir.to_path_buf(),
        _handle: handle,
    })
}

fn parse_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        )),
    }
}

fn parse_log_dir(log_dir: &str) -> Result<PathBuf, String> {
    let trimmed = log_dir.trim();
    if trimmed.is_empty() {
        return Err("log directory cannot be empty".to_string());
    }
    let path = Path::new(trimmed);
    if !path.is_absolute() {
        return Err(format!("log directory must be absolute, got `{trimmed}`"));
    }
    Ok(path.to_path_buf())
}

fn install_panic_hook() {
    if PANIC_HOOK.set(()).is_err() {
        return;
    }
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());
        let payload = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(|message| (*message).to_string())
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_string());
        error!(
            "event=panic module=logging status=error location={} payload={}",
            location,
            single_line(&payload, MAX_PANIC_PAYLOAD_CHARS)
        );
        previous(panic_info);
    }));
}

fn single_line(value: &str, max_chars: usize) -> String {
    let flattened = value.replace(['\n', '\r'], " ");
    let mut out: String = flattened.chars().take(max_chars).collect();
    if flattened.chars().count() > max_chars {
        out.push_str("...");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{init_logging, logging_status, parse_level, parse_log_dir, redact_secret, single_line};

    #[test]
    fn parse_level_normalizes_aliases() {
        assert_eq!(parse_level(" WARNING ").unwrap(), "warn");
        assert_eq!(parse_level("Debug").unwrap(), "debug");
        assert!(parse_level("verbose").is_err());
    }

    #[test]
    fn parse_log_dir_requires_absolute_path() {
        let err = parse_log_dir("logs").expect_err("relative dir must be rejected");
        assert!(err.contains("absolute"));
        assert!(parse_log_dir("   ").is_err());
    }

    #[test]
    fn redact_secret_keeps_short_prefix_only() {
        assert_eq!(redact_secret("patABCDEFGHIJ"), "patAB…");
        assert_eq!(redact_secret("abc"), "…");
        assert_eq!(redact_secret(""), "<unset>");
    }

    #[test]
    fn single_line_flattens_and_truncates() {
        let out = single_line("one\ntwo\rthree", 7);
        assert_eq!(out, "one two...");
    }

    #[test]
    fn init_is_idempotent_and_rejects_conflicts() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        let first_dir = first.path().to_str().unwrap().to_string();
        let second_dir = second.path().to_str().unwrap().to_string();

        init_logging("info", &first_dir).unwrap();
        init_logging("info", &first_dir).unwrap();
        assert!(init_logging("debug", &first_dir)
            .unwrap_err()
            .contains("refusing to switch"));
        assert!(init_logging("info", &second_dir)
            .unwrap_err()
            .contains("refusing to switch"));

        let (level, dir) = logging_status().unwrap();
        assert_eq!(level, "info");
        assert_eq!(dir, first.path());
    }
}
