//! Log sink behind the [`info!`](crate::info), [`pt!`](crate::pt)
//! and [`err!`](crate::err) macros.
//!
//! Every line goes through [`auto_redact`] before it is printed,
//! kept in memory or written to the log file.

use std::{
    collections::VecDeque,
    fs::File,
    io::Write,
    path::Path,
    sync::{
        atomic::{AtomicBool, Ordering},
        LazyLock, Mutex,
    },
};

use regex::Regex;

mod macros;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogType {
    Info,
    Error,
    Point,
}

impl std::fmt::Display for LogType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                LogType::Info => "[info]",
                LogType::Error => "[error]",
                LogType::Point => "-",
            }
        )
    }
}

/// Git Bash (MSYS) on Windows drops stderr from native programs.
pub static IS_GIT_BASH: LazyLock<bool> = LazyLock::new(|| {
    cfg!(target_os = "windows") && std::env::var("MSYSTEM").is_ok_and(|n| !n.is_empty())
});

static PRINT_ENABLED: AtomicBool = AtomicBool::new(true);

const MEMORY_LOG_LIMIT: usize = 2000;

#[derive(Default)]
struct LoggingState {
    memory: VecDeque<(String, LogType)>,
    file: Option<File>,
}

static LOGGER: LazyLock<Mutex<LoggingState>> =
    LazyLock::new(|| Mutex::new(LoggingState::default()));

/// Whether log lines are echoed to the terminal.
#[must_use]
pub fn is_print() -> bool {
    PRINT_ENABLED.load(Ordering::Relaxed)
}

pub fn set_print(enabled: bool) {
    PRINT_ENABLED.store(enabled, Ordering::Relaxed);
}

/// Start mirroring log lines into a file (truncating it).
///
/// # Errors
/// If the file couldn't be created.
pub fn set_log_file(path: &Path) -> std::io::Result<()> {
    let file = File::create(path)?;
    if let Ok(mut logger) = LOGGER.lock() {
        logger.file = Some(file);
    }
    Ok(())
}

/// Keep a line in the in-memory log only.
pub fn print_to_memory(msg: &str, t: LogType) {
    let Ok(mut logger) = LOGGER.lock() else {
        return;
    };
    if logger.memory.len() >= MEMORY_LOG_LIMIT {
        logger.memory.pop_front();
    }
    logger.memory.push_back((msg.to_owned(), t));
}

/// Keep a line in memory and append it to the log file, if one is set.
pub fn print_to_file(msg: &str, t: LogType) {
    print_to_memory(msg, t);
    let Ok(mut logger) = LOGGER.lock() else {
        return;
    };
    if let Some(file) = &mut logger.file {
        let time = chrono::Local::now().format("%H:%M:%S");
        _ = writeln!(file, "[{time}] {t} {msg}");
    }
}

/// A copy of the in-memory log, oldest first.
#[must_use]
pub fn get_logs() -> Vec<(String, LogType)> {
    LOGGER
        .lock()
        .map(|logger| logger.memory.iter().cloned().collect())
        .unwrap_or_default()
}

static REDACT_ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\b(password|passwd|secret|token|otp)(["']?\s*[:=]\s*["']?)([^\s"',&]+)"#)
        .expect("valid redaction regex")
});
static REDACT_BEARER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(bearer\s+)[A-Za-z0-9._~+/=-]+").expect("valid redaction regex")
});

/// Masks anything that looks like a credential assignment
/// (`password=...`, `"token": "..."`, `Bearer ...`).
#[must_use]
pub fn auto_redact(msg: &str) -> String {
    let msg = REDACT_ASSIGNMENT.replace_all(msg, "$1$2[REDACTED]");
    REDACT_BEARER
        .replace_all(&msg, "${1}[REDACTED]")
        .into_owned()
}
