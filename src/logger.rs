//! Routes the `log` facade to the frontend's log interface.
//!
//! When the environment grants `RETRO_ENVIRONMENT_GET_LOG_INTERFACE`, records
//! are forwarded through the host's printf-style callback; otherwise they go
//! to stderr. Installation is idempotent so repeated `retro_set_environment`
//! calls are harmless.

use libretro_sys::{LogLevel, LogPrintfFn};
use log::{Level, LevelFilter, Metadata, Record};
use std::ffi::CString;

struct RetroLogger {
    printf: Option<LogPrintfFn>,
}

impl log::Log for RetroLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let Some(printf) = self.printf else {
            eprintln!("[{}] {}", record.level(), record.args());
            return;
        };

        let level = match record.level() {
            Level::Error => LogLevel::Error,
            Level::Warn => LogLevel::Warn,
            Level::Info => LogLevel::Info,
            Level::Debug | Level::Trace => LogLevel::Debug,
        };
        // The frontend treats the message as a printf format string, so any
        // literal '%' has to be doubled. Interior NULs cannot cross the C
        // boundary; drop such records.
        let line = format!("{}\n", record.args()).replace('%', "%%");
        if let Ok(line) = CString::new(line) {
            unsafe {
                printf(level, line.as_ptr());
            }
        }
    }

    fn flush(&self) {}
}

/// Installs the logger. The first call wins; later calls only adjust the
/// level filter.
pub fn init(printf: Option<LogPrintfFn>) {
    let max = if cfg!(feature = "debug-log") {
        LevelFilter::Trace
    } else {
        LevelFilter::Info
    };
    let _ = log::set_boxed_logger(Box::new(RetroLogger { printf }));
    log::set_max_level(max);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn install_is_idempotent_and_logs_via_fallback() {
        init(None);
        init(None);
        log::info!("logger installed");
        assert!(log::max_level() >= LevelFilter::Info);
    }
}
