//! Terminal logger.
//!
//! User-facing output goes through `log::info!` and is printed to stdout
//! as-is. Warnings and errors go to stderr with a colored prefix; debug
//! output (only with `--verbose`) is prefixed with its target. With
//! `--logfile`, every printed line is also appended to the file with ANSI
//! codes stripped.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

struct CliLogger {
    level: LevelFilter,
    file: Option<Mutex<File>>,
}

impl Log for CliLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = match record.level() {
            Level::Info => {
                let line = record.args().to_string();
                println!("{line}");
                line
            }
            Level::Warn => {
                let line = format!(
                    "{} {}",
                    "warning:".if_supports_color(Stderr, |t| t.yellow()),
                    record.args()
                );
                eprintln!("{line}");
                line
            }
            Level::Error => {
                let line = format!(
                    "{} {}",
                    "error:".if_supports_color(Stderr, |t| t.red()),
                    record.args()
                );
                eprintln!("{line}");
                line
            }
            Level::Debug | Level::Trace => {
                let line = format!(
                    "{} {}",
                    format!("[{}]", record.target()).if_supports_color(Stderr, |t| t.dimmed()),
                    record.args()
                );
                eprintln!("{line}");
                line
            }
        };

        if let Some(file) = &self.file {
            if let Ok(mut f) = file.lock() {
                let _ = writeln!(f, "{}", strip_ansi_escapes::strip_str(&line));
            }
        }
    }

    fn flush(&self) {
        if let Some(file) = &self.file {
            if let Ok(mut f) = file.lock() {
                let _ = f.flush();
            }
        }
    }
}

/// Install the logger. `quiet` wins over `verbose`.
pub(crate) fn init(quiet: bool, verbose: bool, logfile: Option<&Path>) {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let file = logfile.and_then(|path| {
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => Some(Mutex::new(f)),
            Err(e) => {
                eprintln!(
                    "{} cannot open log file {}: {e}",
                    "warning:".if_supports_color(Stderr, |t| t.yellow()),
                    path.display()
                );
                None
            }
        }
    });

    if log::set_boxed_logger(Box::new(CliLogger { level, file })).is_ok() {
        log::set_max_level(level);
    }
}

/// Print an empty line through the logger.
pub(crate) fn log_blank() {
    log::info!("");
}
