// src/logger.rs
// `log` backend for the binary: "[hh:mm:ss.mmm][LEVEL] message" lines,
// elapsed time since the logger was installed, to stderr or appended to a file.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use std::time::Instant;

use log::{LevelFilter, Log, Metadata, Record};

enum Sink {
    Stderr,
    File(File),
}

pub struct FileLogger {
    start: Instant,
    level: LevelFilter,
    sink: Mutex<Sink>,
}

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

impl FileLogger {
    pub fn stderr(level: LevelFilter) -> Self {
        Self { start: Instant::now(), level, sink: Mutex::new(Sink::Stderr) }
    }

    pub fn file(level: LevelFilter, path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self { start: Instant::now(), level, sink: Mutex::new(Sink::File(file)) })
    }

    fn line(&self, record: &Record<'_>) -> String {
        let elapsed = fmt_elapsed(self.start.elapsed().as_millis());
        format!("[{elapsed}][{}] {}\n", record.level(), record.args())
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = self.line(record);
        if let Ok(mut sink) = self.sink.lock() {
            let _ = match &mut *sink {
                Sink::Stderr => io::stderr().write_all(line.as_bytes()),
                Sink::File(f) => f.write_all(line.as_bytes()),
            };
        }
    }

    fn flush(&self) {
        if let Ok(mut sink) = self.sink.lock() {
            let _ = match &mut *sink {
                Sink::Stderr => io::stderr().flush(),
                Sink::File(f) => f.flush(),
            };
        }
    }
}

/// Install the process-wide logger. Only the first call wins.
pub fn init(level: LevelFilter, path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let logger = match path {
        Some(p) => FileLogger::file(level, p)?,
        None => FileLogger::stderr(level),
    };
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(level);
    Ok(())
}
