// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chrono::Local;
use log::{Level, Log, Metadata, Record, SetLoggerError};

/// A minimal stdout logger. Messages at info and above are tagged with the
/// logger label, debug and trace messages with their module path.
pub struct Logger {
    label: &'static str,
    level: Level,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    pub fn new() -> Self {
        Self {
            label: env!("CARGO_CRATE_NAME"),
            level: Level::Info,
        }
    }

    pub fn label(mut self, label: &'static str) -> Self {
        self.label = label;
        self
    }

    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Install as the global logger.
    pub fn init(self) -> Result<(), SetLoggerError> {
        let filter = self.level.to_level_filter();
        log::set_boxed_logger(Box::new(self)).map(|()| log::set_max_level(filter))
    }

    fn target<'a>(&'a self, record: &'a Record) -> &'a str {
        if record.level() >= Level::Debug {
            record.target()
        } else {
            self.label
        }
    }

    fn format(&self, record: &Record) -> String {
        format!(
            "{} {:<5} [{}] {}",
            Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            self.target(record),
            record.args()
        )
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            println!("{}", self.format(record));
        }
    }

    fn flush(&self) {}
}
