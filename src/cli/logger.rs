use colored::*;
use log::{Level, LevelFilter, Log, Metadata, Record};

/// Levelled, coloured lines on stderr so stdout stays free for reports.
struct StderrLogger {
    level: LevelFilter,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let prefix = match record.level() {
            Level::Error => "✘ ".red().bold(),
            Level::Warn => "⚠ ".yellow().bold(),
            Level::Info => "𝒊 ".blue().bold(),
            Level::Debug | Level::Trace => "· ".dimmed(),
        };

        eprintln!("{} {}", prefix, record.args());
    }

    fn flush(&self) {}
}

pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    // a second call keeps the first logger
    if log::set_boxed_logger(Box::new(StderrLogger { level })).is_ok() {
        log::set_max_level(level);
    }
}
