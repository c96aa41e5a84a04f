use chrono::Local;
use colored::{Color, Colorize};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Installs the console logger as the `log` backend.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(ConsoleLogger { level }))?;
    log::set_max_level(level);
    Ok(())
}

struct ConsoleLogger {
    level: LevelFilter,
}

impl ConsoleLogger {
    fn is_own_target(target: &str) -> bool {
        target.starts_with(env!("CARGO_CRATE_NAME"))
    }
}

fn level_color(level: Level) -> Color {
    match level {
        Level::Trace => Color::Cyan,
        Level::Debug => Color::Blue,
        Level::Info => Color::Green,
        Level::Warn => Color::Yellow,
        Level::Error => Color::Red,
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        // Dependencies (hyper, reqwest, ...) only surface warnings.
        if !Self::is_own_target(metadata.target()) && metadata.level() > Level::Warn {
            return false;
        }
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        let level = format!("{:<5}", record.level().as_str());
        eprintln!(
            "{} [{}] {}: {}",
            timestamp.bright_black(),
            level.color(level_color(record.level())).bold(),
            record.target().bright_blue(),
            record.args()
        );
    }

    fn flush(&self) {}
}
