// Minimal stderr logger for the `log` facade. The library only emits records;
// the binary decides whether anything is printed.

use log::{Log, Metadata, Record};

#[derive(Debug)]
pub struct Logger(());

const LOGGER: &Logger = &Logger(());

impl Logger {
    /// Install the stderr logger and raise the global max level to `level`.
    pub fn init(level: log::LevelFilter) -> Result<(), log::SetLoggerError> {
        log::set_logger(LOGGER)?;
        log::set_max_level(level);
        Ok(())
    }
}

impl Log for Logger {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        // Filtering happens through log::set_max_level.
        true
    }

    fn log(&self, record: &Record<'_>) {
        match record.line() {
            Some(line) => eprintln!("[{}] {}:{}: {}", record.level(), record.target(), line, record.args()),
            None => eprintln!("[{}] {}: {}", record.level(), record.target(), record.args()),
        }
    }

    fn flush(&self) {}
}
