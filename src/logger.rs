use log::{Log, Record, Level, Metadata, SetLoggerError};


struct SimpleLogger {
    level: Level,
}


impl Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}


/// Sends log records at `level` and above to stderr
pub fn init(level: Level) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(SimpleLogger { level: level }))?;
    log::set_max_level(level.to_level_filter());
    Ok(())
}
