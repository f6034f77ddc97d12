use log::{Level, LevelFilter, Metadata, Record};

/// Prints pipeline log lines to the terminal as they happen.
///
/// Info lines go to stdout, warnings and errors to stderr. Records from
/// other crates are dropped.
#[derive(Clone, Copy)]
pub struct ConsoleLogger {
    level: LevelFilter,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }

    pub fn init(self) -> Result<(), log::SetLoggerError> {
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(self.level);
        Ok(())
    }
}

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
            && (metadata.target().starts_with("pdf_organize")
                || metadata.target().starts_with("docmerge"))
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        match record.level() {
            Level::Info | Level::Debug | Level::Trace => println!("{}", record.args()),
            Level::Warn | Level::Error => eprintln!("{}", record.args()),
        }
    }

    fn flush(&self) {}
}
