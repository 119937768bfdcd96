use std::{
    io::Write,
    sync::{OnceLock, RwLock},
};

use log::{LevelFilter, Log, Metadata, Record};

static LOGGER: OnceLock<AppLogger> = OnceLock::new();

pub fn get_logger() -> &'static AppLogger {
    LOGGER.get_or_init(|| AppLogger::new(LevelFilter::Warn))
}

/// Installs the stderr logger, showing records up to `level`.
pub fn init(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    let logger = get_logger();
    logger.set_min_level(level);

    log::set_logger(logger)?;
    log::set_max_level(LevelFilter::Trace);
    Ok(())
}

/// Raises `level` by `steps` notches, saturating at `Trace`.
pub fn raise(level: LevelFilter, steps: u8) -> LevelFilter {
    let levels = LevelFilter::iter().collect::<Vec<_>>();
    let idx = levels.iter().position(|l| *l == level).unwrap_or(0);
    levels[(idx + steps as usize).min(levels.len() - 1)]
}

pub struct AppLogger {
    min_level: RwLock<LevelFilter>,
}

impl AppLogger {
    fn new(min_level: LevelFilter) -> Self {
        Self {
            min_level: RwLock::new(min_level),
        }
    }

    pub fn min_level(&self) -> LevelFilter {
        match self.min_level.read() {
            Ok(level) => *level,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    pub fn set_min_level(&self, level: LevelFilter) {
        match self.min_level.write() {
            Ok(mut guard) => *guard = level,
            Err(poisoned) => *poisoned.into_inner() = level,
        }
    }

    pub fn format(record: &Record) -> String {
        format!("{:<5} [{}] {}", record.level(), record.target(), record.args())
    }
}

impl Log for AppLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.min_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let _ = writeln!(std::io::stderr().lock(), "{}", Self::format(record));
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raise_saturates() {
        assert_eq!(raise(LevelFilter::Warn, 0), LevelFilter::Warn);
        assert_eq!(raise(LevelFilter::Warn, 1), LevelFilter::Info);
        assert_eq!(raise(LevelFilter::Warn, 2), LevelFilter::Debug);
        assert_eq!(raise(LevelFilter::Off, 1), LevelFilter::Error);
        assert_eq!(raise(LevelFilter::Info, 9), LevelFilter::Trace);
    }

    #[test]
    fn filters_by_level() {
        let logger = AppLogger::new(LevelFilter::Info);
        let info = Metadata::builder().level(log::Level::Info).build();
        let debug = Metadata::builder().level(log::Level::Debug).build();
        assert!(logger.enabled(&info));
        assert!(!logger.enabled(&debug));

        logger.set_min_level(LevelFilter::Off);
        assert!(!logger.enabled(&info));
    }

    #[test]
    fn line_format() {
        let line = AppLogger::format(
            &Record::builder()
                .args(format_args!("carved {} cells", 12))
                .level(log::Level::Debug)
                .target("mazecore::algorithms")
                .build(),
        );
        assert_eq!(line, "DEBUG [mazecore::algorithms] carved 12 cells");
    }
}
