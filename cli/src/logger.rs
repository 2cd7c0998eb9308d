use crate::config::LoggingConfig;
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;
use std::fs::OpenOptions;

/// Level for the given number of `-v` flags. Without flags the configured
/// level applies, falling back to warn.
pub fn level_for(verbosity: u8, configured: Option<&str>) -> LevelFilter {
    match verbosity {
        0 => match configured.map(str::to_lowercase).as_deref() {
            Some("off") => LevelFilter::Off,
            Some("error") => LevelFilter::Error,
            Some("info") => LevelFilter::Info,
            Some("debug") => LevelFilter::Debug,
            Some("trace") => LevelFilter::Trace,
            _ => LevelFilter::Warn,
        },
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

pub fn setup_logger(verbosity: u8, config: &LoggingConfig) -> Result<(), log::SetLoggerError> {
    let log_level = level_for(verbosity, config.level());

    let colors = ColoredLevelConfig::new()
        .trace(Color::BrightBlack)
        .debug(Color::BrightBlue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    let base_config = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                colors.color(record.level()),
                record.target(),
                message
            ))
        })
        .level(log_level);

    match config.file() {
        Some(file_path) => match OpenOptions::new().create(true).append(true).open(file_path) {
            Ok(file) => base_config.chain(file).apply()?,
            Err(e) => {
                eprintln!("Warning: Failed to open log file '{file_path}': {e}");
                eprintln!("Logging to stderr instead.");
                base_config.chain(std::io::stderr()).apply()?;
            }
        },
        None => base_config.chain(std::io::stderr()).apply()?,
    }

    log::debug!("Logger initialized with level: {log_level}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_take_precedence() {
        assert_eq!(level_for(1, Some("error")), LevelFilter::Info);
        assert_eq!(level_for(2, None), LevelFilter::Debug);
        assert_eq!(level_for(3, None), LevelFilter::Trace);
        assert_eq!(level_for(7, None), LevelFilter::Trace);
    }

    #[test]
    fn test_configured_level_without_flags() {
        assert_eq!(level_for(0, None), LevelFilter::Warn);
        assert_eq!(level_for(0, Some("DEBUG")), LevelFilter::Debug);
        assert_eq!(level_for(0, Some("off")), LevelFilter::Off);
        assert_eq!(level_for(0, Some("loud")), LevelFilter::Warn);
    }
}
