use colored::Colorize;
use env_logger::Builder;
use log::Level;
use serde::Deserialize;
use std::io::Write;
use std::sync::Mutex;

/// The six levels a walk logs at, most to least severe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Verbose,
    Debug,
    Silly,
}

impl LogLevel {
    /// `verbose` and `debug` share `log::Level::Debug`; `silly` is `Trace`.
    pub fn as_log_level(self) -> Level {
        match self {
            LogLevel::Error => Level::Error,
            LogLevel::Warn => Level::Warn,
            LogLevel::Info => Level::Info,
            LogLevel::Verbose | LogLevel::Debug => Level::Debug,
            LogLevel::Silly => Level::Trace,
        }
    }
}

/// Leveled logging capability handed to the walker, runner and copier.
///
/// Implement [`Logger::log`]; the per-level methods forward to it.
pub trait Logger: Send + Sync {
    fn log(&self, level: LogLevel, msg: &str);

    fn error(&self, msg: &str) {
        self.log(LogLevel::Error, msg);
    }

    fn warn(&self, msg: &str) {
        self.log(LogLevel::Warn, msg);
    }

    fn info(&self, msg: &str) {
        self.log(LogLevel::Info, msg);
    }

    fn verbose(&self, msg: &str) {
        self.log(LogLevel::Verbose, msg);
    }

    fn debug(&self, msg: &str) {
        self.log(LogLevel::Debug, msg);
    }

    fn silly(&self, msg: &str) {
        self.log(LogLevel::Silly, msg);
    }
}

/// Forwards to the `log` facade under this crate's target.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogFacade;

impl Logger for LogFacade {
    fn log(&self, level: LogLevel, msg: &str) {
        log::log!(target: env!("CARGO_PKG_NAME"), level.as_log_level(), "{}", msg);
    }
}

/// Keeps every message in memory, in order.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    records: Mutex<Vec<(LogLevel, String)>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<(LogLevel, String)> {
        self.records
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    /// Messages logged at exactly `level`.
    pub fn messages(&self, level: LogLevel) -> Vec<String> {
        self.records()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m)
            .collect()
    }
}

impl Logger for MemoryLogger {
    fn log(&self, level: LogLevel, msg: &str) {
        if let Ok(mut records) = self.records.lock() {
            records.push((level, msg.to_string()));
        }
    }
}

/// Initialise the terminal logger (binary only).
pub fn setup_logging(level: LogLevel) {
    use log::LevelFilter;

    Builder::from_default_env()
        .filter_level(LevelFilter::Warn) // Default: only warnings from dependencies
        .filter_module(env!("CARGO_PKG_NAME"), level.as_log_level().to_level_filter())
        .format(|buf, record| {
            let name = env!("CARGO_PKG_NAME");
            let line = match record.level() {
                Level::Error | Level::Warn => {
                    let level_str = match record.level() {
                        Level::Warn => "WARN".yellow(),
                        Level::Error => "ERROR".red(),
                        _ => unreachable!(),
                    };
                    let path = record.target().to_string().white();
                    format!("[{} {} {}] {}", name.cyan(), level_str, path, record.args())
                }
                _ => format!("[{}] {}", name.cyan(), record.args()),
            };
            writeln!(buf, "{}", line)
        })
        .init();
}
