pub mod config;
pub mod flatdir_toml;
pub mod logger;

pub use config::*;
pub use logger::{LogFacade, LogLevel, Logger, MemoryLogger, setup_logging};
